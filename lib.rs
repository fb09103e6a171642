pub mod config;
pub mod quadtree;

use std::error::Error;

// 重新导出主要的公共接口
pub use config::IndexConfig;
pub use quadtree::{Entry, IndexBuilder, IndexError, Quadrant, QuadrantIter, Rectangle, SpatialIndex};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
