pub mod algorithms;
pub mod error;
pub mod index;
pub mod iter;
pub mod node;
pub mod rectangle;

// 重新导出主要类型
pub use error::IndexError;
pub use index::{IndexBuilder, SpatialIndex, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS};
pub use iter::QuadrantIter;
pub use node::{Entry, Quadrant};
pub use rectangle::Rectangle;
