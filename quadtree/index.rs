use std::fmt::Debug;
use std::marker::PhantomData;

use super::error::IndexError;
use super::iter::QuadrantIter;
use super::node::{Entry, Quadrant};
use super::rectangle::Rectangle;
use crate::config::IndexSettings;

/// 默认分裂阈值
pub const DEFAULT_MAX_ITEMS: usize = 10;
/// 默认最大深度
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// 四叉树空间索引
///
/// 在固定的二维范围内存储带边界框的任意数据，并回答
/// "哪些数据与给定矩形相交"。数据只需要支持相等比较。
///
/// ```
/// use spindex::{Rectangle, SpatialIndex};
///
/// let mut index = SpatialIndex::new(Rectangle::new(0.0, 0.0, 100.0, 100.0));
/// index.insert("duck", Rectangle::new(50.0, 30.0, 53.0, 60.0));
/// index.insert("cookie", Rectangle::new(10.0, 20.0, 15.0, 25.0));
///
/// let hits = index.intersect(Rectangle::new(51.0, 51.0, 86.0, 86.0));
/// assert_eq!(hits, vec![&"duck"]);
/// ```
#[derive(Debug, Clone)]
pub struct SpatialIndex<T> {
    /// 根节点
    root: Quadrant<T>,
}

impl<T> SpatialIndex<T> {
    /// 用边界框和默认参数（max_items=10, max_depth=20）创建索引
    pub fn new(bbox: Rectangle) -> Self {
        let bbox = bbox.normalize();
        SpatialIndex {
            root: Quadrant::new(bbox.center(), bbox.half_extent(), 0, DEFAULT_MAX_ITEMS, DEFAULT_MAX_DEPTH),
        }
    }

    /// 创建构造器
    pub fn builder() -> IndexBuilder<T> {
        IndexBuilder::default()
    }

    /// 从配置创建索引，配置中必须给出 bbox
    pub fn from_settings(settings: &IndexSettings) -> Result<Self, IndexError> {
        let mut builder = Self::builder()
            .max_items(settings.max_items)
            .max_depth(settings.max_depth);
        if let Some(bbox) = settings.bbox {
            builder = builder.bbox(bbox);
        }
        builder.build()
    }

    /// 获取根节点
    pub fn root(&self) -> &Quadrant<T> {
        &self.root
    }

    /// 索引跟踪的范围
    pub fn bounds(&self) -> Rectangle {
        self.root.bounds()
    }

    /// 获取分裂阈值
    pub fn max_items(&self) -> usize {
        self.root.max_items
    }

    /// 获取最大深度
    pub fn max_depth(&self) -> usize {
        self.root.max_depth
    }

    /// 获取总的条目数量
    pub fn count(&self) -> usize {
        self.root.len()
    }

    /// 检查索引是否为空
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// 当前最深节点的深度
    pub fn depth(&self) -> usize {
        self.iter().map(Quadrant::depth).max().unwrap_or(0)
    }

    /// 深度优先遍历所有节点（含根节点），仅用于检查
    pub fn iter(&self) -> QuadrantIter<'_, T> {
        self.root.iter()
    }
}

impl<T: PartialEq + Clone> SpatialIndex<T> {
    /// 插入数据及其边界框，边界框会先被规范化
    pub fn insert(&mut self, item: T, bbox: Rectangle) {
        let rect = bbox.normalize();
        tracing::trace!(rect = %rect, "insert");
        self.root.insert_entry(Entry::new(item, rect));
    }
}

impl<T: PartialEq> SpatialIndex<T> {
    /// 删除数据
    ///
    /// item 和 bbox 都必须与插入时完全一致，否则返回 `EntryNotFound`。
    pub fn remove(&mut self, item: &T, bbox: Rectangle) -> Result<(), IndexError> {
        self.root.remove_entry(item, &bbox.normalize())
    }

    /// 查询与矩形相交的所有数据（按数据相等去重）
    pub fn intersect(&self, bbox: Rectangle) -> Vec<&T> {
        let query = bbox.normalize();
        let mut results = Vec::new();
        self.root.intersect_into(&query, &mut results);
        results
    }
}

impl<T: Debug> SpatialIndex<T> {
    /// 整棵树的结构文本
    pub fn structure_string(&self) -> String {
        self.root.structure_string()
    }
}

impl<'a, T> IntoIterator for &'a SpatialIndex<T> {
    type Item = &'a Quadrant<T>;
    type IntoIter = QuadrantIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// 空间索引构造器
///
/// 二选一：给出 `bbox`，或者同时给出 `center` 和 `half_extent`。
#[derive(Debug, Clone)]
pub struct IndexBuilder<T> {
    bbox: Option<Rectangle>,
    center: Option<[f64; 2]>,
    half_extent: Option<[f64; 2]>,
    max_items: usize,
    max_depth: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T> Default for IndexBuilder<T> {
    fn default() -> Self {
        Self {
            bbox: None,
            center: None,
            half_extent: None,
            max_items: DEFAULT_MAX_ITEMS,
            max_depth: DEFAULT_MAX_DEPTH,
            _item: PhantomData,
        }
    }
}

impl<T> IndexBuilder<T> {
    pub fn bbox(mut self, bbox: Rectangle) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.center = Some([x, y]);
        self
    }

    /// 半宽与半高
    pub fn half_extent(mut self, half_width: f64, half_height: f64) -> Self {
        self.half_extent = Some([half_width, half_height]);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 校验几何参数并创建索引
    pub fn build(self) -> Result<SpatialIndex<T>, IndexError> {
        let (center, half_extent) = match (self.bbox, self.center, self.half_extent) {
            (Some(bbox), None, None) => {
                let bbox = bbox.normalize();
                (bbox.center(), bbox.half_extent())
            }
            (None, Some(center), Some(half_extent)) => (center, half_extent),
            (Some(_), _, _) => {
                return Err(IndexError::InvalidGeometry(
                    "bbox cannot be combined with center/half_extent".to_string(),
                ))
            }
            _ => {
                return Err(IndexError::InvalidGeometry(
                    "either bbox or both center and half_extent must be set".to_string(),
                ))
            }
        };

        if !center.iter().chain(half_extent.iter()).all(|v| v.is_finite()) {
            return Err(IndexError::InvalidGeometry(format!(
                "non-finite geometry: center={:?}, half_extent={:?}",
                center, half_extent
            )));
        }
        if half_extent.iter().any(|v| *v < 0.0) {
            return Err(IndexError::InvalidGeometry(format!(
                "half_extent must not be negative: {:?}",
                half_extent
            )));
        }

        Ok(SpatialIndex {
            root: Quadrant::new(center, half_extent, 0, self.max_items, self.max_depth),
        })
    }
}
