use super::iter::QuadrantIter;
use super::rectangle::Rectangle;

/// 子象限下标，顺序固定：西南、西北、东南、东北
pub const SOUTH_WEST: usize = 0;
pub const NORTH_WEST: usize = 1;
pub const SOUTH_EAST: usize = 2;
pub const NORTH_EAST: usize = 3;

/// 索引条目：用户数据及其规范化后的边界框
#[derive(Debug, Clone)]
pub struct Entry<T> {
    /// 用户数据
    pub item: T,
    /// 规范化后的边界框
    pub rect: Rectangle,
    /// 是否为计数副本
    ///
    /// 只跨一条分割线的矩形会被复制到两个子象限，其中恰好一份为 `true`。
    pub(crate) primary: bool,
}

impl<T> Entry<T> {
    pub(crate) fn new(item: T, rect: Rectangle) -> Self {
        Entry {
            item,
            rect,
            primary: true,
        }
    }

    /// 是否为计数副本（非复制品）
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

impl<T: PartialEq> Entry<T> {
    /// 按 (item, rect) 判断是否为同一条目
    pub fn matches(&self, item: &T, rect: &Rectangle) -> bool {
        self.item == *item && self.rect == *rect
    }
}

/// 四叉树节点
///
/// 叶子节点没有子节点；分裂后的内部节点恰好拥有四个子节点，
/// 外加所有同时跨越两条中心线的条目。
#[derive(Debug, Clone)]
pub struct Quadrant<T> {
    /// 存储在本层的条目
    pub(crate) entries: Vec<Entry<T>>,
    /// 四个子象限（分裂后一次性创建）
    pub(crate) children: Option<Box<[Quadrant<T>; 4]>>,
    /// 中心点 [cx, cy]
    pub(crate) center: [f64; 2],
    /// 半宽与半高
    pub(crate) half_extent: [f64; 2],
    /// 节点深度（根节点为0）
    pub(crate) depth: usize,
    /// 分裂阈值
    pub(crate) max_items: usize,
    /// 最大分裂深度
    pub(crate) max_depth: usize,
}

impl<T> Quadrant<T> {
    /// 创建新的叶子节点
    pub(crate) fn new(
        center: [f64; 2],
        half_extent: [f64; 2],
        depth: usize,
        max_items: usize,
        max_depth: usize,
    ) -> Self {
        Quadrant {
            entries: Vec::new(),
            children: None,
            center,
            half_extent,
            depth,
            max_items,
            max_depth,
        }
    }

    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    pub fn half_extent(&self) -> [f64; 2] {
        self.half_extent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// 节点覆盖的区域
    pub fn bounds(&self) -> Rectangle {
        Rectangle::from_center(self.center, self.half_extent)
    }

    /// 存储在本层的条目（含复制品）
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// 子象限，顺序为西南、西北、东南、东北
    pub fn children(&self) -> Option<&[Quadrant<T>; 4]> {
        self.children.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// 以本节点为根的子树中插入过的条目数量（复制品不计）
    pub fn len(&self) -> usize {
        let here = self.entries.iter().filter(|entry| entry.primary).count();
        here + self
            .children
            .iter()
            .flat_map(|children| children.iter())
            .map(Quadrant::len)
            .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 子树中实际占用的存储槽数量（包含复制品）
    pub fn stored_len(&self) -> usize {
        self.entries.len()
            + self
                .children
                .iter()
                .flat_map(|children| children.iter())
                .map(Quadrant::stored_len)
                .sum::<usize>()
    }

    /// 深度优先遍历以本节点为根的所有节点
    pub fn iter(&self) -> QuadrantIter<'_, T> {
        QuadrantIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quadrant_is_empty_leaf() {
        let quad: Quadrant<&str> = Quadrant::new([5.0, 5.0], [5.0, 5.0], 0, 10, 20);
        assert!(quad.is_leaf());
        assert!(quad.is_empty());
        assert_eq!(quad.stored_len(), 0);
        assert_eq!(quad.bounds(), Rectangle::new(0.0, 0.0, 10.0, 10.0));
        assert!(quad.children().is_none());
    }

    #[test]
    fn test_entry_matches_item_and_rect() {
        let entry = Entry::new("duck", Rectangle::new(50.0, 30.0, 53.0, 60.0));
        assert!(entry.is_primary());
        assert!(entry.matches(&"duck", &Rectangle::new(50.0, 30.0, 53.0, 60.0)));
        assert!(!entry.matches(&"duck", &Rectangle::new(50.0, 30.0, 53.0, 61.0)));
        assert!(!entry.matches(&"goose", &Rectangle::new(50.0, 30.0, 53.0, 60.0)));
    }

    #[test]
    fn test_len_skips_replicas() {
        let mut quad: Quadrant<u32> = Quadrant::new([0.0, 0.0], [1.0, 1.0], 0, 10, 20);
        quad.entries.push(Entry::new(1, Rectangle::from_point(0.0, 0.0)));
        let mut replica = Entry::new(1, Rectangle::from_point(0.0, 0.0));
        replica.primary = false;
        quad.entries.push(replica);

        assert_eq!(quad.len(), 1);
        assert_eq!(quad.stored_len(), 2);
    }
}
