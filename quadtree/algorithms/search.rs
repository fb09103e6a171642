use super::super::node::Quadrant;
use super::super::rectangle::Rectangle;
use super::utils::quadrant_mask;

/// 搜索操作相关算法
impl<T: PartialEq> Quadrant<T> {
    /// 递归收集与查询矩形相交的数据
    ///
    /// 只进入可能与查询重叠的子象限；结果按数据相等去重，
    /// 复制到多个子象限的条目只返回一次。
    pub(crate) fn intersect_into<'a>(&'a self, query: &Rectangle, results: &mut Vec<&'a T>) {
        // S1: 搜索子象限
        if let Some(children) = self.children.as_deref() {
            for (child, hit) in children.iter().zip(quadrant_mask(query, self.center)) {
                if hit {
                    child.intersect_into(query, results);
                }
            }
        }

        // S2: 搜索本层条目
        for entry in &self.entries {
            if entry.rect.intersects(query) && !results.iter().any(|found| **found == entry.item) {
                results.push(&entry.item);
            }
        }
    }
}
