use super::super::node::Quadrant;

/// 节点分裂算法
impl<T: PartialEq + Clone> Quadrant<T> {
    /// 将叶子节点一次性分裂为四个等大的子象限，并重新分配本层条目
    ///
    /// 分裂后本层只保留仍然跨越新中心线的条目。
    pub(crate) fn split(&mut self) {
        let [cx, cy] = self.center;
        let half = [self.half_extent[0] / 2.0, self.half_extent[1] / 2.0];
        let (depth, max_items, max_depth) = (self.depth + 1, self.max_items, self.max_depth);
        let child = |x: f64, y: f64| Quadrant::new([x, y], half, depth, max_items, max_depth);

        self.children = Some(Box::new([
            child(cx - half[0], cy - half[1]),
            child(cx - half[0], cy + half[1]),
            child(cx + half[0], cy - half[1]),
            child(cx + half[0], cy + half[1]),
        ]));

        let entries = std::mem::take(&mut self.entries);
        tracing::debug!(
            depth = self.depth,
            center = ?self.center,
            entries = entries.len(),
            "splitting quadrant"
        );
        for entry in entries {
            self.insert_into_children(entry);
        }
    }
}
