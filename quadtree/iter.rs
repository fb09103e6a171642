use super::node::Quadrant;

/// 深度优先（先序）遍历所有四叉树节点，用于调试和检查
///
/// 使用显式栈而非递归，每次调用 `iter()` 都从根重新开始。
pub struct QuadrantIter<'a, T> {
    stack: Vec<&'a Quadrant<T>>,
}

impl<'a, T> QuadrantIter<'a, T> {
    pub(crate) fn new(root: &'a Quadrant<T>) -> Self {
        QuadrantIter { stack: vec![root] }
    }
}

impl<'a, T> Iterator for QuadrantIter<'a, T> {
    type Item = &'a Quadrant<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children.as_deref() {
            // 逆序入栈，保证按西南、西北、东南、东北的顺序弹出
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
