use super::super::error::IndexError;
use super::super::node::Quadrant;
use super::super::rectangle::Rectangle;
use super::utils::{placement, Placement};

/// 四叉树删除算法实现
impl<T: PartialEq> Quadrant<T> {
    /// 删除 (item, rect) 完全匹配的条目
    ///
    /// 沿插入时相同的中心线测试下降，只在插入会放置它的位置查找，
    /// 不扫描整棵树。复制到多个子象限的条目在每个副本位置都会被删除。
    /// 节点删除后不会合并。
    pub(crate) fn remove_entry(&mut self, item: &T, rect: &Rectangle) -> Result<(), IndexError> {
        let target = match self.children {
            Some(_) => placement(rect, self.center),
            None => Placement::Here,
        };

        if let (Placement::Children(mask), Some(children)) = (target, self.children.as_deref_mut()) {
            for (child, hit) in children.iter_mut().zip(mask) {
                if hit {
                    child.remove_entry(item, rect)?;
                }
            }
            return Ok(());
        }
        self.remove_here(item, rect)
    }

    /// 从本层条目列表中删除第一个完全匹配的条目
    fn remove_here(&mut self, item: &T, rect: &Rectangle) -> Result<(), IndexError> {
        match self.entries.iter().position(|entry| entry.matches(item, rect)) {
            Some(position) => {
                self.entries.remove(position);
                Ok(())
            }
            None => {
                tracing::debug!(depth = self.depth, rect = %rect, "entry not found for removal");
                Err(IndexError::EntryNotFound { rect: *rect })
            }
        }
    }
}
