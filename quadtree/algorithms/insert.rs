use super::super::node::{Entry, Quadrant};
use super::utils::{placement, Placement};

/// 插入操作相关算法
impl<T: PartialEq + Clone> Quadrant<T> {
    /// 插入一个条目
    ///
    /// 叶子节点直接追加，超过 `max_items` 且深度允许时分裂；
    /// 内部节点按中心线测试下推到子象限。
    pub(crate) fn insert_entry(&mut self, entry: Entry<T>) {
        if self.children.is_none() {
            self.entries.push(entry);
            if self.entries.len() > self.max_items && self.depth < self.max_depth {
                self.split();
            }
        } else {
            self.insert_into_children(entry);
        }
    }

    /// 将条目下推到匹配的子象限，跨越两条中心线的留在本层
    pub(crate) fn insert_into_children(&mut self, mut entry: Entry<T>) {
        let Some(children) = self.children.as_deref_mut() else {
            self.entries.push(entry);
            return;
        };

        match placement(&entry.rect, self.center) {
            Placement::Here => self.entries.push(entry),
            Placement::Children(mask) => {
                let mut remaining = mask.iter().filter(|hit| **hit).count();
                for (child, hit) in children.iter_mut().zip(mask) {
                    if !hit {
                        continue;
                    }
                    remaining -= 1;
                    if remaining == 0 {
                        child.insert_entry(entry);
                        break;
                    }
                    // 只有第一份保留计数标记，其余都是复制品
                    let replica = Entry {
                        item: entry.item.clone(),
                        rect: entry.rect,
                        primary: entry.primary,
                    };
                    entry.primary = false;
                    child.insert_entry(replica);
                }
            }
        }
    }
}
