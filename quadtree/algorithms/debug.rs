use std::fmt::{Debug, Write};

use super::super::node::Quadrant;

/// 四叉树调试功能实现
impl<T: Debug> Quadrant<T> {
    /// 生成完整的树结构文本，用于调试
    ///
    /// 递归遍历整个子树，输出每个节点的深度、中心、范围和条目，
    /// 复制品用 `~` 标记。
    pub fn structure_string(&self) -> String {
        let mut out = String::new();
        self.write_structure(&mut out, String::new());
        out
    }

    fn write_structure(&self, out: &mut String, path: String) {
        let indent = "  ".repeat(self.depth);
        let kind = if self.is_leaf() { "Leaf" } else { "Internal" };
        // 写入 String 不会失败
        let _ = writeln!(
            out,
            "{}{}{} (depth={}, center=[{:.2},{:.2}], half=[{:.2},{:.2}], {} entries)",
            indent,
            kind,
            path,
            self.depth,
            self.center[0],
            self.center[1],
            self.half_extent[0],
            self.half_extent[1],
            self.entries.len()
        );

        for entry in &self.entries {
            let marker = if entry.primary { ' ' } else { '~' };
            let _ = writeln!(out, "{}  {}{:?} at {}", indent, marker, entry.item, entry.rect);
        }

        if let Some(children) = self.children.as_deref() {
            for (i, child) in children.iter().enumerate() {
                child.write_structure(out, format!("{}[{}]", path, i));
            }
        }
    }
}
