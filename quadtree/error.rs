use super::rectangle::Rectangle;

/// 空间索引错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    /// 构造参数不足或相互矛盾
    #[error("Invalid index geometry: {0}")]
    InvalidGeometry(String),
    /// 在包含测试预测的位置找不到 (item, rect) 条目
    #[error("Entry not found for rectangle {rect}")]
    EntryNotFound { rect: Rectangle },
}
