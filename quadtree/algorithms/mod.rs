// 四叉树算法模块
//
// 按功能分解为不同的子模块：
// - insert: 插入算法
// - split: 节点分裂算法
// - delete: 删除算法
// - search: 相交查询算法
// - utils: 中心线包含测试
// - debug: 调试和可视化工具

pub mod debug;
pub mod delete;
pub mod insert;
pub mod search;
pub mod split;
pub mod utils;
