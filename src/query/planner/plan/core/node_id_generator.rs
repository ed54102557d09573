//! 节点ID生成器
//!
//! 提供全局唯一的计划节点ID分配机制。节点身份在构建时分配一次，
//! 进程内永不复用，谓词推导的缓存以此为键。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// 计划节点ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanNodeId(pub i64);

impl fmt::Display for PlanNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 节点ID生成器
///
/// 使用单例模式提供全局唯一的节点ID分配
pub struct NodeIdGenerator {
    counter: AtomicI64,
}

impl NodeIdGenerator {
    /// 获取全局单例实例
    pub fn instance() -> &'static Self {
        static INSTANCE: NodeIdGenerator = NodeIdGenerator {
            counter: AtomicI64::new(1), // 从1开始，0保留为无效ID
        };
        &INSTANCE
    }

    /// 获取下一个唯一ID
    pub fn next_id(&self) -> PlanNodeId {
        PlanNodeId(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

/// 为节点分配新ID的便捷函数
pub fn next_node_id() -> PlanNodeId {
    NodeIdGenerator::instance().next_id()
}
