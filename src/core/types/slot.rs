//! 列标识（Slot）定义
//!
//! Slot 唯一标识某个计划节点输出的一列。相等性与哈希仅基于 ID，
//! 两个不同的列可以拥有相同的显示名称。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Slot ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u64);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot ID生成器
///
/// 进程内全局单调递增，ID 永不复用
pub struct SlotIdGenerator {
    counter: AtomicU64,
}

impl SlotIdGenerator {
    /// 获取全局单例实例
    pub fn instance() -> &'static Self {
        static INSTANCE: SlotIdGenerator = SlotIdGenerator {
            counter: AtomicU64::new(1),
        };
        &INSTANCE
    }

    /// 获取下一个唯一ID
    pub fn next_id(&self) -> SlotId {
        SlotId(self.counter.fetch_add(1, AtomicOrdering::SeqCst))
    }
}

/// 列引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRef {
    id: SlotId,
    name: String,
}

impl SlotRef {
    /// 分配一个新的列，ID 全局唯一
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SlotIdGenerator::instance().next_id(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for SlotRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SlotRef {}

impl Hash for SlotRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for SlotRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}
