//! 计划树：节点定义、节点存储与计划解释

pub mod core;

pub use self::core::{
    next_node_id, NodeIdGenerator, Pair, PlanArena, PlanDescription, PlanNode, PlanNodeDescription,
    PlanNodeEnum, PlanNodeId, PlanNodeKind,
};
pub use self::core::nodes::*;
