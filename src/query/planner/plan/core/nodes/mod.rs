//! 计划节点定义

#[macro_use]
pub mod macros;

pub mod aggregate_node;
pub mod filter_node;
pub mod join_node;
pub mod plan_node_enum;
pub mod plan_node_traits;
pub mod project_node;
pub mod scan_node;
pub mod set_operations_node;
pub mod sort_node;

pub use aggregate_node::AggregateNode;
pub use filter_node::FilterNode;
pub use join_node::{JoinNode, JoinType};
pub use plan_node_enum::{PlanNodeEnum, PlanNodeKind};
pub use plan_node_traits::PlanNode;
pub use project_node::ProjectNode;
pub use scan_node::ScanNode;
pub use set_operations_node::{IntersectNode, MinusNode, SetQualifier, UnionNode};
pub use sort_node::{LimitNode, OrderKey, SortNode};
