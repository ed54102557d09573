pub mod arena;
pub mod explain;
pub mod node_id_generator;
pub mod nodes;

pub use arena::PlanArena;
pub use explain::{Pair, PlanDescription, PlanNodeDescription};
pub use node_id_generator::{next_node_id, NodeIdGenerator, PlanNodeId};
pub use nodes::plan_node_enum::{PlanNodeEnum, PlanNodeKind};
pub use nodes::plan_node_traits::PlanNode;
pub use nodes::{
    AggregateNode, FilterNode, IntersectNode, JoinNode, JoinType, LimitNode, MinusNode, OrderKey,
    ProjectNode, ScanNode, SetQualifier, SortNode, UnionNode,
};
