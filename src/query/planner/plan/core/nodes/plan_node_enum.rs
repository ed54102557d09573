//! PlanNode 枚举定义
//!
//! 封闭的算子种类集合，谓词推导对每种算子各有一个匹配分支

use serde::{Deserialize, Serialize};
use std::fmt;

use super::plan_node_traits::PlanNode;
use crate::core::SlotRef;
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

pub use super::aggregate_node::AggregateNode;
pub use super::filter_node::FilterNode;
pub use super::join_node::JoinNode;
pub use super::project_node::ProjectNode;
pub use super::scan_node::ScanNode;
pub use super::set_operations_node::{IntersectNode, MinusNode, UnionNode};
pub use super::sort_node::{LimitNode, SortNode};

/// 算子种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanNodeKind {
    Scan,
    Filter,
    Join,
    Project,
    Aggregate,
    Union,
    Intersect,
    Minus,
    Sort,
    Limit,
}

impl PlanNodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlanNodeKind::Scan => "Scan",
            PlanNodeKind::Filter => "Filter",
            PlanNodeKind::Join => "Join",
            PlanNodeKind::Project => "Project",
            PlanNodeKind::Aggregate => "Aggregate",
            PlanNodeKind::Union => "Union",
            PlanNodeKind::Intersect => "Intersect",
            PlanNodeKind::Minus => "Minus",
            PlanNodeKind::Sort => "Sort",
            PlanNodeKind::Limit => "Limit",
        }
    }
}

impl fmt::Display for PlanNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// PlanNode 枚举，包含所有可能的节点类型
///
/// 这个枚举避免了动态分发的性能开销
#[derive(Debug, Clone)]
pub enum PlanNodeEnum {
    /// 扫描节点
    Scan(ScanNode),
    /// 过滤节点
    Filter(FilterNode),
    /// 连接节点
    Join(JoinNode),
    /// 投影节点
    Project(ProjectNode),
    /// 聚合节点
    Aggregate(AggregateNode),
    /// 并集节点
    Union(UnionNode),
    /// 交集节点
    Intersect(IntersectNode),
    /// 差集节点
    Minus(MinusNode),
    /// 排序节点
    Sort(SortNode),
    /// 限制节点
    Limit(LimitNode),
}

impl PlanNodeEnum {
    /// 获取算子种类
    pub fn kind(&self) -> PlanNodeKind {
        match self {
            PlanNodeEnum::Scan(_) => PlanNodeKind::Scan,
            PlanNodeEnum::Filter(_) => PlanNodeKind::Filter,
            PlanNodeEnum::Join(_) => PlanNodeKind::Join,
            PlanNodeEnum::Project(_) => PlanNodeKind::Project,
            PlanNodeEnum::Aggregate(_) => PlanNodeKind::Aggregate,
            PlanNodeEnum::Union(_) => PlanNodeKind::Union,
            PlanNodeEnum::Intersect(_) => PlanNodeKind::Intersect,
            PlanNodeEnum::Minus(_) => PlanNodeKind::Minus,
            PlanNodeEnum::Sort(_) => PlanNodeKind::Sort,
            PlanNodeEnum::Limit(_) => PlanNodeKind::Limit,
        }
    }

    fn as_plan_node(&self) -> &dyn PlanNode {
        match self {
            PlanNodeEnum::Scan(node) => node,
            PlanNodeEnum::Filter(node) => node,
            PlanNodeEnum::Join(node) => node,
            PlanNodeEnum::Project(node) => node,
            PlanNodeEnum::Aggregate(node) => node,
            PlanNodeEnum::Union(node) => node,
            PlanNodeEnum::Intersect(node) => node,
            PlanNodeEnum::Minus(node) => node,
            PlanNodeEnum::Sort(node) => node,
            PlanNodeEnum::Limit(node) => node,
        }
    }

    pub fn id(&self) -> PlanNodeId {
        self.as_plan_node().id()
    }

    pub fn name(&self) -> &'static str {
        self.as_plan_node().name()
    }

    pub fn output(&self) -> &[SlotRef] {
        self.as_plan_node().output()
    }

    pub fn children(&self) -> Vec<PlanNodeId> {
        self.as_plan_node().children()
    }

    pub fn arity(&self) -> usize {
        self.as_plan_node().arity()
    }

    pub fn output_set(&self) -> std::collections::HashSet<SlotRef> {
        self.as_plan_node().output_set()
    }
}
