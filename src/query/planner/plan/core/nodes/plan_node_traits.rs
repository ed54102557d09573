//! PlanNode 统一特征定义
//!
//! 定义所有计划节点需要实现的基础特征

use std::collections::HashSet;

use crate::core::SlotRef;
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

/// PlanNode 基础特征
pub trait PlanNode {
    /// 获取节点的唯一ID
    fn id(&self) -> PlanNodeId;

    /// 获取节点类型的名称
    fn name(&self) -> &'static str;

    /// 获取节点的输出列（有序）
    fn output(&self) -> &[SlotRef];

    /// 获取子节点ID列表（有序）
    fn children(&self) -> Vec<PlanNodeId>;

    /// 子节点数量
    fn arity(&self) -> usize {
        self.children().len()
    }

    /// 输出列集合
    fn output_set(&self) -> HashSet<SlotRef> {
        self.output().iter().cloned().collect()
    }
}
