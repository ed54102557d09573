//! 聚合节点实现
//!
//! AggregateNode 按分组键聚合输入，输出列由输出表达式列表决定

use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

define_plan_node! {
    pub struct AggregateNode {
        group_by: Vec<Expression>,
        outputs: Vec<Expression>,
    }
    enum: Aggregate
    input: SingleInput
}

impl AggregateNode {
    pub(crate) fn new(
        id: PlanNodeId,
        input: PlanNodeId,
        group_by: Vec<Expression>,
        outputs: Vec<Expression>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            input,
            group_by,
            outputs,
            output,
        }
    }

    /// 分组键
    pub fn group_by(&self) -> &[Expression] {
        &self.group_by
    }

    /// 输出表达式（列引用或聚合函数别名）
    pub fn outputs(&self) -> &[Expression] {
        &self.outputs
    }
}
