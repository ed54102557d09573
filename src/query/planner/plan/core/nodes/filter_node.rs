//! 过滤节点实现
//!
//! FilterNode 用于根据一组合取条件过滤输入数据流，输出列与输入相同

use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

define_plan_node! {
    pub struct FilterNode {
        conjuncts: Vec<Expression>,
    }
    enum: Filter
    input: SingleInput
}

impl FilterNode {
    pub(crate) fn new(
        id: PlanNodeId,
        input: PlanNodeId,
        conjuncts: Vec<Expression>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            input,
            conjuncts,
            output,
        }
    }

    /// 获取过滤条件的合取项
    pub fn conjuncts(&self) -> &[Expression] {
        &self.conjuncts
    }
}
