//! 投影节点实现
//!
//! ProjectNode 的每个输出都是命名表达式：直接透传的列引用，或产出新列的别名

use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

define_plan_node! {
    pub struct ProjectNode {
        projects: Vec<Expression>,
    }
    enum: Project
    input: SingleInput
}

impl ProjectNode {
    pub(crate) fn new(
        id: PlanNodeId,
        input: PlanNodeId,
        projects: Vec<Expression>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            input,
            projects,
            output,
        }
    }

    /// 获取投影列表
    pub fn projects(&self) -> &[Expression] {
        &self.projects
    }

    /// 别名输出列到其生产表达式的映射，按投影顺序排列
    pub fn alias_to_producer(&self) -> Vec<(&SlotRef, &Expression)> {
        self.projects
            .iter()
            .filter_map(|project| match project {
                Expression::Alias { child, slot } => Some((slot, child.as_ref())),
                _ => None,
            })
            .collect()
    }
}
