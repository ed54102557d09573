//! 连接节点实现
//!
//! JoinNode 覆盖所有连接类型，输出列由连接类型决定：
//! 半连接与反连接只输出一侧的列，其余类型输出两侧列的拼接。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

/// 连接类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Cross,
    LeftOuter,
    RightOuter,
    FullOuter,
    LeftSemi,
    LeftAnti,
    RightSemi,
    RightAnti,
}

impl JoinType {
    pub fn name(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Cross => "CROSS JOIN",
            JoinType::LeftOuter => "LEFT OUTER JOIN",
            JoinType::RightOuter => "RIGHT OUTER JOIN",
            JoinType::FullOuter => "FULL OUTER JOIN",
            JoinType::LeftSemi => "LEFT SEMI JOIN",
            JoinType::LeftAnti => "LEFT ANTI JOIN",
            JoinType::RightSemi => "RIGHT SEMI JOIN",
            JoinType::RightAnti => "RIGHT ANTI JOIN",
        }
    }

    /// 是否输出左侧的列
    pub fn outputs_left(&self) -> bool {
        !matches!(self, JoinType::RightSemi | JoinType::RightAnti)
    }

    /// 是否输出右侧的列
    pub fn outputs_right(&self) -> bool {
        !matches!(self, JoinType::LeftSemi | JoinType::LeftAnti)
    }

    /// 根据两侧输出计算连接的输出列
    pub fn output(&self, left: &[SlotRef], right: &[SlotRef]) -> Vec<SlotRef> {
        let mut output = Vec::with_capacity(left.len() + right.len());
        if self.outputs_left() {
            output.extend_from_slice(left);
        }
        if self.outputs_right() {
            output.extend_from_slice(right);
        }
        output
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

define_plan_node! {
    pub struct JoinNode {
        join_type: JoinType,
        hash_conjuncts: Vec<Expression>,
        other_conjuncts: Vec<Expression>,
    }
    enum: Join
    input: BinaryInput
}

impl JoinNode {
    pub(crate) fn new(
        id: PlanNodeId,
        join_type: JoinType,
        left: PlanNodeId,
        right: PlanNodeId,
        hash_conjuncts: Vec<Expression>,
        other_conjuncts: Vec<Expression>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            left,
            right,
            join_type,
            hash_conjuncts,
            other_conjuncts,
            output,
        }
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    /// 等值连接条件
    pub fn hash_conjuncts(&self) -> &[Expression] {
        &self.hash_conjuncts
    }

    /// 其他连接条件
    pub fn other_conjuncts(&self) -> &[Expression] {
        &self.other_conjuncts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_output_by_type() {
        let a = SlotRef::new("a");
        let b = SlotRef::new("b");
        let left = vec![a.clone()];
        let right = vec![b.clone()];

        assert_eq!(JoinType::Inner.output(&left, &right), vec![a.clone(), b.clone()]);
        assert_eq!(JoinType::LeftSemi.output(&left, &right), vec![a.clone()]);
        assert_eq!(JoinType::RightAnti.output(&left, &right), vec![b.clone()]);
        assert_eq!(JoinType::FullOuter.output(&left, &right), vec![a, b]);
    }
}
