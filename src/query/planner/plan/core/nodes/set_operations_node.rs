//! 集合操作节点实现
//!
//! 提供 UNION / INTERSECT / MINUS 计划节点定义。
//!
//! 每个分支的“常规输出”（regular child output）按位置与集合操作的
//! 输出列一一对应。UNION 还可以携带常量行（`VALUES` 形式），
//! 没有子节点、仅由常量行构成的 UNION 称为常量 UNION。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

/// 集合操作限定词
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetQualifier {
    All,
    Distinct,
}

impl fmt::Display for SetQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetQualifier::All => f.write_str("ALL"),
            SetQualifier::Distinct => f.write_str("DISTINCT"),
        }
    }
}

define_plan_node! {
    pub struct UnionNode {
        qualifier: SetQualifier,
        regular_children_output: Vec<Vec<SlotRef>>,
        constant_exprs_list: Vec<Vec<Expression>>,
    }
    enum: Union
    input: MultipleInputs
}

impl UnionNode {
    pub(crate) fn new(
        id: PlanNodeId,
        qualifier: SetQualifier,
        inputs: Vec<PlanNodeId>,
        regular_children_output: Vec<Vec<SlotRef>>,
        constant_exprs_list: Vec<Vec<Expression>>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            inputs,
            qualifier,
            regular_children_output,
            constant_exprs_list,
            output,
        }
    }

    pub fn qualifier(&self) -> SetQualifier {
        self.qualifier
    }

    /// 第 `index` 个分支中与输出列按位置对应的列
    pub fn regular_child_output(&self, index: usize) -> &[SlotRef] {
        self.regular_children_output
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 常量行列表，每行的每一项都是命名表达式
    pub fn constant_exprs_list(&self) -> &[Vec<Expression>] {
        &self.constant_exprs_list
    }

    /// 是否为仅由常量行构成的 UNION
    pub fn is_constant_union(&self) -> bool {
        self.inputs.is_empty() && !self.constant_exprs_list.is_empty()
    }
}

define_plan_node! {
    pub struct IntersectNode {
        qualifier: SetQualifier,
        regular_children_output: Vec<Vec<SlotRef>>,
    }
    enum: Intersect
    input: MultipleInputs
}

impl IntersectNode {
    pub(crate) fn new(
        id: PlanNodeId,
        qualifier: SetQualifier,
        inputs: Vec<PlanNodeId>,
        regular_children_output: Vec<Vec<SlotRef>>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            inputs,
            qualifier,
            regular_children_output,
            output,
        }
    }

    pub fn qualifier(&self) -> SetQualifier {
        self.qualifier
    }

    pub fn regular_child_output(&self, index: usize) -> &[SlotRef] {
        self.regular_children_output
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

define_plan_node! {
    pub struct MinusNode {
        qualifier: SetQualifier,
        regular_children_output: Vec<Vec<SlotRef>>,
    }
    enum: Minus
    input: MultipleInputs
}

impl MinusNode {
    pub(crate) fn new(
        id: PlanNodeId,
        qualifier: SetQualifier,
        inputs: Vec<PlanNodeId>,
        regular_children_output: Vec<Vec<SlotRef>>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            inputs,
            qualifier,
            regular_children_output,
            output,
        }
    }

    pub fn qualifier(&self) -> SetQualifier {
        self.qualifier
    }

    pub fn regular_child_output(&self, index: usize) -> &[SlotRef] {
        self.regular_children_output
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
