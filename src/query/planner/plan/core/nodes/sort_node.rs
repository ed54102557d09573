//! 排序与限制节点实现
//!
//! SortNode 与 LimitNode 不改变输出列，谓词推导沿用默认规则

use serde::{Deserialize, Serialize};

use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;

/// 排序键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderKey {
    pub expr: Expression,
    pub asc: bool,
    pub nulls_first: bool,
}

impl OrderKey {
    pub fn new(expr: Expression, asc: bool, nulls_first: bool) -> Self {
        Self {
            expr,
            asc,
            nulls_first,
        }
    }
}

define_plan_node! {
    pub struct SortNode {
        order_keys: Vec<OrderKey>,
    }
    enum: Sort
    input: SingleInput
}

impl SortNode {
    pub(crate) fn new(
        id: PlanNodeId,
        input: PlanNodeId,
        order_keys: Vec<OrderKey>,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            input,
            order_keys,
            output,
        }
    }

    pub fn order_keys(&self) -> &[OrderKey] {
        &self.order_keys
    }
}

define_plan_node! {
    pub struct LimitNode {
        limit: i64,
        offset: i64,
    }
    enum: Limit
    input: SingleInput
}

impl LimitNode {
    pub(crate) fn new(
        id: PlanNodeId,
        input: PlanNodeId,
        limit: i64,
        offset: i64,
        output: Vec<SlotRef>,
    ) -> Self {
        Self {
            id,
            input,
            limit,
            offset,
            output,
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}
