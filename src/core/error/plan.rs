//! 计划构建错误类型
//!
//! 定义在计划树构建阶段检测到的结构性错误

use thiserror::Error;

use crate::query::planner::plan::PlanNodeId;

/// 计划构建错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// 引用了不存在的子节点
    #[error("未知的计划节点: {0}")]
    UnknownNode(PlanNodeId),

    /// 集合操作分支的输出列数与集合操作本身不一致
    #[error("集合操作分支 {branch} 的列数不匹配: 期望 {expected}, 实际 {actual}")]
    BranchArityMismatch {
        branch: usize,
        expected: usize,
        actual: usize,
    },

    /// 常量行宽度与输出列数不一致
    #[error("常量行 {row} 的列数不匹配: 期望 {expected}, 实际 {actual}")]
    ConstantRowArityMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// 输出列表中出现了非命名表达式
    #[error("输出表达式必须是列引用或别名: {0}")]
    UnnamedOutput(String),

    /// 引用了子节点未输出的列
    #[error("列 {0} 不在子节点的输出中")]
    SlotNotInChildOutput(String),

    /// 无效的计划结构
    #[error("无效的计划结构: {0}")]
    InvalidPlanStructure(String),
}

impl PlanError {
    pub fn unnamed_output(expr: impl Into<String>) -> Self {
        Self::UnnamedOutput(expr.into())
    }

    pub fn slot_not_in_child_output(slot: impl Into<String>) -> Self {
        Self::SlotNotInChildOutput(slot.into())
    }

    pub fn invalid_plan_structure(msg: impl Into<String>) -> Self {
        Self::InvalidPlanStructure(msg.into())
    }
}

/// 计划构建结果类型
pub type PlanResult<T> = Result<T, PlanError>;
