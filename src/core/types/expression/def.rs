//! 表达式类型定义
//!
//! 本模块定义统一表达式类型 `Expression` 枚举。

use crate::core::types::operators::{ComparisonOperator, ConnectiveKind};
use crate::core::types::slot::SlotRef;
use crate::core::Value;
use serde::{Deserialize, Serialize};

/// 统一表达式类型
///
/// 不可变值类型，结构相等即视为同一谓词。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// 字面量值
    Literal(Value),

    /// 列引用
    Slot(SlotRef),

    /// 比较谓词
    Comparison {
        op: ComparisonOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// 逻辑连接
    Connective {
        kind: ConnectiveKind,
        operands: Vec<Expression>,
    },

    /// 逻辑非
    Not(Box<Expression>),

    /// 集合成员谓词 `expr IN (v1, v2, ...)`
    InPredicate {
        compare_expr: Box<Expression>,
        options: Vec<Value>,
    },

    /// 标量函数调用
    Function {
        name: String,
        args: Vec<Expression>,
    },

    /// 别名
    ///
    /// 将 `child` 的计算结果输出为新列 `slot`
    Alias {
        child: Box<Expression>,
        slot: SlotRef,
    },
}
