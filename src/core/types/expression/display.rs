//! 表达式字符串表示
//!
//! 提供类似 SQL 的表达式字符串形式，用于日志与计划说明。

use crate::core::types::expression::Expression;
use std::fmt;

impl Expression {
    /// 将表达式转换为字符串表示
    pub fn to_expression_string(&self) -> String {
        match self {
            Expression::Literal(v) => v.to_string(),
            Expression::Slot(slot) => slot.to_string(),
            Expression::Comparison { op, left, right } => format!(
                "({} {} {})",
                left.to_expression_string(),
                op.name(),
                right.to_expression_string()
            ),
            Expression::Connective { kind, operands } => {
                let joined = operands
                    .iter()
                    .map(|e| e.to_expression_string())
                    .collect::<Vec<_>>()
                    .join(&format!(" {} ", kind.name()));
                format!("({})", joined)
            }
            Expression::Not(operand) => format!("NOT {}", operand.to_expression_string()),
            Expression::InPredicate {
                compare_expr,
                options,
            } => {
                let options_str = options
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} IN ({})", compare_expr.to_expression_string(), options_str)
            }
            Expression::Function { name, args } => {
                let args_str = args
                    .iter()
                    .map(|e| e.to_expression_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", name, args_str)
            }
            Expression::Alias { child, slot } => {
                format!("{} AS {}", child.to_expression_string(), slot)
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expression_string())
    }
}
