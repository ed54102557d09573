//! 表达式构造函数
//!
//! 提供创建各类表达式的工厂方法。

use crate::core::types::expression::Expression;
use crate::core::types::operators::{ComparisonOperator, ConnectiveKind};
use crate::core::types::slot::SlotRef;
use crate::core::Value;

impl Expression {
    /// 创建字面量表达式
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// 创建NULL字面量
    pub fn null() -> Self {
        Expression::Literal(Value::Null)
    }

    /// 创建布尔真值字面量
    pub fn true_literal() -> Self {
        Expression::Literal(Value::Bool(true))
    }

    /// 创建列引用表达式
    pub fn slot(slot: SlotRef) -> Self {
        Expression::Slot(slot)
    }

    /// 创建比较表达式
    pub fn comparison(op: ComparisonOperator, left: Expression, right: Expression) -> Self {
        Expression::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// 创建等于表达式
    pub fn equal_to(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::Equal, left, right)
    }

    /// 创建不等于表达式
    pub fn not_equal_to(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::NotEqual, left, right)
    }

    /// 创建小于表达式
    pub fn less_than(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::LessThan, left, right)
    }

    /// 创建小于等于表达式
    pub fn less_than_or_equal(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::LessThanOrEqual, left, right)
    }

    /// 创建大于表达式
    pub fn greater_than(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::GreaterThan, left, right)
    }

    /// 创建大于等于表达式
    pub fn greater_than_or_equal(left: Expression, right: Expression) -> Self {
        Self::comparison(ComparisonOperator::GreaterThanOrEqual, left, right)
    }

    /// 创建AND连接
    pub fn and(operands: Vec<Expression>) -> Self {
        Expression::Connective {
            kind: ConnectiveKind::And,
            operands,
        }
    }

    /// 创建OR连接
    pub fn or(operands: Vec<Expression>) -> Self {
        Expression::Connective {
            kind: ConnectiveKind::Or,
            operands,
        }
    }

    /// 创建逻辑非
    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    /// 创建集合成员表达式
    pub fn in_list(compare_expr: Expression, options: Vec<Value>) -> Self {
        Expression::InPredicate {
            compare_expr: Box::new(compare_expr),
            options,
        }
    }

    /// 创建函数调用表达式
    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function {
            name: name.into(),
            args,
        }
    }

    /// 创建别名表达式
    pub fn alias(child: Expression, slot: SlotRef) -> Self {
        Expression::Alias {
            child: Box::new(child),
            slot,
        }
    }
}
