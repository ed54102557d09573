//! 集成测试共享工具模块
//!
//! 提供计划构建夹具和断言辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod plan_fixtures;

use predicate_pullup::core::{Expression, SlotRef, Value};

/// 按名称批量创建列
pub fn slots(names: &[&str]) -> Vec<SlotRef> {
    names.iter().map(|name| SlotRef::new(*name)).collect()
}

/// 列引用表达式
pub fn col(slot: &SlotRef) -> Expression {
    Expression::slot(slot.clone())
}

pub fn eq(left: &SlotRef, right: &SlotRef) -> Expression {
    Expression::equal_to(col(left), col(right))
}

pub fn eq_lit(slot: &SlotRef, value: impl Into<Value>) -> Expression {
    Expression::equal_to(col(slot), Expression::literal(value))
}

pub fn gt(slot: &SlotRef, value: impl Into<Value>) -> Expression {
    Expression::greater_than(col(slot), Expression::literal(value))
}

pub fn lt(slot: &SlotRef, value: impl Into<Value>) -> Expression {
    Expression::less_than(col(slot), Expression::literal(value))
}

/// 常量行中的一项：`literal AS const`
pub fn const_item(value: impl Into<Value>) -> Expression {
    Expression::alias(Expression::literal(value), SlotRef::new("const"))
}
