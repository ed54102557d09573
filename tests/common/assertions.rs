//! 自定义断言辅助模块
//!
//! 提供谓词推导测试中的常用断言函数

use std::collections::HashSet;

use predicate_pullup::core::{Expression, SlotRef};
use predicate_pullup::query::optimizer::expression_utils::slots_within;
use predicate_pullup::{PlanArena, PlanNodeId, PredicatePullUp, PredicateSet};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言集合恰好由给定谓词构成（不考虑顺序）
pub fn assert_predicates(actual: &PredicateSet, expected: &[Expression]) {
    let expected_set: PredicateSet = expected.iter().cloned().collect();
    assert_eq!(
        actual, &expected_set,
        "谓词集合不匹配: 期望 {}, 实际 {}",
        expected_set, actual
    );
}

/// 断言集合包含给定谓词
pub fn assert_contains(actual: &PredicateSet, expected: &Expression) {
    assert!(
        actual.contains(expected),
        "谓词集合 {} 应包含 {}",
        actual,
        expected
    );
}

/// 断言集合不包含给定谓词
pub fn assert_not_contains(actual: &PredicateSet, unexpected: &Expression) {
    assert!(
        !actual.contains(unexpected),
        "谓词集合 {} 不应包含 {}",
        actual,
        unexpected
    );
}

/// 断言计划中每个节点推导出的谓词只引用该节点的输出列
pub fn assert_sound(arena: &PlanArena, pass: &mut PredicatePullUp<'_>) {
    let ids: Vec<PlanNodeId> = arena.node_ids().to_vec();
    for id in ids {
        let output: HashSet<SlotRef> = assert_ok(arena.output(id)).iter().cloned().collect();
        for predicate in &pass.derive(id) {
            assert!(
                slots_within(predicate, &output),
                "节点 {} 的谓词 {} 引用了输出之外的列",
                id,
                predicate
            );
        }
    }
}
