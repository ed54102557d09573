//! 表达式工具函数
//!
//! 跨越重命名边界（投影别名、UNION 分支对齐）改写谓词，
//! 以及合取式的构造与拆分。

use std::collections::{HashMap, HashSet};

use crate::core::types::expression::Expression;
use crate::core::types::operators::ConnectiveKind;
use crate::core::SlotRef;

/// 用映射表自顶向下替换子表达式，不深入已替换的子树
pub fn replace(expr: &Expression, replace_map: &HashMap<Expression, Expression>) -> Expression {
    if replace_map.is_empty() {
        return expr.clone();
    }
    expr.rewrite_down_short_circuit(&mut |node: &Expression| replace_map.get(node).cloned())
}

/// 对一组表达式逐个调用 [`replace`]
pub fn replace_all<'a>(
    exprs: impl IntoIterator<Item = &'a Expression>,
    replace_map: &HashMap<Expression, Expression>,
) -> Vec<Expression> {
    exprs
        .into_iter()
        .map(|expr| replace(expr, replace_map))
        .collect()
}

/// 按位置把 `from` 中的列映射到 `to` 中的列
pub fn slot_replace_map(from: &[SlotRef], to: &[SlotRef]) -> HashMap<Expression, Expression> {
    from.iter()
        .zip(to)
        .filter(|(source, target)| source != target)
        .map(|(source, target)| {
            (
                Expression::slot(source.clone()),
                Expression::slot(target.clone()),
            )
        })
        .collect()
}

/// 构造合取式
///
/// 空列表得到 `TRUE`，单个元素原样返回，否则得到扁平的 AND。
pub fn conjunction(exprs: Vec<Expression>) -> Expression {
    let mut operands = Vec::with_capacity(exprs.len());
    for expr in exprs {
        match expr {
            Expression::Connective {
                kind: ConnectiveKind::And,
                operands: nested,
            } => operands.extend(nested),
            other => operands.push(other),
        }
    }

    match operands.len() {
        0 => Expression::true_literal(),
        1 => operands.pop().unwrap_or_else(Expression::true_literal),
        _ => Expression::and(operands),
    }
}

/// 把合取式拆成合取项，展开嵌套的 AND 并去掉 `TRUE`
pub fn extract_conjuncts(expr: &Expression) -> Vec<Expression> {
    let mut conjuncts = Vec::new();
    let mut stack = vec![expr];
    while let Some(current) = stack.pop() {
        match current {
            Expression::Connective {
                kind: ConnectiveKind::And,
                operands,
            } => stack.extend(operands.iter().rev()),
            other if other.is_true_literal() => {}
            other => conjuncts.push(other.clone()),
        }
    }
    conjuncts
}

/// 表达式引用的列是否都在给定集合中
pub fn slots_within(expr: &Expression, slots: &HashSet<SlotRef>) -> bool {
    expr.input_slots().iter().all(|slot| slots.contains(slot))
}
