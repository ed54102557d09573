//! 表达式检查方法
//!
//! 提供检查表达式属性和状态的方法。

use std::collections::BTreeSet;

use crate::core::types::expression::Expression;
use crate::core::types::operators::ComparisonOperator;
use crate::core::types::slot::SlotRef;
use crate::core::Value;

impl Expression {
    /// 获取表达式引用的所有输入列
    ///
    /// 别名的输出列不算作输入，只收集其子表达式引用的列。
    /// 返回按 Slot ID 排序的集合，保证遍历顺序确定。
    pub fn input_slots(&self) -> BTreeSet<SlotRef> {
        let mut slots = BTreeSet::new();
        self.collect_input_slots(&mut slots);
        slots
    }

    fn collect_input_slots(&self, slots: &mut BTreeSet<SlotRef>) {
        match self {
            Expression::Slot(slot) => {
                slots.insert(slot.clone());
            }
            _ => {
                for child in self.children() {
                    child.collect_input_slots(slots);
                }
            }
        }
    }

    /// 获取字面量值（如果是字面量）
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expression::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// 检查是否为NULL字面量
    pub fn is_null_literal(&self) -> bool {
        matches!(self, Expression::Literal(Value::Null))
    }

    /// 检查是否为TRUE字面量
    pub fn is_true_literal(&self) -> bool {
        self.as_literal().is_some_and(Value::is_true)
    }

    /// 检查是否为列引用
    pub fn is_slot(&self) -> bool {
        matches!(self, Expression::Slot(_))
    }

    /// 检查是否为命名表达式（列引用或别名）
    pub fn is_named(&self) -> bool {
        matches!(self, Expression::Slot(_) | Expression::Alias { .. })
    }

    /// 命名表达式对应的输出列
    pub fn to_slot(&self) -> Option<&SlotRef> {
        match self {
            Expression::Slot(slot) => Some(slot),
            Expression::Alias { slot, .. } => Some(slot),
            _ => None,
        }
    }

    /// 若为 `slot = slot` 形式的等值谓词，返回两侧的列
    pub fn as_slot_equality(&self) -> Option<(&SlotRef, &SlotRef)> {
        match self {
            Expression::Comparison {
                op: ComparisonOperator::Equal,
                left,
                right,
            } => match (left.as_ref(), right.as_ref()) {
                (Expression::Slot(l), Expression::Slot(r)) => Some((l, r)),
                _ => None,
            },
            _ => None,
        }
    }

    /// 若为 `Alias(Literal)` 形式，返回字面量
    pub fn alias_literal(&self) -> Option<&Value> {
        match self {
            Expression::Alias { child, .. } => child.as_literal(),
            _ => None,
        }
    }
}
