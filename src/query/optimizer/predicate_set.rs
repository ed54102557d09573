//! 谓词集合
//!
//! `PredicateSet` 是推导结果的不可变快照：按结构去重，按插入顺序迭代，
//! 克隆只复制一个 `Arc`。比较两个集合时不考虑顺序。
//! 组合阶段使用可变的 `PredicateSetBuilder`，完成后冻结。

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::core::Expression;

#[derive(Debug, Default)]
struct PredicateSetInner {
    items: Vec<Expression>,
    index: HashSet<Expression>,
}

/// 不可变谓词集合
#[derive(Debug, Clone, Default)]
pub struct PredicateSet {
    inner: Arc<PredicateSetInner>,
}

impl PredicateSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> PredicateSetBuilder {
        PredicateSetBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }

    pub fn contains(&self, expr: &Expression) -> bool {
        self.inner.index.contains(expr)
    }

    /// 按插入顺序迭代
    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.inner.items.iter()
    }

    pub fn as_slice(&self) -> &[Expression] {
        &self.inner.items
    }

    pub fn to_vec(&self) -> Vec<Expression> {
        self.inner.items.clone()
    }

    /// 交集，保留 `self` 的顺序
    pub fn intersect(&self, other: &PredicateSet) -> PredicateSet {
        self.iter()
            .filter(|expr| other.contains(expr))
            .cloned()
            .collect()
    }

    /// 并集，`self` 的元素在前
    pub fn union(&self, other: &PredicateSet) -> PredicateSet {
        let mut builder = PredicateSetBuilder::from_set(self);
        builder.extend(other.iter().cloned());
        builder.build()
    }

    /// 两个快照是否共享同一份存储
    pub fn ptr_eq(&self, other: &PredicateSet) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for PredicateSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|expr| other.contains(expr))
    }
}

impl Eq for PredicateSet {}

impl FromIterator<Expression> for PredicateSet {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        let mut builder = PredicateSetBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

impl<'a> IntoIterator for &'a PredicateSet {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PredicateSet {
    /// 按渲染结果排序输出，便于比较
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self.iter().map(|expr| expr.to_string()).collect();
        rendered.sort();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

/// 谓词集合构建器
#[derive(Debug, Default)]
pub struct PredicateSetBuilder {
    items: Vec<Expression>,
    index: HashSet<Expression>,
}

impl PredicateSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_set(set: &PredicateSet) -> Self {
        Self {
            items: set.inner.items.clone(),
            index: set.inner.index.clone(),
        }
    }

    /// 插入谓词，已存在时返回 false
    pub fn insert(&mut self, expr: Expression) -> bool {
        if self.index.contains(&expr) {
            return false;
        }
        self.index.insert(expr.clone());
        self.items.push(expr);
        true
    }

    pub fn extend(&mut self, exprs: impl IntoIterator<Item = Expression>) {
        for expr in exprs {
            self.insert(expr);
        }
    }

    pub fn extend_from_set(&mut self, set: &PredicateSet) {
        self.extend(set.iter().cloned());
    }

    pub fn contains(&self, expr: &Expression) -> bool {
        self.index.contains(expr)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn build(self) -> PredicateSet {
        PredicateSet {
            inner: Arc::new(PredicateSetInner {
                items: self.items,
                index: self.index,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SlotRef;

    fn gt(slot: &SlotRef, value: i64) -> Expression {
        Expression::greater_than(Expression::slot(slot.clone()), Expression::literal(value))
    }

    #[test]
    fn test_structural_dedup_keeps_first_position() {
        let a = SlotRef::new("a");
        let mut builder = PredicateSetBuilder::new();
        assert!(builder.insert(gt(&a, 1)));
        assert!(builder.insert(gt(&a, 2)));
        assert!(!builder.insert(gt(&a, 1)));

        let set = builder.build();
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[gt(&a, 1), gt(&a, 2)]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = SlotRef::new("a");
        let left: PredicateSet = vec![gt(&a, 1), gt(&a, 2)].into_iter().collect();
        let right: PredicateSet = vec![gt(&a, 2), gt(&a, 1)].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, PredicateSet::empty());
    }

    #[test]
    fn test_intersect_and_union() {
        let a = SlotRef::new("a");
        let left: PredicateSet = vec![gt(&a, 1), gt(&a, 2)].into_iter().collect();
        let right: PredicateSet = vec![gt(&a, 3), gt(&a, 2)].into_iter().collect();

        assert_eq!(left.intersect(&right).as_slice(), &[gt(&a, 2)]);
        assert_eq!(
            left.union(&right).as_slice(),
            &[gt(&a, 1), gt(&a, 2), gt(&a, 3)]
        );
    }

    #[test]
    fn test_clone_shares_storage() {
        let a = SlotRef::new("a");
        let set: PredicateSet = std::iter::once(gt(&a, 1)).collect();
        let copy = set.clone();
        assert!(set.ptr_eq(&copy));
    }

    #[test]
    fn test_display_is_sorted() {
        let a = SlotRef::new("a");
        let set: PredicateSet = vec![gt(&a, 2), gt(&a, 1)].into_iter().collect();
        let rendered = set.to_string();
        let first = rendered.find("> 1").expect("应包含 > 1");
        let second = rendered.find("> 2").expect("应包含 > 2");
        assert!(first < second);
        assert_eq!(PredicateSet::empty().to_string(), "{}");
    }
}
