//! 谓词传递推理
//!
//! 从 `slot = slot` 等值谓词构造列等价类，再据此补全谓词：
//! 1. 每个等价类内两两之间的等值（ID 小的列在左）；
//! 2. 只引用一个列的谓词，复制到同一等价类的其余每个成员上。
//!
//! 引用多个列的谓词原样保留，不做展开。推理结果总是输入的超集，
//! 且再次推理不会产生新谓词。

use std::collections::{BTreeMap, HashMap};

use log::trace;

use crate::config::PullUpConfig;
use crate::core::{Expression, SlotRef};
use crate::query::optimizer::predicate_set::{PredicateSet, PredicateSetBuilder};

/// 列等价类（并查集）
///
/// 根总是类内 ID 最小的列，因此类的成员顺序与代表元都是确定的。
#[derive(Debug, Default)]
struct EquivalenceClasses {
    parent: HashMap<SlotRef, SlotRef>,
}

impl EquivalenceClasses {
    fn find(&mut self, slot: &SlotRef) -> SlotRef {
        let mut root = slot.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // 路径压缩
        let mut current = slot.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(next) => current = next,
                None => break,
            }
        }
        root
    }

    fn union(&mut self, left: &SlotRef, right: &SlotRef) {
        for slot in [left, right] {
            self.parent
                .entry(slot.clone())
                .or_insert_with(|| slot.clone());
        }
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return;
        }
        if left_root < right_root {
            self.parent.insert(right_root, left_root);
        } else {
            self.parent.insert(left_root, right_root);
        }
    }

    /// 按代表元排序的等价类，类内成员按 ID 升序
    fn into_classes(mut self) -> Vec<Vec<SlotRef>> {
        let slots: Vec<SlotRef> = self.parent.keys().cloned().collect();
        let mut classes: BTreeMap<SlotRef, Vec<SlotRef>> = BTreeMap::new();
        for slot in slots {
            let root = self.find(&slot);
            classes.entry(root).or_default().push(slot);
        }
        classes
            .into_values()
            .map(|mut members| {
                members.sort();
                members
            })
            .collect()
    }
}

/// 谓词传递推理器
#[derive(Debug, Clone)]
pub struct PredicatePropagation {
    enable_inference: bool,
    max_equivalence_class_size: usize,
}

impl Default for PredicatePropagation {
    fn default() -> Self {
        Self::new(&PullUpConfig::default())
    }
}

impl PredicatePropagation {
    pub fn new(config: &PullUpConfig) -> Self {
        Self {
            enable_inference: config.enable_inference,
            max_equivalence_class_size: config.max_equivalence_class_size,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enable_inference
    }

    /// 推理出输入谓词蕴含的谓词
    ///
    /// 结果包含全部输入谓词（在前），其后是推理出的新谓词。
    pub fn infer(&self, predicates: &[Expression]) -> PredicateSet {
        let mut builder = PredicateSetBuilder::new();
        builder.extend(predicates.iter().cloned());
        if !self.enable_inference {
            return builder.build();
        }

        let mut equivalences = EquivalenceClasses::default();
        for predicate in predicates {
            if let Some((left, right)) = predicate.as_slot_equality() {
                if left != right {
                    equivalences.union(left, right);
                }
            }
        }

        let classes: Vec<Vec<SlotRef>> = equivalences
            .into_classes()
            .into_iter()
            .filter(|members| members.len() <= self.max_equivalence_class_size)
            .collect();
        if classes.is_empty() {
            return builder.build();
        }

        let mut class_of: HashMap<&SlotRef, usize> = HashMap::new();
        for (index, members) in classes.iter().enumerate() {
            for (i, lo) in members.iter().enumerate() {
                class_of.insert(lo, index);
                for hi in &members[i + 1..] {
                    builder.insert(Expression::equal_to(
                        Expression::slot(lo.clone()),
                        Expression::slot(hi.clone()),
                    ));
                }
            }
        }

        for predicate in predicates {
            let slots = predicate.input_slots();
            if slots.len() != 1 {
                continue;
            }
            let Some(source) = slots.into_iter().next() else {
                continue;
            };
            let Some(&index) = class_of.get(&source) else {
                continue;
            };
            for member in classes[index].iter().filter(|member| **member != source) {
                builder.insert(substitute_slot(predicate, &source, member));
            }
        }

        trace!(
            "谓词推理: 输入 {} 个, 等价类 {} 个, 输出 {} 个",
            predicates.len(),
            classes.len(),
            builder.len()
        );
        builder.build()
    }
}

fn substitute_slot(predicate: &Expression, from: &SlotRef, to: &SlotRef) -> Expression {
    predicate.rewrite_down_short_circuit(&mut |node: &Expression| match node {
        Expression::Slot(slot) if slot == from => Some(Expression::slot(to.clone())),
        _ => None,
    })
}
