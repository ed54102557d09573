//! 谓词上拉推导
//!
//! 对计划树中的每个节点，计算在其输出行上必然成立的谓词集合，
//! 供连接消除、分区裁剪、范围过滤下推等下游规则使用。
//!
//! 各算子的规则：
//! - 默认（Scan、Sort、Limit、Intersect、Minus）：单输入节点沿用子节点的集合，
//!   其余为空；
//! - Union：常量行按列折叠为 `=` / `IN`；多分支时把各分支谓词改写到
//!   Union 的输出列上再取交集；两者兼有时为空；
//! - Filter：过滤条件并上子节点集合；
//! - Join：左右两侧集合的并集，不考虑连接类型与连接条件；
//! - Project：子节点集合、沿别名改写后的谓词、`别名 = 字面量`；
//! - Aggregate：子节点集合合取后重新拆分，不检查分组键。
//!
//! 除 Union 外，组合后的集合都要经过推理与可见性过滤：先做等值传递推理，
//! 再只保留引用列全部在节点输出中的谓词。
//!
//! 同一次推导以节点 ID 为键缓存结果。遍历使用显式栈，先子后父。

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, trace, warn};

use crate::config::PullUpConfig;
use crate::core::{Expression, SlotRef, Value};
use crate::query::optimizer::expression_utils::{
    conjunction, extract_conjuncts, replace_all, slot_replace_map, slots_within,
};
use crate::query::optimizer::predicate_propagation::PredicatePropagation;
use crate::query::optimizer::predicate_set::{PredicateSet, PredicateSetBuilder};
use crate::query::planner::plan::core::arena::PlanArena;
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;
use crate::query::planner::plan::core::nodes::{
    AggregateNode, FilterNode, JoinNode, PlanNodeEnum, PlanNodeKind, ProjectNode, UnionNode,
};

/// 推导统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullUpStats {
    /// 实际计算过的节点数
    pub computed: usize,
    /// 命中缓存的次数
    pub cache_hits: usize,
    /// 每种算子规则被应用的次数
    pub rule_applications: BTreeMap<PlanNodeKind, usize>,
}

impl PullUpStats {
    pub fn rule_application(&self, kind: PlanNodeKind) -> usize {
        self.rule_applications.get(&kind).copied().unwrap_or(0)
    }
}

/// 遍历栈帧
struct Frame<'a> {
    node: &'a PlanNodeEnum,
    inputs: Vec<PlanNodeId>,
    next: usize,
}

impl<'a> Frame<'a> {
    fn new(node: &'a PlanNodeEnum) -> Self {
        Self {
            node,
            inputs: derivation_inputs(node),
            next: 0,
        }
    }
}

/// 规则需要先推导的子节点，按推导顺序排列
fn derivation_inputs(node: &PlanNodeEnum) -> Vec<PlanNodeId> {
    match node {
        PlanNodeEnum::Union(union) if !union.constant_exprs_list().is_empty() => Vec::new(),
        PlanNodeEnum::Union(union) => union.inputs().to_vec(),
        PlanNodeEnum::Join(join) => vec![join.left(), join.right()],
        other if other.arity() == 1 => other.children(),
        _ => Vec::new(),
    }
}

/// 谓词上拉推导过程
///
/// 一个实例对应一次推导，在整个生命周期内不可变地借用计划存储。
pub struct PredicatePullUp<'a> {
    arena: &'a PlanArena,
    propagation: PredicatePropagation,
    cache: HashMap<PlanNodeId, PredicateSet>,
    stats: PullUpStats,
}

impl<'a> PredicatePullUp<'a> {
    pub fn new(arena: &'a PlanArena) -> Self {
        Self::with_config(arena, &PullUpConfig::default())
    }

    pub fn with_config(arena: &'a PlanArena, config: &PullUpConfig) -> Self {
        Self {
            arena,
            propagation: PredicatePropagation::new(config),
            cache: HashMap::new(),
            stats: PullUpStats::default(),
        }
    }

    pub fn stats(&self) -> &PullUpStats {
        &self.stats
    }

    /// 已缓存的推导结果
    pub fn cached(&self, id: PlanNodeId) -> Option<&PredicateSet> {
        self.cache.get(&id)
    }

    /// 推导节点上成立的谓词集合，未知节点得到空集
    pub fn derive(&mut self, id: PlanNodeId) -> PredicateSet {
        if let Some(cached) = self.cache.get(&id) {
            self.stats.cache_hits += 1;
            trace!("谓词推导: 节点 {} 命中缓存", id);
            return cached.clone();
        }

        let arena = self.arena;
        let Some(root) = arena.get(id) else {
            warn!("谓词推导: 未知的计划节点 {}", id);
            return PredicateSet::empty();
        };

        let computed_before = self.stats.computed;
        let hits_before = self.stats.cache_hits;
        let mut stack = vec![Frame::new(root)];

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = self.next_input(frame) {
                if self.cache.contains_key(&child) {
                    self.stats.cache_hits += 1;
                    continue;
                }
                match arena.get(child) {
                    Some(node) => stack.push(Frame::new(node)),
                    None => {
                        warn!("谓词推导: 未知的计划节点 {}", child);
                        self.cache.insert(child, PredicateSet::empty());
                    }
                }
                continue;
            }

            let node = frame.node;
            stack.pop();
            let predicates = self.apply_rule(node);
            self.cache.insert(node.id(), predicates);
        }

        debug!(
            "谓词推导完成: 根节点 {}, 新计算 {} 个节点, 缓存命中 {} 次",
            id,
            self.stats.computed - computed_before,
            self.stats.cache_hits - hits_before
        );
        self.cache.get(&id).cloned().unwrap_or_default()
    }

    /// 取出帧的下一个待推导子节点
    ///
    /// Union 的某个分支推导为空时，后续分支不再推导。
    fn next_input(&self, frame: &mut Frame<'_>) -> Option<PlanNodeId> {
        if frame.next >= frame.inputs.len() {
            return None;
        }
        if frame.next > 0 && frame.node.kind() == PlanNodeKind::Union {
            let previous = frame.inputs[frame.next - 1];
            if self.cache.get(&previous).map_or(true, PredicateSet::is_empty) {
                return None;
            }
        }
        let child = frame.inputs[frame.next];
        frame.next += 1;
        Some(child)
    }

    fn child_predicates(&self, id: PlanNodeId) -> PredicateSet {
        self.cache.get(&id).cloned().unwrap_or_default()
    }

    fn apply_rule(&mut self, node: &PlanNodeEnum) -> PredicateSet {
        self.stats.computed += 1;
        *self.stats.rule_applications.entry(node.kind()).or_insert(0) += 1;

        let predicates = match node {
            PlanNodeEnum::Union(union) => self.visit_union(union),
            PlanNodeEnum::Filter(filter) => self.visit_filter(filter),
            PlanNodeEnum::Join(join) => self.visit_join(join),
            PlanNodeEnum::Project(project) => self.visit_project(project),
            PlanNodeEnum::Aggregate(aggregate) => self.visit_aggregate(aggregate),
            PlanNodeEnum::Scan(_)
            | PlanNodeEnum::Sort(_)
            | PlanNodeEnum::Limit(_)
            | PlanNodeEnum::Intersect(_)
            | PlanNodeEnum::Minus(_) => self.visit_default(node),
        };

        trace!(
            "谓词推导: {}[{}] 得到 {} 个谓词",
            node.name(),
            node.id(),
            predicates.len()
        );
        predicates
    }

    fn visit_default(&self, node: &PlanNodeEnum) -> PredicateSet {
        match node.children().as_slice() {
            [child] => self.child_predicates(*child),
            _ => PredicateSet::empty(),
        }
    }

    fn visit_union(&self, union: &UnionNode) -> PredicateSet {
        if union.is_constant_union() {
            return fold_constant_rows(union);
        }
        if !union.constant_exprs_list().is_empty() {
            return PredicateSet::empty();
        }

        let output_set: HashSet<SlotRef> = union.output().iter().cloned().collect();
        let mut common: Option<PredicateSet> = None;

        for (index, child) in union.inputs().iter().enumerate() {
            let child_predicates = self.child_predicates(*child);
            if child_predicates.is_empty() {
                return PredicateSet::empty();
            }
            let replace_map = slot_replace_map(union.regular_child_output(index), union.output());
            let aligned: PredicateSet = replace_all(child_predicates.iter(), &replace_map)
                .into_iter()
                .collect();
            common = Some(match common {
                None => aligned,
                Some(previous) => previous.intersect(&aligned),
            });
        }

        // 各分支共享的子树可能留下未映射到输出的列
        common
            .unwrap_or_default()
            .iter()
            .filter(|predicate| slots_within(predicate, &output_set))
            .cloned()
            .collect()
    }

    fn visit_filter(&self, filter: &FilterNode) -> PredicateSet {
        let mut builder = PredicateSetBuilder::new();
        for conjunct in filter.conjuncts() {
            builder.extend(extract_conjuncts(conjunct));
        }
        builder.extend_from_set(&self.child_predicates(filter.input()));
        self.available_predicates(builder.build(), filter.output())
    }

    fn visit_join(&self, join: &JoinNode) -> PredicateSet {
        let left = self.child_predicates(join.left());
        let right = self.child_predicates(join.right());
        self.available_predicates(left.union(&right), join.output())
    }

    fn visit_project(&self, project: &ProjectNode) -> PredicateSet {
        let child_predicates = self.child_predicates(project.input());
        let mut builder = PredicateSetBuilder::from_set(&child_predicates);

        for (alias, producer) in project.alias_to_producer() {
            for predicate in &child_predicates {
                builder.insert(predicate.rewrite_down_short_circuit(&mut |node: &Expression| {
                    (node == producer).then(|| Expression::slot(alias.clone()))
                }));
            }
        }

        for expr in project.projects() {
            if let (Some(value), Some(slot)) = (expr.alias_literal(), expr.to_slot()) {
                builder.insert(Expression::equal_to(
                    Expression::slot(slot.clone()),
                    Expression::literal(value.clone()),
                ));
            }
        }

        self.available_predicates(builder.build(), project.output())
    }

    fn visit_aggregate(&self, aggregate: &AggregateNode) -> PredicateSet {
        let child_predicates = self.child_predicates(aggregate.input());
        let folded = conjunction(child_predicates.to_vec());
        let predicates: PredicateSet = extract_conjuncts(&folded).into_iter().collect();
        self.available_predicates(predicates, aggregate.output())
    }

    /// 推理并按输出列过滤
    fn available_predicates(&self, predicates: PredicateSet, output: &[SlotRef]) -> PredicateSet {
        let inferred = self.propagation.infer(predicates.as_slice());
        let output_set: HashSet<SlotRef> = output.iter().cloned().collect();

        let mut builder = PredicateSetBuilder::new();
        builder.extend(
            predicates
                .iter()
                .filter(|predicate| slots_within(predicate, &output_set))
                .cloned(),
        );
        builder.extend(
            inferred
                .iter()
                .filter(|predicate| slots_within(predicate, &output_set))
                .cloned(),
        );
        builder.build()
    }
}

/// 常量行 UNION：逐列收集字面量，非字面量的列整体放弃
fn fold_constant_rows(union: &UnionNode) -> PredicateSet {
    let rows = union.constant_exprs_list();
    let mut builder = PredicateSetBuilder::new();

    for (column, slot) in union.output().iter().enumerate() {
        let mut options: Vec<Value> = Vec::new();
        let mut all_literal = true;
        for row in rows {
            match row.get(column).and_then(Expression::alias_literal) {
                Some(value) => {
                    if !options.contains(value) {
                        options.push(value.clone());
                    }
                }
                None => {
                    all_literal = false;
                    break;
                }
            }
        }
        if !all_literal {
            continue;
        }

        options.retain(|value| !value.is_null());
        let compare_expr = Expression::slot(slot.clone());
        match options.len() {
            0 => {}
            1 => {
                let value = options.remove(0);
                builder.insert(Expression::equal_to(compare_expr, Expression::literal(value)));
            }
            _ => {
                builder.insert(Expression::in_list(compare_expr, options));
            }
        }
    }
    builder.build()
}

/// 对 `root` 运行一次全新的推导
pub fn pull_up_predicates(arena: &PlanArena, root: PlanNodeId) -> PredicateSet {
    PredicatePullUp::new(arena).derive(root)
}
