//! 计划解释
//!
//! 把计划树渲染成缩进的节点描述列表，可选地附带每个节点推导出的谓词，
//! 用于调试推导规则。

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::query::optimizer::PredicatePullUp;
use crate::query::planner::plan::core::arena::PlanArena;
use crate::query::planner::plan::core::node_id_generator::PlanNodeId;
use crate::query::planner::plan::core::nodes::PlanNodeEnum;

/// 节点描述键值对
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 计划节点描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanNodeDescription {
    pub name: String,
    pub id: i64,
    pub depth: usize,
    pub description: Vec<Pair>,
    pub dependencies: Vec<i64>,
}

impl PlanNodeDescription {
    pub fn new(name: impl Into<String>, id: i64, depth: usize) -> Self {
        Self {
            name: name.into(),
            id,
            depth,
            description: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn add_description(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.description.push(Pair::new(key, value));
    }

    pub fn with_description(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_description(key, value);
        self
    }

    pub fn with_dependencies(mut self, deps: Vec<i64>) -> Self {
        self.dependencies = deps;
        self
    }

    /// 查找描述项
    pub fn get(&self, key: &str) -> Option<&str> {
        self.description
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }
}

/// 计划描述，节点按先序排列
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanDescription {
    pub plan_node_descs: Vec<PlanNodeDescription>,
}

impl PlanDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node_desc(&mut self, desc: PlanNodeDescription) -> usize {
        let index = self.plan_node_descs.len();
        self.plan_node_descs.push(desc);
        index
    }

    pub fn get_node_desc(&self, node_id: i64) -> Option<&PlanNodeDescription> {
        self.plan_node_descs.iter().find(|desc| desc.id == node_id)
    }
}

impl fmt::Display for PlanDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for desc in &self.plan_node_descs {
            write!(f, "{}{}[{}]", "  ".repeat(desc.depth), desc.name, desc.id)?;
            for pair in &desc.description {
                write!(f, " {}={}", pair.key, pair.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn join_display<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_node(node: &PlanNodeEnum, depth: usize) -> PlanNodeDescription {
    let mut desc = PlanNodeDescription::new(node.name(), node.id().0, depth)
        .with_dependencies(node.children().iter().map(|child| child.0).collect())
        .with_description("output", format!("[{}]", join_display(node.output())));

    match node {
        PlanNodeEnum::Scan(scan) => desc.add_description("table", scan.table()),
        PlanNodeEnum::Filter(filter) => {
            desc.add_description("conjuncts", join_display(filter.conjuncts()))
        }
        PlanNodeEnum::Join(join) => {
            desc.add_description("type", join.join_type().name());
            if !join.hash_conjuncts().is_empty() {
                desc.add_description("hash", join_display(join.hash_conjuncts()));
            }
            if !join.other_conjuncts().is_empty() {
                desc.add_description("other", join_display(join.other_conjuncts()));
            }
        }
        PlanNodeEnum::Project(project) => {
            desc.add_description("projects", join_display(project.projects()))
        }
        PlanNodeEnum::Aggregate(aggregate) => {
            desc.add_description("group_by", join_display(aggregate.group_by()));
            desc.add_description("outputs", join_display(aggregate.outputs()));
        }
        PlanNodeEnum::Union(union) => {
            desc.add_description("qualifier", union.qualifier().to_string());
            if !union.constant_exprs_list().is_empty() {
                desc.add_description(
                    "constants",
                    join_display(
                        union
                            .constant_exprs_list()
                            .iter()
                            .map(|row| format!("({})", join_display(row))),
                    ),
                );
            }
        }
        PlanNodeEnum::Intersect(intersect) => {
            desc.add_description("qualifier", intersect.qualifier().to_string())
        }
        PlanNodeEnum::Minus(minus) => {
            desc.add_description("qualifier", minus.qualifier().to_string())
        }
        PlanNodeEnum::Sort(sort) => desc.add_description(
            "keys",
            join_display(sort.order_keys().iter().map(|key| {
                format!("{} {}", key.expr, if key.asc { "ASC" } else { "DESC" })
            })),
        ),
        PlanNodeEnum::Limit(limit) => {
            desc.add_description("limit", limit.limit().to_string());
            desc.add_description("offset", limit.offset().to_string());
        }
    }
    desc
}

impl PlanArena {
    /// 解释以 `root` 为根的计划树
    ///
    /// 传入推导过程时，每个节点额外带有 `predicates` 描述项。
    /// 被多个父节点共享的子树只展开一次，之后的出现只输出一个
    /// 带 `shared` 描述项的引用条目，不再展开其子节点。
    pub fn explain(
        &self,
        root: PlanNodeId,
        mut pull_up: Option<&mut PredicatePullUp<'_>>,
    ) -> PlanDescription {
        let mut plan_desc = PlanDescription::new();
        let mut stack = vec![(root, 0usize)];
        let mut visited = HashSet::new();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get(id) else {
                plan_desc.add_node_desc(PlanNodeDescription::new("Unknown", id.0, depth));
                continue;
            };
            if !visited.insert(id) {
                plan_desc.add_node_desc(
                    PlanNodeDescription::new(node.name(), id.0, depth)
                        .with_description("shared", "true"),
                );
                continue;
            }

            let mut desc = describe_node(node, depth);
            if let Some(pass) = pull_up.as_deref_mut() {
                desc.add_description("predicates", pass.derive(id).to_string());
            }
            plan_desc.add_node_desc(desc);

            for child in node.children().into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        plan_desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Expression, SlotRef};
    use crate::query::planner::plan::core::nodes::JoinType;

    #[test]
    fn test_explain_preorder_with_depth() {
        let mut arena = PlanArena::new();
        let a = SlotRef::new("a");
        let scan = arena.add_scan("t", vec![a.clone()]);
        let filter = arena
            .add_filter(
                scan,
                vec![Expression::greater_than(Expression::slot(a), Expression::literal(1))],
            )
            .expect("过滤节点应构建成功");

        let desc = arena.explain(filter, None);
        assert_eq!(desc.plan_node_descs.len(), 2);
        assert_eq!(desc.plan_node_descs[0].name, "FilterNode");
        assert_eq!(desc.plan_node_descs[0].depth, 0);
        assert_eq!(desc.plan_node_descs[1].name, "ScanNode");
        assert_eq!(desc.plan_node_descs[1].depth, 1);
        assert_eq!(desc.plan_node_descs[1].get("table"), Some("t"));
        assert!(desc.plan_node_descs[0].get("predicates").is_none());

        let rendered = desc.to_string();
        assert!(rendered.contains("  ScanNode["));
    }

    #[test]
    fn test_explain_with_derived_predicates() {
        let mut arena = PlanArena::new();
        let a = SlotRef::new("a");
        let scan = arena.add_scan("t", vec![a.clone()]);
        let filter = arena
            .add_filter(
                scan,
                vec![Expression::greater_than(Expression::slot(a), Expression::literal(1))],
            )
            .expect("过滤节点应构建成功");

        let mut pass = PredicatePullUp::new(&arena);
        let desc = arena.explain(filter, Some(&mut pass));
        let predicates = desc.plan_node_descs[0]
            .get("predicates")
            .expect("应包含推导谓词");
        assert!(predicates.contains("> 1"));
        assert_eq!(desc.plan_node_descs[1].get("predicates"), Some("{}"));
    }

    #[test]
    fn test_explain_expands_shared_subtree_once() {
        let mut arena = PlanArena::new();
        let scan = arena.add_scan("t", vec![SlotRef::new("a")]);
        let mut current = scan;
        for _ in 0..16 {
            current = arena
                .add_join(JoinType::Cross, current, current, Vec::new(), Vec::new())
                .expect("连接节点应构建成功");
        }

        let desc = arena.explain(current, None);
        // 每个连接展开一次，右侧子节点各留一个引用条目
        assert_eq!(desc.plan_node_descs.len(), 17 + 16);
        assert_eq!(
            desc.plan_node_descs
                .iter()
                .filter(|node| node.get("shared").is_some())
                .count(),
            16
        );
        let last = desc.plan_node_descs.last().expect("应包含节点描述");
        assert_eq!(last.name, "JoinNode");
        assert_eq!(last.depth, 1);
        assert_eq!(last.get("shared"), Some("true"));
    }
}
