//! 计划节点存储
//!
//! `PlanArena` 持有一棵（或多棵共享子树的）计划树的全部节点。
//! 节点构建后不可变，子节点以 `PlanNodeId` 引用，同一子节点可以
//! 出现在多个父节点之下。所有构建方法都会校验结构，失败时返回
//! `PlanError`。

use std::collections::{HashMap, HashSet};

use crate::core::error::{PlanError, PlanResult};
use crate::core::{Expression, SlotRef};
use crate::query::planner::plan::core::node_id_generator::{next_node_id, PlanNodeId};
use crate::query::planner::plan::core::nodes::{
    AggregateNode, FilterNode, IntersectNode, JoinNode, JoinType, LimitNode, MinusNode, OrderKey,
    PlanNodeEnum, ProjectNode, ScanNode, SetQualifier, SortNode, UnionNode,
};

/// 计划节点存储
#[derive(Debug, Default, Clone)]
pub struct PlanArena {
    nodes: HashMap<PlanNodeId, PlanNodeEnum>,
    order: Vec<PlanNodeId>,
}

impl PlanArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按ID获取节点
    pub fn get(&self, id: PlanNodeId) -> Option<&PlanNodeEnum> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: PlanNodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 按插入顺序返回所有节点ID（子节点总是先于父节点）
    pub fn node_ids(&self) -> &[PlanNodeId] {
        &self.order
    }

    /// 获取节点的输出列
    pub fn output(&self, id: PlanNodeId) -> PlanResult<&[SlotRef]> {
        self.node(id).map(PlanNodeEnum::output)
    }

    /// 添加扫描节点
    pub fn add_scan(&mut self, table: impl Into<String>, output: Vec<SlotRef>) -> PlanNodeId {
        let id = next_node_id();
        self.insert(ScanNode::new(id, table, output).into_enum())
    }

    /// 添加过滤节点，输出列与输入相同
    pub fn add_filter(
        &mut self,
        input: PlanNodeId,
        conjuncts: Vec<Expression>,
    ) -> PlanResult<PlanNodeId> {
        let output = self.output(input)?.to_vec();
        check_slots_visible(&output, conjuncts.iter())?;

        let id = next_node_id();
        Ok(self.insert(FilterNode::new(id, input, conjuncts, output).into_enum()))
    }

    /// 添加连接节点，输出列由连接类型决定
    pub fn add_join(
        &mut self,
        join_type: JoinType,
        left: PlanNodeId,
        right: PlanNodeId,
        hash_conjuncts: Vec<Expression>,
        other_conjuncts: Vec<Expression>,
    ) -> PlanResult<PlanNodeId> {
        let left_output = self.output(left)?;
        let right_output = self.output(right)?;

        let visible: Vec<SlotRef> = left_output.iter().chain(right_output).cloned().collect();
        check_slots_visible(&visible, hash_conjuncts.iter().chain(other_conjuncts.iter()))?;

        let output = join_type.output(left_output, right_output);
        let id = next_node_id();
        Ok(self.insert(
            JoinNode::new(
                id,
                join_type,
                left,
                right,
                hash_conjuncts,
                other_conjuncts,
                output,
            )
            .into_enum(),
        ))
    }

    /// 添加投影节点
    ///
    /// 每个投影必须是列引用或别名，且只引用输入的输出列
    pub fn add_project(
        &mut self,
        input: PlanNodeId,
        projects: Vec<Expression>,
    ) -> PlanResult<PlanNodeId> {
        let child_output = self.output(input)?;
        check_slots_visible(child_output, projects.iter())?;
        let output = named_output(&projects)?;

        let id = next_node_id();
        Ok(self.insert(ProjectNode::new(id, input, projects, output).into_enum()))
    }

    /// 添加聚合节点
    pub fn add_aggregate(
        &mut self,
        input: PlanNodeId,
        group_by: Vec<Expression>,
        outputs: Vec<Expression>,
    ) -> PlanResult<PlanNodeId> {
        let child_output = self.output(input)?;
        check_slots_visible(child_output, group_by.iter().chain(outputs.iter()))?;
        let output = named_output(&outputs)?;

        let id = next_node_id();
        Ok(self.insert(AggregateNode::new(id, input, group_by, outputs, output).into_enum()))
    }

    /// 添加 UNION 节点
    ///
    /// `regular_children_output[i]` 是第 i 个分支中按位置对应输出列的列，
    /// `constant_rows` 中每行的每一项都必须是命名表达式。
    pub fn add_union(
        &mut self,
        qualifier: SetQualifier,
        inputs: Vec<PlanNodeId>,
        regular_children_output: Vec<Vec<SlotRef>>,
        constant_rows: Vec<Vec<Expression>>,
        output: Vec<SlotRef>,
    ) -> PlanResult<PlanNodeId> {
        self.check_branches(&inputs, &regular_children_output, output.len())?;

        for (row_index, row) in constant_rows.iter().enumerate() {
            if row.len() != output.len() {
                return Err(PlanError::ConstantRowArityMismatch {
                    row: row_index,
                    expected: output.len(),
                    actual: row.len(),
                });
            }
            if let Some(unnamed) = row.iter().find(|expr| !expr.is_named()) {
                return Err(PlanError::unnamed_output(unnamed.to_string()));
            }
        }

        if inputs.is_empty() && constant_rows.is_empty() {
            return Err(PlanError::invalid_plan_structure(
                "UNION 至少需要一个分支或一行常量",
            ));
        }

        let id = next_node_id();
        Ok(self.insert(
            UnionNode::new(
                id,
                qualifier,
                inputs,
                regular_children_output,
                constant_rows,
                output,
            )
            .into_enum(),
        ))
    }

    /// 添加仅由常量行构成的 UNION 节点
    pub fn add_constant_union(
        &mut self,
        qualifier: SetQualifier,
        constant_rows: Vec<Vec<Expression>>,
        output: Vec<SlotRef>,
    ) -> PlanResult<PlanNodeId> {
        self.add_union(qualifier, Vec::new(), Vec::new(), constant_rows, output)
    }

    /// 添加 INTERSECT 节点
    pub fn add_intersect(
        &mut self,
        qualifier: SetQualifier,
        inputs: Vec<PlanNodeId>,
        regular_children_output: Vec<Vec<SlotRef>>,
        output: Vec<SlotRef>,
    ) -> PlanResult<PlanNodeId> {
        self.check_set_operation(&inputs, &regular_children_output, output.len(), "INTERSECT")?;

        let id = next_node_id();
        Ok(self.insert(
            IntersectNode::new(id, qualifier, inputs, regular_children_output, output).into_enum(),
        ))
    }

    /// 添加 MINUS 节点
    pub fn add_minus(
        &mut self,
        qualifier: SetQualifier,
        inputs: Vec<PlanNodeId>,
        regular_children_output: Vec<Vec<SlotRef>>,
        output: Vec<SlotRef>,
    ) -> PlanResult<PlanNodeId> {
        self.check_set_operation(&inputs, &regular_children_output, output.len(), "MINUS")?;

        let id = next_node_id();
        Ok(self.insert(
            MinusNode::new(id, qualifier, inputs, regular_children_output, output).into_enum(),
        ))
    }

    /// 添加排序节点，输出列与输入相同
    pub fn add_sort(
        &mut self,
        input: PlanNodeId,
        order_keys: Vec<OrderKey>,
    ) -> PlanResult<PlanNodeId> {
        let output = self.output(input)?.to_vec();
        check_slots_visible(&output, order_keys.iter().map(|key| &key.expr))?;

        let id = next_node_id();
        Ok(self.insert(SortNode::new(id, input, order_keys, output).into_enum()))
    }

    /// 添加限制节点，输出列与输入相同
    pub fn add_limit(
        &mut self,
        input: PlanNodeId,
        limit: i64,
        offset: i64,
    ) -> PlanResult<PlanNodeId> {
        if limit < 0 || offset < 0 {
            return Err(PlanError::invalid_plan_structure(format!(
                "LIMIT/OFFSET 不能为负数: limit={}, offset={}",
                limit, offset
            )));
        }
        let output = self.output(input)?.to_vec();

        let id = next_node_id();
        Ok(self.insert(LimitNode::new(id, input, limit, offset, output).into_enum()))
    }

    fn node(&self, id: PlanNodeId) -> PlanResult<&PlanNodeEnum> {
        self.nodes.get(&id).ok_or(PlanError::UnknownNode(id))
    }

    fn insert(&mut self, node: PlanNodeEnum) -> PlanNodeId {
        let id = node.id();
        self.nodes.insert(id, node);
        self.order.push(id);
        id
    }

    fn check_set_operation(
        &self,
        inputs: &[PlanNodeId],
        regular_children_output: &[Vec<SlotRef>],
        arity: usize,
        op_name: &str,
    ) -> PlanResult<()> {
        if inputs.len() < 2 {
            return Err(PlanError::invalid_plan_structure(format!(
                "{} 至少需要两个分支，实际 {}",
                op_name,
                inputs.len()
            )));
        }
        self.check_branches(inputs, regular_children_output, arity)
    }

    fn check_branches(
        &self,
        inputs: &[PlanNodeId],
        regular_children_output: &[Vec<SlotRef>],
        arity: usize,
    ) -> PlanResult<()> {
        if inputs.len() != regular_children_output.len() {
            return Err(PlanError::invalid_plan_structure(format!(
                "分支数 {} 与分支输出映射数 {} 不一致",
                inputs.len(),
                regular_children_output.len()
            )));
        }

        for (branch, (input, branch_output)) in
            inputs.iter().zip(regular_children_output).enumerate()
        {
            if branch_output.len() != arity {
                return Err(PlanError::BranchArityMismatch {
                    branch,
                    expected: arity,
                    actual: branch_output.len(),
                });
            }
            let child_output: HashSet<&SlotRef> = self.output(*input)?.iter().collect();
            if let Some(missing) = branch_output.iter().find(|slot| !child_output.contains(slot)) {
                return Err(PlanError::slot_not_in_child_output(missing.to_string()));
            }
        }
        Ok(())
    }
}

/// 命名表达式列表对应的输出列
fn named_output(exprs: &[Expression]) -> PlanResult<Vec<SlotRef>> {
    exprs
        .iter()
        .map(|expr| {
            expr.to_slot()
                .cloned()
                .ok_or_else(|| PlanError::unnamed_output(expr.to_string()))
        })
        .collect()
}

/// 检查表达式引用的列都在可见列中
fn check_slots_visible<'a>(
    visible: &[SlotRef],
    exprs: impl Iterator<Item = &'a Expression>,
) -> PlanResult<()> {
    let visible: HashSet<&SlotRef> = visible.iter().collect();
    for expr in exprs {
        if let Some(missing) = expr
            .input_slots()
            .into_iter()
            .find(|slot| !visible.contains(slot))
        {
            return Err(PlanError::slot_not_in_child_output(missing.to_string()));
        }
    }
    Ok(())
}
