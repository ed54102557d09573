//! 表达式树遍历
//!
//! 提供表达式树的遍历和重写方法。

use crate::core::types::expression::Expression;

impl Expression {
    /// 获取表达式的所有直接子表达式
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Literal(_) => vec![],
            Expression::Slot(_) => vec![],
            Expression::Comparison { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expression::Connective { operands, .. } => operands.iter().collect(),
            Expression::Not(operand) => vec![operand.as_ref()],
            Expression::InPredicate { compare_expr, .. } => vec![compare_expr.as_ref()],
            Expression::Function { args, .. } => args.iter().collect(),
            Expression::Alias { child, .. } => vec![child.as_ref()],
        }
    }

    /// 遍历表达式树（前序遍历）
    pub fn traverse_preorder<F>(&self, callback: &mut F)
    where
        F: FnMut(&Expression),
    {
        callback(self);
        for child in self.children() {
            child.traverse_preorder(callback);
        }
    }

    /// 检查表达式树中是否存在满足条件的节点
    pub fn any_match<F>(&self, predicate: &F) -> bool
    where
        F: Fn(&Expression) -> bool,
    {
        predicate(self) || self.children().into_iter().any(|c| c.any_match(predicate))
    }

    /// 自顶向下短路重写
    ///
    /// 对每个节点先调用 `rewriter`：返回 `Some` 时用结果替换该节点，
    /// 且不再深入被替换的子树；返回 `None` 时递归重写子节点。
    pub fn rewrite_down_short_circuit<F>(&self, rewriter: &mut F) -> Expression
    where
        F: FnMut(&Expression) -> Option<Expression>,
    {
        if let Some(rewritten) = rewriter(self) {
            return rewritten;
        }

        match self {
            Expression::Literal(_) | Expression::Slot(_) => self.clone(),
            Expression::Comparison { op, left, right } => Expression::Comparison {
                op: *op,
                left: Box::new(left.rewrite_down_short_circuit(rewriter)),
                right: Box::new(right.rewrite_down_short_circuit(rewriter)),
            },
            Expression::Connective { kind, operands } => Expression::Connective {
                kind: *kind,
                operands: operands
                    .iter()
                    .map(|operand| operand.rewrite_down_short_circuit(rewriter))
                    .collect(),
            },
            Expression::Not(operand) => {
                Expression::Not(Box::new(operand.rewrite_down_short_circuit(rewriter)))
            }
            Expression::InPredicate {
                compare_expr,
                options,
            } => Expression::InPredicate {
                compare_expr: Box::new(compare_expr.rewrite_down_short_circuit(rewriter)),
                options: options.clone(),
            },
            Expression::Function { name, args } => Expression::Function {
                name: name.clone(),
                args: args
                    .iter()
                    .map(|arg| arg.rewrite_down_short_circuit(rewriter))
                    .collect(),
            },
            Expression::Alias { child, slot } => Expression::Alias {
                child: Box::new(child.rewrite_down_short_circuit(rewriter)),
                slot: slot.clone(),
            },
        }
    }
}
