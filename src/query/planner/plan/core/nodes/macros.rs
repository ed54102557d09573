//! 计划节点宏定义
//!
//! 提供宏来简化计划节点的定义，减少样板代码

/// 定义计划节点的宏
///
/// 生成节点结构体（带 `id` 与 `output` 字段）、通用访问方法以及
/// `PlanNode` 实现。`input` 决定子节点字段：
/// - `ZeroInput`：叶子节点
/// - `SingleInput`：单输入，字段 `input`
/// - `BinaryInput`：双输入，字段 `left` / `right`
/// - `MultipleInputs`：多输入，字段 `inputs`
///
/// # 示例
/// ```ignore
/// define_plan_node! {
///     pub struct FilterNode {
///         conjuncts: Vec<Expression>,
///     }
///     enum: Filter
///     input: SingleInput
/// }
/// ```
#[macro_export]
macro_rules! define_plan_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        enum: $variant:ident
        input: ZeroInput
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            $($field: $type,)*
            output: Vec<$crate::core::SlotRef>,
        }

        $crate::define_plan_node!(@common $name, $variant, |_node| Vec::new());
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        enum: $variant:ident
        input: SingleInput
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            input: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            $($field: $type,)*
            output: Vec<$crate::core::SlotRef>,
        }

        impl $name {
            /// 获取输入节点ID
            pub fn input(&self) -> $crate::query::planner::plan::core::node_id_generator::PlanNodeId {
                self.input
            }
        }

        $crate::define_plan_node!(@common $name, $variant, |node| vec![node.input]);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        enum: $variant:ident
        input: BinaryInput
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            left: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            right: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            $($field: $type,)*
            output: Vec<$crate::core::SlotRef>,
        }

        impl $name {
            /// 获取左输入节点ID
            pub fn left(&self) -> $crate::query::planner::plan::core::node_id_generator::PlanNodeId {
                self.left
            }

            /// 获取右输入节点ID
            pub fn right(&self) -> $crate::query::planner::plan::core::node_id_generator::PlanNodeId {
                self.right
            }
        }

        $crate::define_plan_node!(@common $name, $variant, |node| vec![node.left, node.right]);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        enum: $variant:ident
        input: MultipleInputs
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: $crate::query::planner::plan::core::node_id_generator::PlanNodeId,
            inputs: Vec<$crate::query::planner::plan::core::node_id_generator::PlanNodeId>,
            $($field: $type,)*
            output: Vec<$crate::core::SlotRef>,
        }

        impl $name {
            /// 获取所有输入节点ID
            pub fn inputs(&self) -> &[$crate::query::planner::plan::core::node_id_generator::PlanNodeId] {
                &self.inputs
            }
        }

        $crate::define_plan_node!(@common $name, $variant, |node| node.inputs.clone());
    };

    (@common $name:ident, $variant:ident, |$node:ident| $children:expr) => {
        impl $name {
            pub fn id(&self) -> $crate::query::planner::plan::core::node_id_generator::PlanNodeId {
                self.id
            }

            pub fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            /// 输出列
            pub fn output(&self) -> &[$crate::core::SlotRef] {
                &self.output
            }

            pub fn into_enum(self) -> $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum {
                $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum::$variant(self)
            }
        }

        impl $crate::query::planner::plan::core::nodes::plan_node_traits::PlanNode for $name {
            fn id(&self) -> $crate::query::planner::plan::core::node_id_generator::PlanNodeId {
                self.id
            }

            fn name(&self) -> &'static str {
                self.type_name()
            }

            fn output(&self) -> &[$crate::core::SlotRef] {
                &self.output
            }

            fn children(&self) -> Vec<$crate::query::planner::plan::core::node_id_generator::PlanNodeId> {
                let $node = self;
                $children
            }
        }
    };
}
