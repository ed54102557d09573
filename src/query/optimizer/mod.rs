//! 查询优化器模块
//!
//! 提供计划树上的谓词推导功能
//!
//! ## 模块结构
//!
//! - `pull_up_predicates` - 谓词上拉推导，按节点计算必然成立的谓词集合
//! - `predicate_propagation` - 基于列等价类的谓词传递推理
//! - `predicate_set` - 不可变的谓词集合及其构建器
//! - `expression_utils` - 谓词改写与合取式工具函数
//!
//! ## 使用示例
//!
//! ```rust
//! use predicate_pullup::core::{Expression, SlotRef};
//! use predicate_pullup::query::optimizer::pull_up_predicates;
//! use predicate_pullup::query::planner::plan::PlanArena;
//!
//! let mut arena = PlanArena::new();
//! let a = SlotRef::new("a");
//! let scan = arena.add_scan("t", vec![a.clone()]);
//! let filter = arena
//!     .add_filter(scan, vec![Expression::greater_than(Expression::slot(a), Expression::literal(1))])
//!     .unwrap();
//!
//! let predicates = pull_up_predicates(&arena, filter);
//! assert_eq!(predicates.len(), 1);
//! ```

pub mod expression_utils;
pub mod predicate_propagation;
pub mod predicate_set;
pub mod pull_up_predicates;

// 重新导出主要类型
pub use predicate_propagation::PredicatePropagation;
pub use predicate_set::{PredicateSet, PredicateSetBuilder};
pub use pull_up_predicates::{pull_up_predicates, PredicatePullUp, PullUpStats};
