//! predicate-pullup - predicate derivation for a cost-based relational optimizer
//!
//! Given a tree of relational operators, this crate computes for every node
//! the set of boolean predicates guaranteed to hold on that node's output
//! rows, including predicates implied transitively by column equalities.
//!
//! - `core` - values, expressions, slots and plan construction errors
//! - `query::planner` - the plan arena and its operator nodes
//! - `query::optimizer` - predicate pull-up, inference and rewriting utilities
//! - `config` / `utils::logging` - TOML configuration and file logging

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

pub use query::optimizer::{pull_up_predicates, PredicatePullUp, PredicateSet};
pub use query::planner::plan::{PlanArena, PlanNodeId};
