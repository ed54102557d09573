// Query module
//
// This module provides the relational side of query processing:
// - The plan tree (arena of immutable operator nodes)
// - Optimizer analyses over that tree (predicate derivation and inference)

// Sub-modules
pub mod optimizer;
pub mod planner;

// Re-export commonly used types for convenience
pub use optimizer::{pull_up_predicates, PredicatePullUp, PredicateSet};
pub use planner::plan::{PlanArena, PlanNodeEnum, PlanNodeId};
