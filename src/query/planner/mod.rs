//! Planner module
//! Contains the relational plan tree consumed by the optimizer

pub mod plan;

pub use plan::{PlanArena, PlanNodeEnum, PlanNodeId};
