// 核心类型系统模块
//
// 包含谓词推导所需的核心类型定义：列标识（Slot）、表达式与操作符

pub mod expression;
pub mod operators;
pub mod slot;

pub use expression::Expression;
pub use operators::{ComparisonOperator, ConnectiveKind};
pub use slot::{SlotId, SlotRef};
