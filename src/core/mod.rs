pub mod error;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{PlanError, PlanResult};

// 核心数据类型
pub use value::*;

// 表达式系统类型
pub use types::expression::Expression;
pub use types::operators::{ComparisonOperator, ConnectiveKind};
pub use types::slot::{SlotId, SlotRef};
