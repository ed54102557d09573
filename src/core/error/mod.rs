//! 统一错误处理
//!
//! 谓词推导本身是全函数，不会失败；可失败的操作只存在于边界：
//! - 计划构建（`PlanError`）：引用不存在的子节点、集合操作列数不一致等
//! - 配置加载（见 `crate::config::ConfigError`）
//! - 日志初始化（见 `crate::utils::logging::LoggingError`）

pub mod plan;

pub use plan::{PlanError, PlanResult};
