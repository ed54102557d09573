//! Value 模块 - 字面量值类型系统
//!
//! 此模块提供谓词推导中使用的字面量值类型，包括：
//! - 核心类型定义 (`types.rs`)
//! - 比较与哈希逻辑 (`comparison.rs`)
//! - 类型转换 (`conversion.rs`)

pub mod comparison;
pub mod conversion;
pub mod types;

pub use types::*;
