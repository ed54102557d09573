//! 操作符类型定义
//!
//! 定义谓词表达式中使用的比较操作符与逻辑连接词

use serde::{Deserialize, Serialize};
use std::fmt;

/// 比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// 等于 (=)
    Equal,
    /// NULL 安全等于 (<=>)
    NullSafeEqual,
    /// 不等于 (<>)
    NotEqual,
    /// 小于 (<)
    LessThan,
    /// 小于等于 (<=)
    LessThanOrEqual,
    /// 大于 (>)
    GreaterThan,
    /// 大于等于 (>=)
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    /// 获取操作符的名称
    pub fn name(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NullSafeEqual => "<=>",
            ComparisonOperator::NotEqual => "<>",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
        }
    }

    /// 交换左右操作数后的等价操作符
    ///
    /// `a < b` 等价于 `b > a`
    pub fn commute(&self) -> Self {
        match self {
            ComparisonOperator::LessThan => ComparisonOperator::GreaterThan,
            ComparisonOperator::LessThanOrEqual => ComparisonOperator::GreaterThanOrEqual,
            ComparisonOperator::GreaterThan => ComparisonOperator::LessThan,
            ComparisonOperator::GreaterThanOrEqual => ComparisonOperator::LessThanOrEqual,
            other => *other,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 逻辑连接词
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectiveKind {
    And,
    Or,
}

impl ConnectiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            ConnectiveKind::And => "AND",
            ConnectiveKind::Or => "OR",
        }
    }
}

impl fmt::Display for ConnectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
