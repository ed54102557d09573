//! 统一表达式类型定义
//!
//! 本模块定义了谓词推导中使用的表达式类型 `Expression`。
//!
//! ## 变体说明
//!
//! | 变体 | 用途 |
//! |------|------|
//! | `Literal` | 字面量值 |
//! | `Slot` | 列引用 |
//! | `Comparison` | 比较谓词 |
//! | `Connective` | AND / OR 连接 |
//! | `Not` | 逻辑非 |
//! | `InPredicate` | 集合成员谓词 |
//! | `Function` | 标量函数调用 |
//! | `Alias` | 命名表达式，产出一个新列 |
//!
//! ## 使用示例
//!
//! ```rust
//! use predicate_pullup::core::types::expression::Expression;
//! use predicate_pullup::core::types::SlotRef;
//!
//! let a = SlotRef::new("a");
//! let pred = Expression::equal_to(Expression::slot(a.clone()), Expression::literal(1));
//! assert!(pred.input_slots().contains(&a));
//! ```

mod constructors;
mod def;
mod display;
mod inspection;
mod traverse;

pub use def::Expression;
