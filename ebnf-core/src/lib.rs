//! EBNF notes core - grammar notation mapped onto string recognizers
//!
//! 每个 EBNF 记法对应一个独立的纯函数：
//!
//! | 记法 | 函数 |
//! |------|------|
//! | 选择 `\|` | [`is_boolean`] |
//! | 分组 `()` | [`parse_signed_number`] |
//! | 可选 `[]` | [`parse_filename`] |
//! | 重复 `{}` | [`is_digits`] |
//! | 范围 `…` | [`is_digit`], [`is_letter`] |
//!
//! 组合示例：[`is_valid_identifier`], [`is_valid_integer`],
//! [`parse_for_statement`], [`parse_function_call`]。
//!
//! # Quick Start
//!
//! ```
//! use ebnf_core::{parse_function_call, is_valid_identifier};
//!
//! let call = parse_function_call("add(2, 3)").unwrap();
//! assert_eq!(call.name, "add");
//! assert!(call.arguments.iter().all(|a| !a.is_empty()));
//! assert!(is_valid_identifier(&call.name));
//! ```

pub mod call;
pub mod charclass;
pub mod error;
pub mod filename;
pub mod for_stmt;
pub mod identifier;
pub mod literal;
pub mod number;

/// 识别器日志目标
pub(crate) const RECOGNIZER: &str = "ebnf::recognizer";
/// 解析器日志目标
pub(crate) const PARSER: &str = "ebnf::parser";

// 重导出常用类型
pub use call::{parse_function_call, FunctionCall};
pub use charclass::{is_digit, is_letter, is_lower_letter, is_upper_letter};
pub use error::{FormatError, ParseResult};
pub use filename::{parse_filename, FileName};
pub use for_stmt::{parse_for_statement, ForKind, ForStatement};
pub use identifier::is_valid_identifier;
pub use literal::{is_boolean, is_digits, is_valid_decimal, is_valid_hex, is_valid_integer};
pub use number::{parse_signed_number, Sign, SignedNumber};
