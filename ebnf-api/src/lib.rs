//! EBNF notes API - 统一的规则选择与求值接口
//!
//! 核心层的每个函数签名不同：识别器返回 `bool`，解析器返回记录或
//! [`FormatError`]。这里按 [`Rule`] 统一调度，得到可序列化的 [`Outcome`]。
//!
//! # Example
//! ```
//! use ebnf_api::{evaluate, Outcome, Rule};
//!
//! let outcome = evaluate(Rule::Integer, "0xFF").unwrap();
//! assert_eq!(outcome, Outcome::Matched(true));
//! ```

pub mod error;
pub mod types;

use tracing::info;

pub use ebnf_core;
pub use error::{EbnfError, ErrorReport, FormatError};
pub use types::{Outcome, Rule};

/// 对输入求值一条规则
pub fn evaluate(rule: Rule, input: &str) -> Result<Outcome, EbnfError> {
    let outcome = match rule {
        Rule::Boolean => Outcome::Matched(ebnf_core::is_boolean(input)),
        Rule::Digits => Outcome::Matched(ebnf_core::is_digits(input)),
        Rule::Digit => Outcome::Matched(single_char(input).is_some_and(ebnf_core::is_digit)),
        Rule::Letter => Outcome::Matched(single_char(input).is_some_and(ebnf_core::is_letter)),
        Rule::Identifier => Outcome::Matched(ebnf_core::is_valid_identifier(input)),
        Rule::Integer => Outcome::Matched(ebnf_core::is_valid_integer(input)),
        Rule::Filename => Outcome::FileName(ebnf_core::parse_filename(input)),
        Rule::SignedNumber => {
            Outcome::SignedNumber(ebnf_core::parse_signed_number(input).map_err(with_rule(rule))?)
        }
        Rule::For => {
            Outcome::ForStatement(ebnf_core::parse_for_statement(input).map_err(with_rule(rule))?)
        }
        Rule::Call => {
            Outcome::FunctionCall(ebnf_core::parse_function_call(input).map_err(with_rule(rule))?)
        }
    };

    info!(target: "ebnf::api", %rule, input, %outcome, "evaluated");
    Ok(outcome)
}

/// 按名称选择规则并求值
pub fn evaluate_named(name: &str, input: &str) -> Result<Outcome, EbnfError> {
    evaluate(name.parse()?, input)
}

/// 字符范围规则只接受恰好一个字符
fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn with_rule(rule: Rule) -> impl Fn(FormatError) -> EbnfError {
    move |source| EbnfError::Format { rule, source }
}
