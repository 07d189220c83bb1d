//! 函数调用
//!
//! ```text
//! FunctionCall = identifier "(" [ ArgumentList ] ")" .
//! ArgumentList = Argument { "," Argument } .
//! Argument     = Expression | identifier "=" Expression .
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FormatError, ParseResult};
use crate::PARSER;

/// 被调用者名称与参数列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<String>,
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Name:{} Arguments:[{}]}}",
            self.name,
            self.arguments.join(" ")
        )
    }
}

/// Split a call into its callee name and arguments.
///
/// Arguments are the text between the first `(` and the last `)`, split on
/// every `,`. Nested calls and quoted commas are not understood:
/// `"f(g(1, 2))"` has the arguments `["g(1", "2)"]`.
pub fn parse_function_call(call: &str) -> ParseResult<FunctionCall> {
    let open = call.find('(').ok_or_else(|| FormatError::MissingOpenParen {
        input: call.to_string(),
    })?;
    let name = call[..open].trim();

    // `)` 必须出现在第一个 `(` 之后
    let close = call
        .rfind(')')
        .filter(|&close| close > open)
        .ok_or_else(|| FormatError::MissingCloseParen {
            input: call.to_string(),
        })?;

    let arguments = split_arguments(&call[open + 1..close]);

    debug!(target: PARSER, call, name, count = arguments.len(), "function call");
    Ok(FunctionCall {
        name: name.to_string(),
        arguments,
    })
}

/// 空参数文本表示零个参数，而不是一个空串参数
fn split_arguments(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|arg| arg.trim().to_string()).collect()
}
