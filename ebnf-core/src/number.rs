//! 分组 (`()`) 与可选符号
//!
//! ```text
//! Sign         = "+" | "-" .
//! SignedNumber = [ Sign ] Number .
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FormatError, ParseResult};
use crate::PARSER;

/// 符号，缺省为正
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn as_char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 带符号的数字
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedNumber {
    pub sign: Sign,
    pub number: i64,
}

impl fmt::Display for SignedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Sign:{} Number:{}}}", self.sign, self.number)
    }
}

/// Parse an optionally signed decimal number.
///
/// Only the first character is consulted for the sign. The remainder is read
/// the way a `%d` scan reads it: leading whitespace and one more sign are
/// accepted, and anything after the digit run is ignored. So `"+-5"` yields
/// `{Sign:+ Number:-5}` and `"42abc"` yields `{Sign:+ Number:42}`. A newline
/// before the digits is an error.
pub fn parse_signed_number(input: &str) -> ParseResult<SignedNumber> {
    let trimmed = input.trim();

    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let number = scan_decimal(rest).ok_or_else(|| FormatError::InvalidNumber {
        input: input.to_string(),
    })?;

    debug!(target: PARSER, input, %sign, number, "signed number");
    Ok(SignedNumber { sign, number })
}

/// 读取前导十进制整数（允许前导空白和一个符号）
///
/// 换行不算可跳过的空白，数字前出现换行即失败。
fn scan_decimal(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digit_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_len == 0 {
        return None;
    }
    // 溢出视为格式错误
    s[..sign_len + digit_len].parse().ok()
}
