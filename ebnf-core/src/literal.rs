//! 字面量识别器
//!
//! ```text
//! Boolean    = "true" | "false" .
//! Digits     = { Digit } .
//! IntLit     = DecimalLit | HexLit .
//! DecimalLit = ( "1" … "9" ) { DecimalDigit } | "0" .
//! HexLit     = "0" ( "x" | "X" ) HexDigit { HexDigit } .
//! ```

use tracing::trace;

use crate::charclass::{is_digit, is_hex_digit};
use crate::RECOGNIZER;

/// 选择 (`|`)：恰好是 `true` 或 `false`，区分大小写
pub fn is_boolean(s: &str) -> bool {
    let matched = matches!(s, "true" | "false");
    trace!(target: RECOGNIZER, input = s, matched, "boolean");
    matched
}

/// 重复 (`{}`)：零个或多个 ASCII 数字，空串也匹配
pub fn is_digits(s: &str) -> bool {
    let matched = s.chars().all(is_digit);
    trace!(target: RECOGNIZER, input = s, matched, "digits");
    matched
}

/// 十进制或十六进制整数字面量
pub fn is_valid_integer(s: &str) -> bool {
    let matched = is_valid_decimal(s) || is_valid_hex(s);
    trace!(target: RECOGNIZER, input = s, matched, "integer literal");
    matched
}

/// `"0"`, or a non-zero digit followed by any digits. `"00"` is rejected.
pub fn is_valid_decimal(s: &str) -> bool {
    if s == "0" {
        return true;
    }

    let mut chars = s.chars();
    match chars.next() {
        Some('1'..='9') => chars.all(is_digit),
        _ => false,
    }
}

/// `0x`/`0X` followed by at least one hex digit
pub fn is_valid_hex(s: &str) -> bool {
    let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => rest,
        None => return false,
    };
    !digits.is_empty() && digits.chars().all(is_hex_digit)
}
