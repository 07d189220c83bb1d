//! 标识符
//!
//! ```text
//! Identifier = letter { letter | unicode_digit | "_" } .
//! letter     = "a" … "z" | "A" … "Z" | "_" .
//! ```
//!
//! 只识别 ASCII 数字，不支持 `unicode_digit`。

use tracing::trace;

use crate::charclass::{is_digit, is_letter};
use crate::RECOGNIZER;

/// 首字符为字母或 `_`，其余为字母、数字或 `_`
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    let matched = match chars.next() {
        Some(first) if is_letter(first) || first == '_' => {
            chars.all(|c| is_letter(c) || is_digit(c) || c == '_')
        }
        _ => false,
    };

    trace!(target: RECOGNIZER, input = s, matched, "identifier");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("name"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("var123"));
        assert!(is_valid_identifier("MY_CONST"));
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("x"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("123var"));
        assert!(!is_valid_identifier("my-var"));
        assert!(!is_valid_identifier("has space"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_identifier("café"));
        assert!(!is_valid_identifier("élan"));
        assert!(!is_valid_identifier("x١"));
    }
}
