//! 字符范围 (`…`)
//!
//! ```text
//! Digit  = "0" … "9" .
//! Letter = "a" … "z" | "A" … "Z" .
//! ```

/// `'0'..='9'`
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `'a'..='z' | 'A'..='Z'`
pub fn is_letter(c: char) -> bool {
    is_lower_letter(c) || is_upper_letter(c)
}

pub fn is_lower_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_upper_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// 十六进制数字，大小写均可
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
