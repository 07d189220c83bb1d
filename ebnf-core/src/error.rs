//! 格式错误
//!
//! 解析器无法分类或分解输入时返回的错误。

use thiserror::Error;

/// Malformed input for one of the record parsers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// 符号之后没有可读取的十进制整数
    #[error("expected integer in '{input}'")]
    InvalidNumber { input: String },

    /// 输入不以 `for` 关键字开头
    #[error("not a for statement: '{input}'")]
    NotForStatement { input: String },

    /// 缺少左括号
    #[error("no opening parenthesis in '{input}'")]
    MissingOpenParen { input: String },

    /// 左括号之后缺少右括号
    #[error("no closing parenthesis in '{input}'")]
    MissingCloseParen { input: String },
}

impl FormatError {
    /// 出错的原始输入
    pub fn input(&self) -> &str {
        match self {
            FormatError::InvalidNumber { input }
            | FormatError::NotForStatement { input }
            | FormatError::MissingOpenParen { input }
            | FormatError::MissingCloseParen { input } => input,
        }
    }

    /// 错误类型名（可用于程序化处理）
    pub fn kind(&self) -> &'static str {
        match self {
            FormatError::InvalidNumber { .. } => "InvalidNumber",
            FormatError::NotForStatement { .. } => "NotForStatement",
            FormatError::MissingOpenParen { .. } => "MissingOpenParen",
            FormatError::MissingCloseParen { .. } => "MissingCloseParen",
        }
    }
}

/// 解析结果类型
pub type ParseResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormatError::MissingOpenParen {
            input: "add".to_string(),
        };
        assert_eq!(err.to_string(), "no opening parenthesis in 'add'");
    }

    #[test]
    fn test_error_input_and_kind() {
        let err = FormatError::NotForStatement {
            input: "while x".to_string(),
        };
        assert_eq!(err.input(), "while x");
        assert_eq!(err.kind(), "NotForStatement");
    }
}
