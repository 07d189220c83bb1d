//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// 格式错误（结构化）
pub use ebnf_core::FormatError;

use crate::types::Rule;

/// EBNF notes 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EbnfError {
    /// 某个解析器拒绝了输入
    #[error("{rule}: {source}")]
    Format {
        rule: Rule,
        #[source]
        source: FormatError,
    },

    /// 未知的规则名
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// 配置错误
    #[error("config error: {0}")]
    Config(String),
}

impl EbnfError {
    /// 出错的规则（如果有）
    pub fn rule(&self) -> Option<Rule> {
        match self {
            EbnfError::Format { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    /// 错误类型名（可用于程序化处理）
    pub fn kind(&self) -> &'static str {
        match self {
            EbnfError::Format { source, .. } => source.kind(),
            EbnfError::UnknownRule(_) => "UnknownRule",
            EbnfError::Config(_) => "Config",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            EbnfError::Format { rule, source } => ErrorReport {
                rule: Some(rule.as_str()),
                error_kind: source.kind().to_string(),
                input: Some(source.input().to_string()),
                message: source.to_string(),
            },
            EbnfError::UnknownRule(name) => ErrorReport {
                rule: None,
                error_kind: self.kind().to_string(),
                input: Some(name.clone()),
                message: self.to_string(),
            },
            EbnfError::Config(msg) => ErrorReport {
                rule: None,
                error_kind: self.kind().to_string(),
                input: None,
                message: msg.clone(),
            },
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 出错的规则名
    pub rule: Option<&'static str>,
    /// 错误类型
    pub error_kind: String,
    /// 被拒绝的输入
    pub input: Option<String>,
    /// 人类可读的错误消息
    pub message: String,
}

impl fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Some(rule) => write!(f, "[{}] {}: {}", rule, self.error_kind, self.message),
            None => write!(f, "{}: {}", self.error_kind, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
