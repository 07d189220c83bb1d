//! EBNF Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all ebnf crates.

use serde::{Deserialize, Serialize};

/// 日志级别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, `silent` is treated as `error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" => Some(LogLevel::Error), // silent = only errors
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    #[default]
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 结果输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Log target groups, one per family of routines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Boolean-returning recognizers
    Recognizer,
    /// Record-returning parsers
    Parser,
    Cli,
}

impl Target {
    /// Get the string name of the target group
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Recognizer => "recognizer",
            Target::Parser => "parser",
            Target::Cli => "cli",
        }
    }

    /// Get the log target name for this group
    pub fn target(&self) -> String {
        format!("ebnf::{}", self.as_str())
    }
}

/// 日志配置，支持按目标覆盖全局级别
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub global: LogLevel,
    pub recognizer: Option<LogLevel>,
    pub parser: Option<LogLevel>,
}

impl LogConfig {
    /// Get log level for a specific target group
    pub fn level_for(&self, target: Target) -> LogLevel {
        match target {
            Target::Recognizer => self.recognizer.unwrap_or(self.global),
            Target::Parser => self.parser.unwrap_or(self.global),
            Target::Cli => self.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_default_log_config() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.global, LogLevel::Warn);
        assert_eq!(cfg.level_for(Target::Parser), LogLevel::Warn);
    }

    #[test]
    fn test_level_override() {
        let cfg = LogConfig {
            global: LogLevel::Info,
            parser: Some(LogLevel::Trace),
            ..Default::default()
        };
        assert_eq!(cfg.level_for(Target::Parser), LogLevel::Trace);
        assert_eq!(cfg.level_for(Target::Recognizer), LogLevel::Info);
        assert_eq!(cfg.level_for(Target::Cli), LogLevel::Info);
    }

    #[test]
    fn test_target_name() {
        assert_eq!(Target::Recognizer.as_str(), "recognizer");
        assert_eq!(Target::Parser.target(), "ebnf::parser");
    }

    #[test]
    fn test_formats_deserialize_lowercase() {
        let f: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, OutputFormat::Json);
        let l: LogFormat = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(l, LogFormat::Compact);
    }
}
