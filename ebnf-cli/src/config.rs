//! CLI 配置
//!
//! 配置文件（默认 `ebnf.json`）与命令行参数合并为 [`Settings`]，
//! 命令行参数优先。

use std::path::{Path, PathBuf};

use ebnf_api::EbnfError;
use ebnf_config::{LogConfig, LogFormat, LogLevel, OutputFormat};
use serde::Deserialize;

/// 默认配置文件名
pub const DEFAULT_CONFIG: &str = "ebnf.json";

/// ebnf.json 结构，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
    /// 识别器日志级别（覆盖 log_level）
    pub recognizer_log_level: Option<String>,
    /// 解析器日志级别（覆盖 log_level）
    pub parser_log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    /// 日志文件，同时输出到 stderr 和文件
    pub log_file: Option<PathBuf>,
    /// check 命令的结果格式
    pub format: Option<OutputFormat>,
    /// 演示中追加的自定义样例
    pub samples: Vec<Sample>,
}

/// 自定义样例
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sample {
    pub rule: String,
    pub input: String,
}

/// 命令行中可覆盖配置文件的部分
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub log_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// 合并后的运行配置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub log: LogConfig,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub samples: Vec<Sample>,
}

impl Settings {
    /// Merge a config file with command line overrides
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self, EbnfError> {
        let global = overrides
            .log_level
            .or(file.log_level)
            .map(|name| parse_level(&name))
            .transpose()?
            .unwrap_or_default();

        let log = LogConfig {
            global,
            recognizer: file
                .recognizer_log_level
                .map(|name| parse_level(&name))
                .transpose()?,
            parser: file
                .parser_log_level
                .map(|name| parse_level(&name))
                .transpose()?,
        };

        Ok(Self {
            log,
            log_format: overrides.log_format.or(file.log_format).unwrap_or_default(),
            log_file: overrides.log_file.or(file.log_file),
            format: overrides.format.or(file.format).unwrap_or_default(),
            samples: file.samples,
        })
    }
}

fn parse_level(name: &str) -> Result<LogLevel, EbnfError> {
    LogLevel::parse(name).ok_or_else(|| EbnfError::Config(format!("unknown log level '{name}'")))
}

/// Read the config file.
///
/// An explicitly given path must exist. Without one, `ebnf.json` in the
/// current directory is used when present.
pub fn load(path: Option<&Path>) -> Result<ConfigFile, EbnfError> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if !default.exists() {
                return Ok(ConfigFile::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| EbnfError::Config(format!("cannot read '{}': {}", path.display(), e)))?;
    parse(&content)
        .map_err(|e| EbnfError::Config(format!("cannot parse '{}': {}", path.display(), e)))
}

/// 解析配置文件内容
pub fn parse(content: &str) -> serde_json::Result<ConfigFile> {
    serde_json::from_str(content)
}
