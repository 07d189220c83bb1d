//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现按目标的日志控制。日志写到 stderr，
//! 不与 stdout 上的演示输出混在一起。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use ebnf_config::{LogConfig, LogFormat, LogLevel, Target};
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
    Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// 使用指定格式和日志配置初始化日志系统
///
/// 指定文件时同时输出到 stderr 和文件。
pub fn init(log_config: &LogConfig, format: LogFormat, file: Option<&Path>) -> io::Result<()> {
    let targets = build_targets(log_config);

    let mut layers: Vec<BoxedLayer> = vec![create_format_layer(format, io::stderr, true)
        .with_filter(targets.clone())
        .boxed()];

    if let Some(path) = file {
        let file_handle = OpenOptions::new().create(true).append(true).open(path)?;
        layers.push(
            create_format_layer(format, Mutex::new(file_handle), false)
                .with_filter(targets)
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).init();
    Ok(())
}

/// Build filter targets, one level per target group
pub fn build_targets(log_config: &LogConfig) -> Targets {
    let with_group = |targets: Targets, group: Target| {
        targets.with_target(group.target(), to_level(log_config.level_for(group)))
    };

    [Target::Recognizer, Target::Parser, Target::Cli]
        .into_iter()
        .fold(
            Targets::new().with_default(to_level(log_config.global)),
            with_group,
        )
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Create formatter layer based on format
fn create_format_layer<W>(format: LogFormat, make_writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_to_level() {
        assert_eq!(to_level(LogLevel::Warn), Level::WARN);
        assert_eq!(to_level(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_targets_use_overrides() {
        let cfg = LogConfig {
            global: LogLevel::Warn,
            parser: Some(LogLevel::Debug),
            ..Default::default()
        };
        let targets = build_targets(&cfg);
        assert!(targets.would_enable("ebnf::parser", &Level::DEBUG));
        assert!(!targets.would_enable("ebnf::recognizer", &Level::DEBUG));
        assert!(targets.would_enable("ebnf::recognizer", &Level::WARN));
        assert!(!targets.would_enable("other", &Level::INFO));
    }

    #[test]
    fn test_default_targets_are_quiet() {
        let targets = build_targets(&LogConfig::default());
        assert_eq!(targets.default_level(), Some(LevelFilter::WARN));
        assert!(!targets.would_enable("ebnf::api", &Level::INFO));
    }
}
