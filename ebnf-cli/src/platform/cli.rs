//! CLI 格式化输出
//!
//! 把求值结果和错误报告渲染为文本或 JSON。

use ebnf_api::{ErrorReport, Outcome, Rule};
use ebnf_config::OutputFormat;
use serde_json::json;

/// 渲染一次成功的求值
pub fn render_outcome(
    rule: Rule,
    input: &str,
    outcome: &Outcome,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{rule}({input:?}): {outcome}")),
        OutputFormat::Json => serde_json::to_string(&json!({
            "rule": rule,
            "input": input,
            "outcome": outcome,
        })),
    }
}

/// 渲染错误报告
pub fn render_report(report: &ErrorReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("❌ {report}")),
        OutputFormat::Json => report.to_json(),
    }
}

/// 列出全部规则、类别及其产生式
pub fn render_rules() -> String {
    let width = Rule::ALL
        .iter()
        .map(|rule| rule.as_str().len())
        .max()
        .unwrap_or_default();

    Rule::ALL
        .iter()
        .map(|rule| {
            let family = if rule.is_parser() { "parser" } else { "recognizer" };
            format!("{:<width$}  {:<10}  {}", rule.as_str(), family, rule.production())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
