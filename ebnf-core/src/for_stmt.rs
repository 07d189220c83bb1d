//! For 语句分类
//!
//! ```text
//! ForStmt = "for" [ Condition | ForClause | RangeClause ] Block .
//! ```
//!
//! 按有序规则表选择第一个匹配的分支：内容里同时出现 `range` 和 `;`
//! 时归为 [`ForKind::Clause`]。第一个 `{` 之前没有循环头时为
//! [`ForKind::Infinite`]。

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FormatError, ParseResult};
use crate::PARSER;

const KEYWORD: &str = "for";

/// 循环形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForKind {
    /// `for { ... }`
    Infinite,
    /// `for i := 0; i < 10; i++ { ... }`
    Clause,
    /// `for x < 10 { ... }`
    Condition,
    /// `for i, v := range list { ... }`
    Range,
}

impl ForKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForKind::Infinite => "infinite",
            ForKind::Clause => "clause",
            ForKind::Condition => "condition",
            ForKind::Range => "range",
        }
    }
}

impl fmt::Display for ForKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分类结果与关键字之后的原始文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForStatement {
    pub kind: ForKind,
    pub content: String,
}

impl fmt::Display for ForStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Kind:{} Content:{}}}", self.kind, self.content)
    }
}

/// 有序规则表，先匹配者胜
const RULES: &[(ForKind, fn(&str) -> bool)] = &[
    (ForKind::Infinite, has_empty_header),
    (ForKind::Clause, has_clause_token),
    (ForKind::Range, starts_with_range),
];

/// 没有规则命中时的分支
const FALLBACK: ForKind = ForKind::Condition;

/// 第一个 `{` 之前没有文本
fn has_empty_header(content: &str) -> bool {
    content.find('{').map_or(content, |open| &content[..open]).trim().is_empty()
}

fn has_clause_token(content: &str) -> bool {
    content.contains(":=") || content.contains(';')
}

fn starts_with_range(content: &str) -> bool {
    content.starts_with("range")
}

/// 按规则表对关键字之后的内容分类
pub fn classify(content: &str) -> ForKind {
    RULES
        .iter()
        .find(|(_, matches)| matches(content))
        .map_or(FALLBACK, |(kind, _)| *kind)
}

/// Classify a `for` statement.
///
/// The keyword must open the trimmed input and is matched case-sensitively.
/// There is no word-boundary check, so `"format"` is a condition loop over
/// `"mat"`.
pub fn parse_for_statement(stmt: &str) -> ParseResult<ForStatement> {
    let content = stmt
        .trim()
        .strip_prefix(KEYWORD)
        .ok_or_else(|| FormatError::NotForStatement {
            input: stmt.to_string(),
        })?
        .trim();

    let kind = classify(content);
    debug!(target: PARSER, stmt, %kind, "for statement");

    Ok(ForStatement {
        kind,
        content: content.to_string(),
    })
}
