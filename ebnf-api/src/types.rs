//! 规则与求值结果类型

use std::fmt;
use std::str::FromStr;

use ebnf_core::{FileName, ForStatement, FunctionCall, SignedNumber};
use serde::Serialize;

use crate::error::EbnfError;

/// 可按名称选择的规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    Boolean,
    SignedNumber,
    Filename,
    Digits,
    Digit,
    Letter,
    Identifier,
    Integer,
    For,
    Call,
}

impl Rule {
    /// 全部规则，按演示顺序排列
    pub const ALL: [Rule; 10] = [
        Rule::Boolean,
        Rule::SignedNumber,
        Rule::Filename,
        Rule::Digits,
        Rule::Digit,
        Rule::Letter,
        Rule::Identifier,
        Rule::Integer,
        Rule::For,
        Rule::Call,
    ];

    /// Get the command line name of the rule
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Boolean => "boolean",
            Rule::SignedNumber => "signed-number",
            Rule::Filename => "filename",
            Rule::Digits => "digits",
            Rule::Digit => "digit",
            Rule::Letter => "letter",
            Rule::Identifier => "identifier",
            Rule::Integer => "integer",
            Rule::For => "for",
            Rule::Call => "call",
        }
    }

    /// 规则对应的 EBNF 产生式
    pub fn production(&self) -> &'static str {
        match self {
            Rule::Boolean => r#"Boolean = "true" | "false" ."#,
            Rule::SignedNumber => r#"SignedNumber = [ Sign ] Number . Sign = "+" | "-" ."#,
            Rule::Filename => r#"FileName = identifier [ "." identifier ] ."#,
            Rule::Digits => r#"Digits = { Digit } ."#,
            Rule::Digit => r#"Digit = "0" … "9" ."#,
            Rule::Letter => r#"Letter = "a" … "z" | "A" … "Z" ."#,
            Rule::Identifier => r#"Identifier = letter { letter | unicode_digit | "_" } ."#,
            Rule::Integer => r#"IntLit = DecimalLit | HexLit ."#,
            Rule::For => r#"ForStmt = "for" [ Condition | ForClause | RangeClause ] Block ."#,
            Rule::Call => r#"FunctionCall = identifier "(" [ ArgumentList ] ")" ."#,
        }
    }

    /// Whether the rule returns a record (and may fail) rather than a boolean
    pub fn is_parser(&self) -> bool {
        matches!(
            self,
            Rule::SignedNumber | Rule::Filename | Rule::For | Rule::Call
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = EbnfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == name)
            .ok_or_else(|| EbnfError::UnknownRule(s.to_string()))
    }
}

/// 求值结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// 识别器的布尔结果
    Matched(bool),
    SignedNumber(SignedNumber),
    FileName(FileName),
    ForStatement(ForStatement),
    FunctionCall(FunctionCall),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Matched(matched) => write!(f, "{matched}"),
            Outcome::SignedNumber(n) => write!(f, "{n}"),
            Outcome::FileName(file) => write!(f, "{file}"),
            Outcome::ForStatement(stmt) => write!(f, "{stmt}"),
            Outcome::FunctionCall(call) => write!(f, "{call}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(rule.as_str().parse::<Rule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_rule_parse_is_case_insensitive() {
        assert_eq!("Signed-Number".parse::<Rule>().unwrap(), Rule::SignedNumber);
        assert_eq!(" FOR ".parse::<Rule>().unwrap(), Rule::For);
    }

    #[test]
    fn test_unknown_rule() {
        let err = "regex".parse::<Rule>().unwrap_err();
        assert!(matches!(err, EbnfError::UnknownRule(name) if name == "regex"));
    }

    #[test]
    fn test_parser_rules() {
        let parsers: Vec<_> = Rule::ALL.into_iter().filter(Rule::is_parser).collect();
        assert_eq!(
            parsers,
            vec![Rule::SignedNumber, Rule::Filename, Rule::For, Rule::Call]
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Matched(true).to_string(), "true");
        let call = FunctionCall {
            name: "f".to_string(),
            arguments: vec!["x".to_string()],
        };
        assert_eq!(Outcome::FunctionCall(call).to_string(), "{Name:f Arguments:[x]}");
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(Outcome::Matched(false)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "matched", "value": false }));
    }
}
