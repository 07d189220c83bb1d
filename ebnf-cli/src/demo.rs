//! 演示驱动
//!
//! 用固定样例调用每个识别器和解析器，输出人类可读的结果。
//! 固定样例都能成功，出错时只输出错误报告而不中断。

use std::fmt::Display;
use std::io::{self, Write};

use ebnf_api::ebnf_core::{
    is_boolean, is_digit, is_digits, is_letter, is_valid_identifier, is_valid_integer,
    parse_filename, parse_for_statement, parse_function_call, parse_signed_number,
};
use ebnf_api::evaluate_named;
use tracing::debug;

use crate::config::Sample;

const RULE_WIDTH: usize = 70;

/// 输出全部演示段落，`samples` 非空时追加自定义样例段落
pub fn run<W: Write>(out: &mut W, samples: &[Sample]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "EBNF NOTATION EXAMPLES")?;
    writeln!(out, "{rule}")?;

    section(out, "1. ALTERNATION (|) - Choose ONE option")?;
    for s in ["true", "false", "maybe"] {
        entry(out, &format!("is_boolean({s:?})"), is_boolean(s))?;
    }

    section(out, "2. GROUPING () - Group expressions")?;
    for s in ["+42", "-15", "99"] {
        result(out, &format!("parse_signed_number({s:?})"), parse_signed_number(s))?;
    }

    section(out, "3. OPTION [] - Zero or one occurrence")?;
    for s in ["document.txt", "README"] {
        entry(out, &format!("parse_filename({s:?})"), parse_filename(s))?;
    }

    section(out, "4. REPETITION {} - Zero or more occurrences")?;
    for s in ["", "12345", "12a45"] {
        entry(out, &format!("is_digits({s:?})"), is_digits(s))?;
    }

    section(out, "5. RANGE … - Set of characters")?;
    entry(out, "is_digit('5')", is_digit('5'))?;
    entry(out, "is_letter('A')", is_letter('A'))?;
    entry(out, "is_letter('1')", is_letter('1'))?;

    section(out, "6. COMPLETE EXAMPLE - Identifier")?;
    writeln!(out, "   Valid identifiers:")?;
    for s in ["name", "_private", "var123"] {
        entry(out, &format!("   is_valid_identifier({s:?})"), is_valid_identifier(s))?;
    }
    writeln!(out, "   Invalid identifiers:")?;
    for s in ["123var", "my-var"] {
        entry(out, &format!("   is_valid_identifier({s:?})"), is_valid_identifier(s))?;
    }

    section(out, "7. COMPLETE EXAMPLE - Integer Literal")?;
    for s in ["0", "123", "0xFF", "0xDEADBEEF"] {
        entry(out, &format!("is_valid_integer({s:?})"), is_valid_integer(s))?;
    }

    section(out, "8. COMPLETE EXAMPLE - For Statement")?;
    for s in ["for x < 10 { }", "for i := 0; i < 10; i++ { }", "for { }"] {
        let kind = parse_for_statement(s).map(|stmt| stmt.kind);
        result(out, &format!("parse_for_statement({s:?}).kind"), kind)?;
    }

    section(out, "9. COMPLETE EXAMPLE - Function Call")?;
    for s in ["fmt.Println()", "add(2, 3)"] {
        result(out, &format!("parse_function_call({s:?})"), parse_function_call(s))?;
    }

    if !samples.is_empty() {
        section(out, "10. CUSTOM SAMPLES")?;
        for sample in samples {
            debug!(target: "ebnf::cli", rule = %sample.rule, input = %sample.input, "custom sample");
            let label = format!("{}({:?})", sample.rule, sample.input);
            match evaluate_named(&sample.rule, &sample.input) {
                Ok(outcome) => entry(out, &label, outcome)?,
                Err(e) => entry(out, &label, format_args!("error: {}", e.to_report()))?,
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")
}

fn entry<W: Write>(out: &mut W, label: &str, value: impl Display) -> io::Result<()> {
    writeln!(out, "   {label}: {value}")
}

fn result<W: Write, T: Display, E: Display>(
    out: &mut W,
    label: &str,
    value: Result<T, E>,
) -> io::Result<()> {
    match value {
        Ok(value) => entry(out, label, value),
        Err(e) => entry(out, label, format_args!("error: {e}")),
    }
}
