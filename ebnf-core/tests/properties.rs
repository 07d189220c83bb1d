//! 集成测试 - 各识别器与解析器的可测性质

use ebnf_core::*;

#[test]
fn test_boolean_iff_exact_literal() {
    let inputs = ["true", "false", "TRUE", "False", "true ", " false", "", "t", "truefalse"];
    for s in inputs {
        assert_eq!(is_boolean(s), s == "true" || s == "false", "input: {s:?}");
    }
}

#[test]
fn test_digit_runs() {
    assert!(is_digits(""));
    assert!(is_digits("12345"));
    assert!(!is_digits("12a45"));
}

#[test]
fn test_identifiers() {
    for s in ["name", "_private", "var123"] {
        assert!(is_valid_identifier(s), "expected valid: {s:?}");
    }
    for s in ["123var", "my-var", ""] {
        assert!(!is_valid_identifier(s), "expected invalid: {s:?}");
    }
}

#[test]
fn test_integer_literals() {
    for s in ["0", "123", "0xFF", "0xDEADBEEF"] {
        assert!(is_valid_integer(s), "expected valid: {s:?}");
    }
    for s in ["00", "0x"] {
        assert!(!is_valid_integer(s), "expected invalid: {s:?}");
    }
}

#[test]
fn test_filenames() {
    assert_eq!(
        parse_filename("document.txt"),
        FileName {
            name: "document".to_string(),
            extension: "txt".to_string()
        }
    );
    assert_eq!(
        parse_filename("README"),
        FileName {
            name: "README".to_string(),
            extension: String::new()
        }
    );
}

#[test]
fn test_for_statements() {
    let kind = |s: &str| parse_for_statement(s).map(|stmt| stmt.kind);
    assert_eq!(kind("for x < 10 { }"), Ok(ForKind::Condition));
    assert_eq!(kind("for i := 0; i < 10; i++ { }"), Ok(ForKind::Clause));
    assert_eq!(kind("for { }"), Ok(ForKind::Infinite));
    assert!(matches!(
        parse_for_statement("loop { }"),
        Err(FormatError::NotForStatement { .. })
    ));
}

#[test]
fn test_function_calls() {
    let println = parse_function_call("fmt.Println()").unwrap();
    assert_eq!(println.name, "fmt.Println");
    assert!(println.arguments.is_empty());

    let add = parse_function_call("add(2, 3)").unwrap();
    assert_eq!(add.name, "add");
    assert_eq!(add.arguments, vec!["2", "3"]);

    assert!(matches!(
        parse_function_call("add"),
        Err(FormatError::MissingOpenParen { .. })
    ));
}

#[test]
fn test_signed_numbers() {
    let n = parse_signed_number("+42").unwrap();
    assert_eq!((n.sign, n.number), (Sign::Positive, 42));
    let n = parse_signed_number("-15").unwrap();
    assert_eq!((n.sign, n.number), (Sign::Negative, 15));
    let n = parse_signed_number("99").unwrap();
    assert_eq!((n.sign, n.number), (Sign::Positive, 99));
}

#[test]
fn test_filename_reparse_is_stable() {
    for s in ["document.txt", "README", "a.b", ".hidden", "archive.tar.gz"] {
        let file = parse_filename(s);
        let rebuilt = if file.extension.is_empty() {
            file.name.clone()
        } else {
            format!("{}.{}", file.name, file.extension)
        };
        assert_eq!(parse_filename(&rebuilt), file, "input: {s:?}");
    }
}

#[test]
fn test_call_reparse_is_stable() {
    for s in ["fmt.Println()", "add(2, 3)", " max( a , b ) "] {
        let call = parse_function_call(s).unwrap();
        let rebuilt = format!("{}({})", call.name, call.arguments.join(", "));
        assert_eq!(parse_function_call(&rebuilt), Ok(call), "input: {s:?}");
    }
}

#[test]
fn test_for_reparse_is_stable() {
    for s in ["for x < 10 { }", "for i := 0; i < 10; i++ { }", "for { }", "for range ch { }"] {
        let stmt = parse_for_statement(s).unwrap();
        let rebuilt = format!("for {}", stmt.content);
        assert_eq!(parse_for_statement(&rebuilt), Ok(stmt), "input: {s:?}");
    }
}

#[test]
fn test_records_serialize() {
    let stmt = parse_for_statement("for range ch { }").unwrap();
    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(json["kind"], "range");
    assert_eq!(json["content"], "range ch { }");

    let n = parse_signed_number("-3").unwrap();
    assert_eq!(serde_json::to_string(&n).unwrap(), r#"{"sign":"negative","number":3}"#);
}

#[test]
fn test_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let call = parse_function_call(&format!("f({i}, {i})")).unwrap();
                call.arguments.len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
