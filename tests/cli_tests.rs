use jsque::Value;
use std::cell::Cell;
use std::io;

use jsque::cli::{
    CliError, DocumentFormat, QueryOptions, QueryOutcome, describe_query, execute_query,
    execute_query_from, parse_document, render_document, render_tokens,
};
use jsque::{SyntaxError, compile};

fn run(query: &str, input: &str, from: DocumentFormat) -> Result<Value, CliError> {
    let options = QueryOptions {
        query: query.to_string(),
        input: Some(input.to_string()),
        from,
        ..Default::default()
    };
    match execute_query(&options)? {
        QueryOutcome::Success(value) => Ok(value),
        QueryOutcome::SyntaxValid(_) => panic!("expected evaluation"),
    }
}

fn run_json(query: &str, input: &str) -> String {
    let value = run(query, input, DocumentFormat::Json).unwrap();
    render_document(&value, DocumentFormat::Json, false).unwrap()
}

// ============================================================================
// JSON Round Trips
// ============================================================================

#[test]
fn test_json_scenarios() {
    let input = r#"[ {"name":"John"}, {"name":"Alice"} ]"#;
    assert_eq!(run_json("@[1].name", input), r#""Alice""#);
    assert_eq!(run_json("@[1].phone", input), "null");
    assert_eq!(run_json("@[*].name", input), r#"["John","Alice"]"#);
}

#[test]
fn test_json_key_order_preserved() {
    let input = r#"{"zeta": 1, "alpha": {"y": 2, "b": 3}}"#;
    assert_eq!(run_json("@", input), r#"{"zeta":1,"alpha":{"y":2,"b":3}}"#);
    assert_eq!(run_json("@.*", input), r#"[1,{"y":2,"b":3}]"#);
    assert_eq!(run_json("@.alpha.*", input), "[2,3]");
}

#[test]
fn test_json_number_text_preserved() {
    let input = r#"{"prices": [1.50, 0.10, 100, -3.250]}"#;
    assert_eq!(run_json("@.prices", input), "[1.50,0.10,100,-3.250]");
    assert_eq!(run_json("@.prices[-1]", input), "-3.250");
}

#[test]
fn test_json_exponent_numbers() {
    assert_eq!(run_json("@[0]", "[1e3]"), "1e3");
    assert_eq!(run_json("@", "[1.0e2, 2.5E-1, 1e+2]"), "[1.0e2,2.5E-1,1e+2]");
}

// ============================================================================
// Number Text Survives Load And Write
// ============================================================================

const EXACT_NUMBERS: [&str; 8] = [
    "0.12345678901234567890123456789012345",
    "3.141592653589793238462643383279502884",
    "1e-30",
    "1E400",
    "123456789012345678901234567890",
    "-0",
    "1.0e2",
    "-98765432109876543210.000000000000000000001",
];

#[test]
fn test_json_numbers_round_trip_as_written() {
    for text in EXACT_NUMBERS {
        let input = format!(r#"{{"n": {}}}"#, text);
        assert_eq!(run_json("@.n", &input), text, "Failed for: {}", text);
        assert_eq!(run_json("@", &input), format!(r#"{{"n":{}}}"#, text));
    }
}

#[test]
fn test_yaml_writer_keeps_number_text() {
    for text in EXACT_NUMBERS {
        let value = run("@", &format!("[{}]", text), DocumentFormat::Json).unwrap();
        assert_eq!(
            render_document(&value, DocumentFormat::Yaml, false).unwrap(),
            format!("- {}", text),
            "Failed for: {}",
            text
        );
    }
}

#[test]
fn test_pretty_json_keeps_number_text() {
    let value = run("@", "[1E400, -0]", DocumentFormat::Json).unwrap();
    assert_eq!(
        render_document(&value, DocumentFormat::Json, true).unwrap(),
        "[\n  1E400,\n  -0\n]"
    );
}

#[test]
fn test_yaml_integers_keep_text() {
    let value = run("@.n", "n: -42", DocumentFormat::Yaml).unwrap();
    assert_eq!(render_document(&value, DocumentFormat::Json, false).unwrap(), "-42");
}

#[test]
fn test_pretty_output() {
    let value = run("@[*].address.*", r#"[{"address":{"a":1,"b":2}}]"#, DocumentFormat::Json)
        .unwrap();
    assert_eq!(
        render_document(&value, DocumentFormat::Json, true).unwrap(),
        "[\n  [\n    1,\n    2\n  ]\n]"
    );
}

// ============================================================================
// YAML
// ============================================================================

#[test]
fn test_yaml_input() {
    let input = "
- name: John
  address:
    street: 1 Main St
    city: Springfield
- name: Alice
  address:
    city: Shelbyville
    street: 2 Elm St
";
    let value = run("@[*].address.*", input, DocumentFormat::Yaml).unwrap();
    assert_eq!(
        render_document(&value, DocumentFormat::Json, false).unwrap(),
        r#"[["1 Main St","Springfield"],["Shelbyville","2 Elm St"]]"#
    );
}

#[test]
fn test_yaml_output() {
    let value = run("@.*", r#"{"b": [1, 2], "a": "x"}"#, DocumentFormat::Json).unwrap();
    assert_eq!(
        render_document(&value, DocumentFormat::Yaml, false).unwrap(),
        "- - 1\n  - 2\n- x"
    );
}

#[test]
fn test_yaml_null_result() {
    let value = run("@.missing", "a: 1", DocumentFormat::Yaml).unwrap();
    assert_eq!(value, Value::Null);
    assert_eq!(
        render_document(&value, DocumentFormat::Yaml, false).unwrap(),
        "null"
    );
}

#[test]
fn test_yaml_nested_output() {
    let value = run(
        "@",
        r#"{"name": "x", "tags": ["a", "true"], "meta": {"n": 1.50}}"#,
        DocumentFormat::Json,
    )
    .unwrap();
    assert_eq!(
        render_document(&value, DocumentFormat::Yaml, false).unwrap(),
        "name: x\ntags:\n- a\n- 'true'\nmeta:\n  n: 1.50"
    );
}

#[test]
fn test_yaml_output_parses_back() {
    let input = r#"{"a": [{"b": "c: d"}, []], "e": {"f": null, "g": "- h"}}"#;
    let value = run("@", input, DocumentFormat::Json).unwrap();
    let yaml = render_document(&value, DocumentFormat::Yaml, false).unwrap();
    assert_eq!(parse_document(&yaml, DocumentFormat::Yaml).unwrap(), value);
}

#[test]
fn test_yaml_tags_dropped() {
    let value = parse_document("!thing {a: 1}", DocumentFormat::Yaml).unwrap();
    let expected: Value = [("a", Value::from(1))].into_iter().collect();
    assert_eq!(value, expected);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_syntax_error_before_input() {
    let options = QueryOptions {
        query: "@[".to_string(),
        input: None,
        ..Default::default()
    };
    assert!(matches!(
        execute_query(&options),
        Err(CliError::Syntax(SyntaxError::UnexpectedEnd { .. }))
    ));
}

#[test]
fn test_no_input() {
    let options = QueryOptions {
        query: "@".to_string(),
        ..Default::default()
    };
    assert!(matches!(execute_query(&options), Err(CliError::NoInput)));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        run("@", "{not json", DocumentFormat::Json),
        Err(CliError::Json(_))
    ));
}

#[test]
fn test_invalid_yaml() {
    assert!(matches!(
        run("@", "a: [1, 2", DocumentFormat::Yaml),
        Err(CliError::Yaml(_))
    ));
}

#[test]
fn test_error_display() {
    let err = CliError::from(compile("@[").unwrap_err());
    assert_eq!(
        err.to_string(),
        "Syntax error: unexpected end of query, expected an integer or '*'"
    );
}

// ============================================================================
// Syntax-only, Check And Tokens
// ============================================================================

#[test]
fn test_syntax_only() {
    let options = QueryOptions {
        query: " @ . evo [*] ".to_string(),
        syntax_only: true,
        ..Default::default()
    };
    match execute_query(&options).unwrap() {
        QueryOutcome::SyntaxValid(query) => assert_eq!(query.to_string(), "@.evo[*]"),
        QueryOutcome::Success(_) => panic!("expected syntax validation only"),
    }
}

#[test]
fn test_syntax_only_does_not_read_input() {
    let options = QueryOptions {
        query: "@.a".to_string(),
        syntax_only: true,
        ..Default::default()
    };
    let read = Cell::new(false);
    let outcome = execute_query_from(&options, || {
        read.set(true);
        Ok(Some("{}".to_string()))
    });
    assert!(matches!(outcome, Ok(QueryOutcome::SyntaxValid(_))));
    assert!(!read.get());
}

#[test]
fn test_bad_query_reported_before_input_is_read() {
    let options = QueryOptions {
        query: "@[".to_string(),
        ..Default::default()
    };
    let read = Cell::new(false);
    let outcome = execute_query_from(&options, || {
        read.set(true);
        Err(CliError::Io(io::Error::new(io::ErrorKind::NotFound, "missing.json")))
    });
    assert!(matches!(outcome, Err(CliError::Syntax(_))));
    assert!(!read.get());
}

#[test]
fn test_input_read_once_query_compiles() {
    let options = QueryOptions {
        query: "@.a".to_string(),
        ..Default::default()
    };
    let read = Cell::new(0);
    let outcome = execute_query_from(&options, || {
        read.set(read.get() + 1);
        Ok(Some(r#"{"a": 1}"#.to_string()))
    });
    assert!(matches!(outcome, Ok(QueryOutcome::Success(v)) if v == Value::from(1)));
    assert_eq!(read.get(), 1);

    let missing = execute_query_from(&options, || {
        Err(CliError::Io(io::Error::new(io::ErrorKind::NotFound, "missing.json")))
    });
    assert!(matches!(missing, Err(CliError::Io(_))));
    assert!(matches!(execute_query_from(&options, || Ok(None)), Err(CliError::NoInput)));
}

#[test]
fn test_describe_query() {
    let query = compile("@.evo[*].*[-1]").unwrap();
    assert_eq!(
        describe_query(&query),
        "@.evo[*].*[-1]\n  0: sub evo\n  1: index * (fan-out)\n  2: sub * (fan-out)\n  3: index -1"
    );
    assert_eq!(describe_query(&compile("@").unwrap()), "@");
    assert_eq!(
        describe_query(&compile("@.first-name").unwrap()),
        "@.first-name\n  0: sub first-name"
    );
}

#[test]
fn test_render_tokens() {
    assert_eq!(
        render_tokens("@[*].x").unwrap(),
        "'@'\n'['\n'*'\n']'\n'.'\nidentifier 'x'"
    );
    assert!(matches!(render_tokens("@?"), Err(CliError::Lex(_))));
}
