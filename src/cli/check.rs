//! Execute jsque queries against JSON or YAML input

use super::{CliError, DocumentFormat, parse_document};
use crate::{
    CompileOptions, Operation, Query, Selector, Value, compile_with, evaluate, lexer::tokenize,
};

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// The jsque query to execute
    pub query: String,
    /// Document text
    pub input: Option<String>,
    /// Format of the document text
    pub from: DocumentFormat,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
    /// Compiler settings
    pub compile: CompileOptions,
}

/// Result of an eval operation
#[derive(Debug)]
pub enum QueryOutcome {
    /// Syntax validation passed
    SyntaxValid(Query),
    /// Query executed successfully
    Success(Value),
}

/// Execute a jsque eval operation on `options.input`
///
/// The query is compiled before the document is looked at, so a malformed
/// query is reported even when no input was given.
pub fn execute_query(options: &QueryOptions) -> Result<QueryOutcome, CliError> {
    execute_query_from(options, || Ok(options.input.clone()))
}

/// Execute a jsque eval operation, reading the document with `read_input`
///
/// `read_input` is only called once the query has compiled and only when it
/// is going to be evaluated: a syntax-only run or a malformed query never
/// touches stdin or the input file.
pub fn execute_query_from<F>(
    options: &QueryOptions,
    read_input: F,
) -> Result<QueryOutcome, CliError>
where
    F: FnOnce() -> Result<Option<String>, CliError>,
{
    let query = compile_with(&options.query, &options.compile)?;

    if options.syntax_only {
        return Ok(QueryOutcome::SyntaxValid(query));
    }

    let text = read_input()?.ok_or(CliError::NoInput)?;
    let document = parse_document(&text, options.from)?;

    Ok(QueryOutcome::Success(evaluate(&query, &document)))
}

/// Canonical text of a query followed by one line per operation.
///
/// ```text
/// @.evo[*]
///   0: sub evo
///   1: index * (fan-out)
/// ```
pub fn describe_query(query: &Query) -> String {
    let mut out = query.to_string();
    for (i, op) in query.operations().iter().enumerate() {
        let (kind, selector) = match op {
            Operation::Index(Selector::Literal(n)) => ("index", n.to_string()),
            Operation::Index(Selector::Wildcard) => ("index", "*".to_string()),
            Operation::Sub(Selector::Literal(key)) => ("sub", key.clone()),
            Operation::Sub(Selector::Wildcard) => ("sub", "*".to_string()),
        };
        out.push_str(&format!("\n  {}: {} {}", i, kind, selector));
        if op.is_fan_out() {
            out.push_str(" (fan-out)");
        }
    }
    out
}

/// One token per line, as the lexer sees the query.
pub fn render_tokens(query: &str) -> Result<String, CliError> {
    let tokens = tokenize(query)?;
    Ok(tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
