//! CLI support for jsque
//!
//! Document loading and writing, and the commands behind the `jsque`
//! binary, exposed so other tools can embed them.

mod check;
mod convert;

pub use check::{
    QueryOptions, QueryOutcome, describe_query, execute_query, execute_query_from, render_tokens,
};
pub use convert::{DocumentFormat, json_to_value, parse_document, render_document, yaml_to_value};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] crate::SyntaxError),

    #[error("Syntax error: {0}")]
    Lex(#[from] crate::LexError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML infinities and NaN, which JSON number text cannot express
    #[error("Unsupported number: {0} is not a JSON number")]
    UnrepresentableNumber(String),

    /// A YAML mapping key that is itself a sequence or mapping
    #[error("Unsupported mapping key: {0} keys cannot be converted to strings")]
    UnsupportedKey(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input, --file or pipe a document to stdin.")]
    NoInput,
}
