//! JSON/YAML <-> jsque Value conversion utilities

use super::CliError;
use crate::{Number, Value, output};

/// Text format of an input document or a rendered result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

/// Parse document text into a Value.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, CliError> {
    match format {
        DocumentFormat::Json => json_to_value(serde_json::from_str(text)?),
        DocumentFormat::Yaml => yaml_to_value(serde_yaml::from_str(text)?),
    }
}

/// Render a Value as document text, without a trailing newline.
pub fn render_document(
    value: &Value,
    format: DocumentFormat,
    pretty: bool,
) -> Result<String, CliError> {
    match format {
        DocumentFormat::Json if pretty => Ok(output::to_json_pretty(value)),
        DocumentFormat::Json => Ok(output::to_json(value)),
        DocumentFormat::Yaml => Ok(output::to_yaml(value)),
    }
}

/// Number from its document text. Anything outside the JSON number grammar
/// (`.inf`, `.nan`, hex) is rejected.
fn parse_number(text: &str) -> Result<Number, CliError> {
    Number::parse(text).map_err(|_| CliError::UnrepresentableNumber(text.to_string()))
}

/// Convert serde_json::Value to jsque Value
///
/// Key order and number text are kept as written, given serde_json's
/// `preserve_order` and `arbitrary_precision` features. Numbers of any
/// length or exponent load unchanged.
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    Ok(match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(parse_number(&n.to_string())?),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Sequence(
            arr.into_iter()
                .map(json_to_value)
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(obj) => Value::Mapping(
            obj.into_iter()
                .map(|(k, v)| Ok((k, json_to_value(v)?)))
                .collect::<Result<_, CliError>>()?,
        ),
    })
}

/// Convert serde_yaml::Value to jsque Value
///
/// Scalar mapping keys are stringified and tags are dropped. serde_yaml
/// resolves floats to f64, so a YAML float loads as its shortest f64 text.
pub fn yaml_to_value(v: serde_yaml::Value) -> Result<Value, CliError> {
    Ok(match v {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => Value::Number(parse_number(&n.to_string())?),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::Sequence(
            seq.into_iter()
                .map(yaml_to_value)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| Ok((yaml_key(k)?, yaml_to_value(v)?)))
                .collect::<Result<_, CliError>>()?,
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value)?,
    })
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, CliError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        serde_yaml::Value::Sequence(_) => Err(CliError::UnsupportedKey("sequence")),
        serde_yaml::Value::Mapping(_) => Err(CliError::UnsupportedKey("mapping")),
    }
}
