//! JSON and YAML output for query results.
//!
//! This module writes [`Value`]s as JSON text, either compact or
//! pretty-printed, or as block-style YAML. Mapping keys are written in their
//! stored order and numbers are written as the text they were read from, so a
//! document that was loaded from JSON and queried with `@` prints back the way
//! it came in (modulo whitespace).
//!
//! # Examples
//!
//! ```
//! use jsque::Value;
//! use jsque::output::{to_json, to_json_pretty};
//!
//! let value = Value::Sequence(vec![Value::from("a"), Value::Null]);
//!
//! assert_eq!(to_json(&value), r#"["a",null]"#);
//! assert_eq!(to_json_pretty(&value), "[\n  \"a\",\n  null\n]");
//! ```

use crate::value::{Mapping, Value};

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        let mut out = String::new();
        self.print_value(value, 0, &mut out);
        out
    }

    fn print_value(&self, value: &Value, indent: usize, out: &mut String) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(n.as_str()),
            Value::String(s) => write_json_string(s, out),
            Value::Sequence(items) => self.print_sequence(items, indent, out),
            Value::Mapping(entries) => self.print_mapping(entries, indent, out),
        }
    }

    fn print_sequence(&self, items: &[Value], indent: usize, out: &mut String) {
        if items.is_empty() {
            out.push_str("[]");
            return;
        }

        out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.newline(indent + 1, out);
            self.print_value(item, indent + 1, out);
        }
        self.newline(indent, out);
        out.push(']');
    }

    fn print_mapping(&self, entries: &Mapping, indent: usize, out: &mut String) {
        if entries.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push('{');
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.newline(indent + 1, out);
            write_json_string(key, out);
            out.push_str(if self.pretty { ": " } else { ":" });
            self.print_value(value, indent + 1, out);
        }
        self.newline(indent, out);
        out.push('}');
    }

    // No-op in compact mode.
    fn newline(&self, level: usize, out: &mut String) {
        if self.pretty {
            out.push('\n');
            out.push_str(&"  ".repeat(level));
        }
    }
}

fn write_json_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Block-style YAML writer.
///
/// Sequences nested in sequences share the dash line (`- - 1`), sequences
/// under a mapping key start on the next line at the key's indentation, and
/// empty containers are written inline as `[]` and `{}`.
pub struct YamlPrinter;

impl YamlPrinter {
    pub fn print(&self, value: &Value) -> String {
        self.lines(value).join("\n")
    }

    fn lines(&self, value: &Value) -> Vec<String> {
        match value {
            Value::Null => vec!["null".to_string()],
            Value::Bool(b) => vec![b.to_string()],
            Value::Number(n) => vec![n.as_str().to_string()],
            Value::String(s) => vec![yaml_string(s)],
            Value::Sequence(items) if items.is_empty() => vec!["[]".to_string()],
            Value::Mapping(entries) if entries.is_empty() => vec!["{}".to_string()],
            Value::Sequence(items) => {
                let mut lines = Vec::new();
                for item in items {
                    for (i, line) in self.lines(item).into_iter().enumerate() {
                        let prefix = if i == 0 { "- " } else { "  " };
                        lines.push(format!("{}{}", prefix, line));
                    }
                }
                lines
            }
            Value::Mapping(entries) => {
                let mut lines = Vec::new();
                for (key, value) in entries {
                    let key = yaml_string(key);
                    let nested = self.lines(value);
                    match value {
                        Value::Sequence(items) if !items.is_empty() => {
                            lines.push(format!("{}:", key));
                            lines.extend(nested);
                        }
                        Value::Mapping(entries) if !entries.is_empty() => {
                            lines.push(format!("{}:", key));
                            lines.extend(nested.into_iter().map(|line| format!("  {}", line)));
                        }
                        _ => lines.push(format!("{}: {}", key, nested.join(""))),
                    }
                }
                lines
            }
        }
    }
}

// serde_yaml decides between plain and quoted; multi-line strings fall back
// to a double-quoted scalar, whose escapes YAML shares with JSON.
fn yaml_string(s: &str) -> String {
    match serde_yaml::to_string(s) {
        Ok(text) if !text.trim_end_matches('\n').contains('\n') => {
            text.trim_end_matches('\n').to_string()
        }
        _ => {
            let mut out = String::new();
            write_json_string(s, &mut out);
            out
        }
    }
}

/// Converts a Value to compact JSON with no extra whitespace.
///
/// # Examples
///
/// ```
/// use jsque::Value;
/// use jsque::output::to_json;
///
/// let value: Value = [("name", Value::from("Alice")), ("age", Value::from(30))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(to_json(&value), r#"{"name":"Alice","age":30}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a Value to JSON with 2-space indentation, one element or entry
/// per line.
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}

/// Converts a Value to block-style YAML, without a trailing newline.
///
/// # Examples
///
/// ```
/// use jsque::{Number, Value};
/// use jsque::output::to_yaml;
///
/// let value: Value = [
///     ("price", Value::from("1.50".parse::<Number>().unwrap())),
///     ("tags", Value::Sequence(vec![Value::from("a"), Value::from("b")])),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(to_yaml(&value), "price: 1.50\ntags:\n- a\n- b");
/// ```
pub fn to_yaml(value: &Value) -> String {
    YamlPrinter.print(value)
}
