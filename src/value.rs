use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::number::Number;

/// Keyed collection of a [`Value::Mapping`]. Keeps insertion order.
pub type Mapping = IndexMap<String, Value>;

/// A document node queried by jsque.
///
/// This type represents everything a parsed JSON or YAML document can hold.
/// Numbers keep the text they were read from, so input such as `1.50` or
/// `1e-30` is printed back unchanged.
///
/// # Ordering
///
/// Sequences are ordered. Mappings remember the order their keys were
/// inserted in, which is the order wildcard fan-out visits them and the order
/// they are written back out. Lookup and equality ignore that order.
///
/// # Examples
///
/// ```
/// use jsque::Value;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Bool(true);
/// let number = Value::from(42);
/// let string = Value::from("hello");
///
/// // Collections
/// let sequence = Value::Sequence(vec![Value::from(1), Value::from(2)]);
/// let mapping: Value = [("key", Value::from("value"))].into_iter().collect();
///
/// assert_eq!(mapping.as_mapping().map(|m| m.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or explicit null. Also the result of every evaluation miss.
    Null,

    /// true/false
    Bool(bool),

    /// Number, kept as its JSON text
    Number(Number),

    /// UTF-8 string
    String(String),

    /// Ordered list of values (homogeneous or heterogeneous)
    Sequence(Vec<Value>),

    /// String keys mapped to values
    Mapping(Mapping),
}

impl Value {
    /// Human-readable name of the variant, used in log and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<Decimal> for Value {
    fn from(n: Decimal) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Value::Mapping(entries)
    }
}

/// Collects key/value pairs into a [`Value::Mapping`], keeping their order.
/// A repeated key keeps its first position and its last value.
impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mapping_keeps_insertion_order() {
        let value: Value = [
            ("zeta", Value::from(1)),
            ("alpha", Value::from(2)),
            ("mid", Value::from(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = value
            .as_mapping()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn mapping_equality_ignores_order() {
        let a: Value = [("x", Value::from(1)), ("y", Value::from(2))]
            .into_iter()
            .collect();
        let b: Value = [("y", Value::from(2)), ("x", Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn number_keeps_textual_scale() {
        let n = Decimal::from_str("1.50").unwrap();
        assert_eq!(Value::from(n).as_number().unwrap().as_str(), "1.50");

        let big = Number::parse("123456789012345678901234567890").unwrap();
        assert_eq!(
            Value::from(big).as_number().map(Number::as_str),
            Some("123456789012345678901234567890")
        );
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(true).type_name(), "boolean");
        assert_eq!(Value::from(vec![]).type_name(), "sequence");
        assert_eq!(Value::from(Mapping::new()).type_name(), "mapping");
    }
}
