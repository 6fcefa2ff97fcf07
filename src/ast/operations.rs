use std::fmt;

/// Argument of an operation: one literal child, or all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    /// A specific position (for [`Operation::Index`]) or key (for [`Operation::Sub`])
    Literal(T),

    /// Every child of the matching container kind
    Wildcard,
}

impl<T> Selector<T> {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Selector::Wildcard)
    }
}

/// One selection step of a compiled query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Positional selection from a sequence
    ///
    /// # Examples
    /// ```text
    /// [0]
    /// [-1]
    /// [*]
    /// ```
    Index(Selector<i64>),

    /// Keyed selection from a mapping
    ///
    /// # Examples
    /// ```text
    /// .name
    /// .*
    /// ```
    Sub(Selector<String>),
}

impl Operation {
    /// Selects position `i` of a sequence.
    pub fn index(i: i64) -> Self {
        Operation::Index(Selector::Literal(i))
    }

    /// Selects every element of a sequence.
    pub fn each_item() -> Self {
        Operation::Index(Selector::Wildcard)
    }

    /// Selects `key` of a mapping.
    pub fn sub(key: impl Into<String>) -> Self {
        Operation::Sub(Selector::Literal(key.into()))
    }

    /// Selects every value of a mapping.
    pub fn each_value() -> Self {
        Operation::Sub(Selector::Wildcard)
    }

    /// True for wildcard steps, which run the rest of the chain once per
    /// child and wrap the results in a sequence.
    pub fn is_fan_out(&self) -> bool {
        match self {
            Operation::Index(selector) => selector.is_wildcard(),
            Operation::Sub(selector) => selector.is_wildcard(),
        }
    }
}

/// Renders the operation the way it is written in query text.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Index(Selector::Literal(i)) => write!(f, "[{}]", i),
            Operation::Index(Selector::Wildcard) => write!(f, "[*]"),
            Operation::Sub(Selector::Literal(key)) => write!(f, ".{}", key),
            Operation::Sub(Selector::Wildcard) => write!(f, ".*"),
        }
    }
}
