use std::fmt;

/// Lexical token of the query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Root document marker
    ///
    /// Must appear exactly once, at the start of a query.
    ///
    /// # Examples
    /// ```text
    /// @
    /// @.name
    /// ```
    At,

    /// Key of a mapping
    ///
    /// Must start with a letter or underscore, then runs until `.`, `[`,
    /// `]`, `*`, `@` or whitespace.
    ///
    /// # Examples
    /// ```text
    /// name
    /// event_type
    /// _internal
    /// first-name
    /// ```
    Identifier(String),

    /// Sequence position, possibly negative
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 42
    /// -1
    /// ```
    Integer(i64),

    /// Sub operator, followed by an identifier or `*`
    Dot,

    /// Wildcard selector
    ///
    /// # Examples
    /// ```text
    /// [*]
    /// .*
    /// ```
    Star,

    /// Left bracket of an index operation
    LBracket,

    /// Right bracket
    RBracket,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::At => write!(f, "'@'"),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::Integer(n) => write!(f, "integer {}", n),
            Token::Dot => write!(f, "'.'"),
            Token::Star => write!(f, "'*'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
