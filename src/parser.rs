use thiserror::Error;

use crate::{
    ast::{Operation, Query, Selector, Token},
    lexer::{LexError, Lexer, Position},
};

/// Longest operation chain [`compile`] accepts unless configured otherwise.
pub const DEFAULT_MAX_OPERATIONS: usize = 1024;

/// Query text that does not match the grammar.
///
/// No partial query is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("query must start with '@', found {found} at position {position}")]
    MissingRoot { found: Token, position: Position },

    #[error("unexpected {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        found: Token,
        expected: &'static str,
        position: Position,
    },

    #[error("unexpected end of query, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("query has more than {limit} operations")]
    TooManyOperations { limit: usize },
}

/// Compiler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Upper bound on the number of operations after the root. Evaluation
    /// recurses once per operation, so this also bounds stack depth.
    pub max_operations: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            max_operations: DEFAULT_MAX_OPERATIONS,
        }
    }
}

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    current_position: Position,
    options: CompileOptions,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Result<Self, SyntaxError> {
        Self::with_options(lexer, CompileOptions::default())
    }

    pub fn with_options(mut lexer: Lexer, options: CompileOptions) -> Result<Self, SyntaxError> {
        let current_token = lexer.next_token()?;
        let current_position = lexer.token_start();
        Ok(Parser {
            lexer,
            current_token,
            current_position,
            options,
        })
    }

    fn advance(&mut self) -> Result<(), SyntaxError> {
        self.current_token = self.lexer.next_token()?;
        self.current_position = self.lexer.token_start();
        Ok(())
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        match &self.current_token {
            Token::Eof => SyntaxError::UnexpectedEnd { expected },
            found => SyntaxError::UnexpectedToken {
                found: found.clone(),
                expected,
                position: self.current_position,
            },
        }
    }

    /// Parse a complete query: `@` followed by operations up to end of input.
    pub fn parse_query(&mut self) -> Result<Query, SyntaxError> {
        if self.current_token != Token::At {
            return Err(SyntaxError::MissingRoot {
                found: self.current_token.clone(),
                position: self.current_position,
            });
        }
        self.advance()?;

        let mut operations = Vec::new();
        while self.current_token != Token::Eof {
            if operations.len() == self.options.max_operations {
                return Err(SyntaxError::TooManyOperations {
                    limit: self.options.max_operations,
                });
            }
            operations.push(self.parse_operation()?);
        }

        Ok(Query::new(operations))
    }

    fn parse_operation(&mut self) -> Result<Operation, SyntaxError> {
        match self.current_token {
            Token::LBracket => self.parse_index(),
            Token::Dot => self.parse_sub(),
            _ => Err(self.unexpected("'.' or '['")),
        }
    }

    fn parse_index(&mut self) -> Result<Operation, SyntaxError> {
        self.advance()?; // consume '['

        let selector = match self.current_token {
            Token::Integer(i) => Selector::Literal(i),
            Token::Star => Selector::Wildcard,
            _ => return Err(self.unexpected("an integer or '*'")),
        };
        self.advance()?;

        if self.current_token != Token::RBracket {
            return Err(self.unexpected("']'"));
        }
        self.advance()?;

        Ok(Operation::Index(selector))
    }

    fn parse_sub(&mut self) -> Result<Operation, SyntaxError> {
        self.advance()?; // consume '.'

        let selector = match &self.current_token {
            Token::Identifier(name) => Selector::Literal(name.clone()),
            Token::Star => Selector::Wildcard,
            _ => return Err(self.unexpected("an identifier or '*'")),
        };
        self.advance()?;

        Ok(Operation::Sub(selector))
    }
}

/// Compiles query text into an operation chain with default options.
///
/// # Examples
///
/// ```
/// use jsque::{compile, Operation};
///
/// let query = compile("@[*].name").unwrap();
/// assert_eq!(
///     query.operations(),
///     &[Operation::each_item(), Operation::sub("name")]
/// );
///
/// assert!(compile("@[").is_err());
/// ```
pub fn compile(text: &str) -> Result<Query, SyntaxError> {
    compile_with(text, &CompileOptions::default())
}

/// Compiles query text into an operation chain.
pub fn compile_with(text: &str, options: &CompileOptions) -> Result<Query, SyntaxError> {
    let mut parser = Parser::with_options(Lexer::new(text), *options)?;
    let query = parser.parse_query()?;
    log::debug!("compiled {:?} into {} operation(s)", text, query.len());
    Ok(query)
}
