use thiserror::Error;

use crate::ast::Token;

/// Character offset into the query text, counted in chars from zero.
pub type Position = usize;

/// Errors raised while splitting query text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: Position },

    /// A `-` not followed by digits, or digits that do not fit in an i64
    #[error("invalid integer '{text}' at position {position}")]
    InvalidInteger { text: String, position: Position },
}

pub struct Lexer {
    input: Vec<char>,
    position: Position,
    token_start: Position,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    /// Position of the first character of the most recently returned token.
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    // Whitespace is allowed between any two tokens.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // An identifier runs until an operator character or whitespace, so keys
    // such as `first-name` or `a?b` need no quoting.
    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if !is_identifier_end(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_integer(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut text = String::new();

        if self.current_char() == Some('-') {
            text.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        text.parse::<i64>()
            .map(Token::Integer)
            .map_err(|_| LexError::InvalidInteger {
                text,
                position: start,
            })
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('@') => {
                self.advance();
                Token::At
            }
            Some('.') => {
                self.advance();
                Token::Dot
            }
            Some('*') => {
                self.advance();
                Token::Star
            }
            Some('[') => {
                self.advance();
                Token::LBracket
            }
            Some(']') => {
                self.advance();
                Token::RBracket
            }
            Some('-') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.read_integer()?
            }
            Some('-') => {
                return Err(LexError::InvalidInteger {
                    text: "-".to_string(),
                    position: self.position,
                });
            }
            Some(ch) if ch.is_ascii_digit() => self.read_integer()?,
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                Token::Identifier(self.read_identifier())
            }
            Some(ch) => {
                return Err(LexError::UnexpectedChar {
                    ch,
                    position: self.position,
                });
            }
        };

        Ok(token)
    }
}

fn is_identifier_end(ch: char) -> bool {
    matches!(ch, '.' | '[' | ']' | '*' | '@') || ch.is_whitespace()
}

/// Splits query text into tokens, without the trailing [`Token::Eof`].
///
/// # Examples
///
/// ```
/// use jsque::{lexer::tokenize, Token};
///
/// let tokens = tokenize("@.*").unwrap();
/// assert_eq!(tokens, vec![Token::At, Token::Dot, Token::Star]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token()? {
            Token::Eof => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}

#[test]
fn test_index_tokens() {
    let mut lexer = Lexer::new("[-12][*]");
    assert_eq!(lexer.next_token(), Ok(Token::LBracket));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(-12)));
    assert_eq!(lexer.next_token(), Ok(Token::RBracket));
    assert_eq!(lexer.next_token(), Ok(Token::LBracket));
    assert_eq!(lexer.next_token(), Ok(Token::Star));
    assert_eq!(lexer.next_token(), Ok(Token::RBracket));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_token_start_skips_whitespace() {
    let mut lexer = Lexer::new("  @ .name");
    assert_eq!(lexer.next_token(), Ok(Token::At));
    assert_eq!(lexer.token_start(), 2);
    assert_eq!(lexer.next_token(), Ok(Token::Dot));
    assert_eq!(lexer.token_start(), 4);
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("name".to_string())));
    assert_eq!(lexer.token_start(), 5);
}

#[test]
fn test_identifier_runs_to_operator() {
    let mut lexer = Lexer::new("first-name.x");
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("first-name".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Dot));
    assert_eq!(lexer.token_start(), 10);
}
