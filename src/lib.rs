pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod number;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Operation, Query, Selector, Token};
pub use evaluator::{evaluate, evaluate_ref};
pub use lexer::{LexError, Lexer, Position, tokenize};
pub use number::{InvalidNumber, Number};
pub use output::{to_json, to_json_pretty, to_yaml};
pub use parser::{CompileOptions, Parser, SyntaxError, compile, compile_with};
pub use value::{Mapping, Value};
