//! # jsque Query Language - Abstract Syntax Tree
//!
//! This module defines the compiled form of a jsque query: a flat, ordered
//! chain of selection steps applied to a document from left to right.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operations]** - Single selection steps and their selectors
//! - **[query]** - The complete operation chain
//!
//! ## Quick Start
//!
//! ```text
//! @[*].address.*
//! ```
//!
//! Starting from the whole document (`@`), take every element of the
//! top-level sequence, select its `address` mapping, and take every value of
//! that mapping.
//!
//! ## Core Concepts
//!
//! ### Root
//!
//! Every query starts with exactly one `@`, the document as given. The root
//! is not an operation; `@` alone compiles to an empty chain.
//!
//! ### The Two Operations
//!
//! - **Index** `[n]` / `[*]` - select from a sequence by position
//! - **Sub** `.key` / `.*` - select from a mapping by key
//!
//! ### Injections and Surjections
//!
//! A literal selector picks at most one child (an injection). A wildcard
//! picks all of them (a surjection) and the rest of the chain runs once per
//! child, so every wildcard adds one level of sequence nesting to the result.
//!
//! ### Negative Indices
//!
//! ```text
//! @.items[-1]   // last element
//! ```
pub mod operations;
pub mod query;
pub mod tokens;

pub use operations::{Operation, Selector};
pub use query::Query;
pub use tokens::Token;
