use std::{fmt, ops::Add, str::FromStr};

use crate::{ast::Operation, parser::SyntaxError};

/// Complete compiled query.
///
/// The chain of operations following the root `@`, in the order they are
/// applied. Immutable once built and safe to share between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    operations: Vec<Operation>,
}

impl Query {
    pub fn new(operations: Vec<Operation>) -> Self {
        Query { operations }
    }

    /// The bare `@` query, which returns the document unchanged.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_root(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of wildcard steps, which is also how many levels of sequence
    /// nesting a fully matching document produces.
    pub fn fan_out_depth(&self) -> usize {
        self.operations.iter().filter(|op| op.is_fan_out()).count()
    }

    /// Appends one operation to the chain.
    pub fn then(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Concatenates two chains: `@.a` + `@[*]` behaves like `@.a[*]`.
impl Add for Query {
    type Output = Query;

    fn add(mut self, rhs: Query) -> Query {
        self.operations.extend(rhs.operations);
        self
    }
}

impl FromIterator<Operation> for Query {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Query::new(iter.into_iter().collect())
    }
}

/// Canonical query text; compiling it yields an equal query.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@")?;
        for op in &self.operations {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

impl FromStr for Query {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::compile(s)
    }
}
