use std::borrow::Cow;

use crate::{
    ast::{Operation, Query, Selector},
    value::Value,
};

/// Evaluates a compiled query against a document.
///
/// Never fails: an index past either end of a sequence, an absent key, or an
/// operation applied to the wrong kind of value yields [`Value::Null`] in
/// place of the missing data. Wildcards run the rest of the chain once per
/// child and collect the results into a sequence, so nested wildcards give
/// nested sequences.
///
/// # Examples
///
/// ```
/// use jsque::{compile, evaluate, Value};
///
/// let doc = Value::Sequence(vec![
///     [("name", Value::from("John"))].into_iter().collect(),
///     [("name", Value::from("Alice"))].into_iter().collect(),
/// ]);
///
/// let names = evaluate(&compile("@[*].name").unwrap(), &doc);
/// assert_eq!(names, Value::Sequence(vec!["John".into(), "Alice".into()]));
///
/// let phone = evaluate(&compile("@[1].phone").unwrap(), &doc);
/// assert_eq!(phone, Value::Null);
/// ```
pub fn evaluate(query: &Query, document: &Value) -> Value {
    evaluate_ref(query, document).into_owned()
}

/// Like [`evaluate`], but borrows from `document` when no wildcard was
/// involved in producing the result.
pub fn evaluate_ref<'a>(query: &Query, document: &'a Value) -> Cow<'a, Value> {
    apply(query.operations(), document)
}

fn apply<'a>(ops: &[Operation], value: &'a Value) -> Cow<'a, Value> {
    let Some((op, rest)) = ops.split_first() else {
        return Cow::Borrowed(value);
    };

    match (op, value) {
        (Operation::Index(Selector::Literal(i)), Value::Sequence(items)) => {
            match resolve_index(*i, items.len()) {
                Some(pos) => apply(rest, &items[pos]),
                None => miss(op, value),
            }
        }
        (Operation::Index(Selector::Wildcard), Value::Sequence(items)) => fan_out(rest, items),
        (Operation::Sub(Selector::Literal(key)), Value::Mapping(entries)) => {
            match entries.get(key) {
                Some(child) => apply(rest, child),
                None => miss(op, value),
            }
        }
        (Operation::Sub(Selector::Wildcard), Value::Mapping(entries)) => {
            fan_out(rest, entries.values())
        }
        // `[*]` on a mapping and `.*` on a sequence fall through here too:
        // a wildcard only enumerates the container kind it is written for.
        _ => miss(op, value),
    }
}

/// Runs `rest` once per child, keeping child order.
fn fan_out<'a, I>(rest: &[Operation], children: I) -> Cow<'a, Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let results: Vec<Value> = children
        .into_iter()
        .map(|child| apply(rest, child).into_owned())
        .collect();
    log::trace!("fan-out over {} child(ren)", results.len());
    Cow::Owned(Value::Sequence(results))
}

// Null absorbs every later operation, so the rest of the chain is skipped.
fn miss<'a>(op: &Operation, value: &Value) -> Cow<'a, Value> {
    log::trace!("miss: {} on {}", op, value.type_name());
    Cow::Owned(Value::Null)
}

/// Maps a possibly negative index onto `0..len`. Negative indices count from
/// the end, so `-1` is the last element.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let pos = if index < 0 {
        len.checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
    } else {
        usize::try_from(index).ok()?
    };
    (pos < len).then_some(pos)
}
