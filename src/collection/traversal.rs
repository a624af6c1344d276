//! Single-pass traversals over arrays and mappings.

use crate::classify::{Shape, classify};
use crate::error::{Error, Result};
use crate::value::{Function, UNDEFINED, Value};

fn this_of(context: Option<&Value>) -> &Value {
    context.unwrap_or(&UNDEFINED)
}

fn visit(
    iteratee: &Function,
    this: &Value,
    value: &Value,
    key: Value,
    container: &Value,
) -> Result<Value> {
    iteratee.call(this, &[value.clone(), key, container.clone()])
}

fn passes(
    predicate: Option<&Function>,
    this: &Value,
    value: &Value,
    key: Value,
    container: &Value,
) -> Result<bool> {
    match predicate {
        Some(predicate) => Ok(visit(predicate, this, value, key, container)?.is_truthy()),
        None => Ok(value.is_truthy()),
    }
}

/// Calls `iteratee(value, key, container)` for every entry.
///
/// Arrays are visited by ascending index, mappings in enumeration order.
/// Anything else is a no-op.
///
/// # Errors
///
/// Stops at and returns the first error raised by `iteratee`.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use underbar::collection::each;
/// use underbar::{Function, Value, array};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let record = Function::binary(move |value, index| {
///     sink.lock().unwrap().push(format!("{index}:{value}"));
///     Ok(Value::Undefined)
/// });
///
/// each(&array!["a", "b"], &record, None).unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec!["0:a", "1:b"]);
/// ```
pub fn each(container: &Value, iteratee: &Function, context: Option<&Value>) -> Result<()> {
    let this = this_of(context);
    for (key, value) in classify(container).entries() {
        visit(iteratee, this, value, key, container)?;
    }
    Ok(())
}

/// Collects `iteratee(value, key, container)` for every entry.
///
/// # Errors
///
/// Returns the first error raised by `iteratee`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
/// use underbar::{Function, Value, object};
///
/// let shout = Function::unary(|value| Ok(Value::from(value.to_string().to_uppercase())));
/// let result = map(&object! { "a" => "x", "b" => "y" }, &shout, None).unwrap();
/// assert_eq!(result, vec![Value::from("X"), Value::from("Y")]);
/// ```
pub fn map(container: &Value, iteratee: &Function, context: Option<&Value>) -> Result<Vec<Value>> {
    let this = this_of(context);
    classify(container)
        .entries()
        .map(|(key, value)| visit(iteratee, this, value, key, container))
        .collect()
}

/// Collects the values for which `predicate` is truthy, in traversal order.
///
/// # Errors
///
/// Returns the first error raised by `predicate`.
pub fn filter(
    container: &Value,
    predicate: &Function,
    context: Option<&Value>,
) -> Result<Vec<Value>> {
    let this = this_of(context);
    let mut kept = Vec::new();
    for (key, value) in classify(container).entries() {
        if visit(predicate, this, value, key, container)?.is_truthy() {
            kept.push(value.clone());
        }
    }
    Ok(kept)
}

/// Returns `true` if every value passes `predicate`.
///
/// Stops at the first falsy result. Empty and non-container inputs pass.
/// Without a predicate each value is tested for truthiness.
///
/// # Errors
///
/// Returns the first error raised by `predicate`.
pub fn every(
    container: &Value,
    predicate: Option<&Function>,
    context: Option<&Value>,
) -> Result<bool> {
    let this = this_of(context);
    for (key, value) in classify(container).entries() {
        if !passes(predicate, this, value, key, container)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns `true` if any value passes `predicate`.
///
/// Stops at the first truthy result. Without a predicate each value is
/// tested for truthiness.
///
/// # Errors
///
/// Returns the first error raised by `predicate`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
/// use underbar::{Value, array};
///
/// assert!(some(&array![0, "", 3], None, None).unwrap());
/// assert!(!some(&array![0, "", Value::Null], None, None).unwrap());
/// assert!(!some(&Value::Null, None, None).unwrap());
/// ```
pub fn some(
    container: &Value,
    predicate: Option<&Function>,
    context: Option<&Value>,
) -> Result<bool> {
    let this = this_of(context);
    for (key, value) in classify(container).entries() {
        if passes(predicate, this, value, key, container)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Extracts `item[property]` from every value that has the property.
///
/// Values lacking the property are skipped, so the result may be shorter
/// than the container. Inherited properties count.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use underbar::{Value, array, object};
///
/// let stooges = array![
///     object! { "name" => "moe", "age" => 40 },
///     object! { "name" => "larry" },
///     object! { "name" => "curly", "age" => 60 },
/// ];
/// assert_eq!(pluck(&stooges, "age"), vec![Value::from(40), Value::from(60)]);
/// ```
pub fn pluck(container: &Value, property: &str) -> Vec<Value> {
    classify(container)
        .values()
        .filter(|item| item.has_property(property))
        .map(|item| item.property(property))
        .collect()
}

/// Returns the array item with the greatest numeric score.
///
/// The score is `iteratee(item, index, container)`, or the item itself when
/// no iteratee is given. Non-numeric scores are ignored and ties keep the
/// first item. Empty arrays, arrays without a numeric score and non-array
/// inputs yield `undefined`.
///
/// # Errors
///
/// Returns the first error raised by `iteratee`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::max;
/// use underbar::{Function, Value, array, object};
///
/// let stooges = array![
///     object! { "name" => "moe", "age" => 40 },
///     object! { "name" => "curly", "age" => 60 },
/// ];
/// let age = Function::unary(|stooge| Ok(stooge.property("age")));
/// let oldest = max(&stooges, Some(&age), None).unwrap();
/// assert_eq!(oldest.property("name"), Value::from("curly"));
///
/// assert_eq!(max(&array!["a", 3, 9, 1], None, None).unwrap(), Value::from(9));
/// assert_eq!(max(&object! { "a" => 1 }, None, None).unwrap(), Value::Undefined);
/// ```
pub fn max(container: &Value, iteratee: Option<&Function>, context: Option<&Value>) -> Result<Value> {
    let Shape::ArrayLike(items) = classify(container) else {
        return Ok(Value::Undefined);
    };
    let this = this_of(context);
    let mut best: Option<(f64, &Value)> = None;
    for (index, item) in items.iter().enumerate() {
        let score = match iteratee {
            Some(iteratee) => visit(iteratee, this, item, Value::from(index), container)?,
            None => item.clone(),
        };
        if let Value::Number(score) = score
            && best.is_none_or(|(top, _)| score > top)
        {
            best = Some((score, item));
        }
    }
    Ok(best.map(|(_, item)| item.clone()).unwrap_or_default())
}

/// Folds the container into one value.
///
/// `iteratee` receives `(memo, value, key, container)` and returns the next
/// memo. Without an `initial` memo the first value seeds the fold and the
/// traversal starts at the second entry.
///
/// # Errors
///
/// Returns [`Error::EmptyReduce`] for an empty container without `initial`,
/// and the first error raised by `iteratee` otherwise.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
/// use underbar::{Error, Function, Value, array};
///
/// let sum = Function::binary(|memo, value| Ok(Value::from(memo.to_number() + value.to_number())));
///
/// assert_eq!(reduce(&array![1, 2, 3], &sum, None, None).unwrap(), Value::from(6));
/// assert_eq!(reduce(&array![], &sum, Some(Value::from(0)), None).unwrap(), Value::from(0));
/// assert_eq!(reduce(&array![], &sum, None, None), Err(Error::EmptyReduce));
/// ```
pub fn reduce(
    container: &Value,
    iteratee: &Function,
    initial: Option<Value>,
    context: Option<&Value>,
) -> Result<Value> {
    let this = this_of(context);
    let mut entries = classify(container).entries();
    let mut memo = match initial {
        Some(initial) => initial,
        None => entries
            .next()
            .map(|(_, first)| first.clone())
            .ok_or(Error::EmptyReduce)?,
    };
    for (key, value) in entries {
        memo = iteratee.call(this, &[memo, value.clone(), key, container.clone()])?;
    }
    Ok(memo)
}

/// Splits an array into the items that pass `predicate` and those that don't.
///
/// Relative order is kept within each half. Non-array inputs yield two
/// empty halves.
///
/// # Errors
///
/// Returns the first error raised by `predicate`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::partition;
/// use underbar::{Function, Value, array};
///
/// let is_odd = Function::predicate(|value| value.as_number().is_some_and(|n| n % 2.0 == 1.0));
/// let (odd, even) = partition(&array![0, 1, 2, 3, 4, 5], &is_odd).unwrap();
/// assert_eq!(Value::from(odd), array![1, 3, 5]);
/// assert_eq!(Value::from(even), array![0, 2, 4]);
/// ```
pub fn partition(container: &Value, predicate: &Function) -> Result<(Vec<Value>, Vec<Value>)> {
    let Shape::ArrayLike(items) = classify(container) else {
        return Ok((Vec::new(), Vec::new()));
    };
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if visit(predicate, &UNDEFINED, item, Value::from(index), container)?.is_truthy() {
            matching.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    Ok((matching, rest))
}

/// Returns the array length, the own key count of a mapping, or zero.
pub fn size(container: &Value) -> usize {
    classify(container).len()
}

/// Returns `true` if any value of the container is strictly equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
/// use underbar::{Value, array, object};
///
/// assert!(contains(&array![1, 2, 3], &Value::from(3)));
/// assert!(contains(&object! { "a" => "x" }, &Value::from("x")));
/// assert!(!contains(&object! { "a" => "x" }, &Value::from("a")));
/// // Composites compare by identity.
/// assert!(!contains(&array![array![1]], &array![1]));
/// ```
pub fn contains(container: &Value, target: &Value) -> bool {
    classify(container)
        .values()
        .any(|value| value.strict_equals(target))
}

/// Copies the values of an array or mapping into a new vector.
pub fn to_array(container: &Value) -> Vec<Value> {
    classify(container).values().cloned().collect()
}
