//! Positional access, slicing and flattening.

use crate::value::Value;

fn items(array: &Value) -> &[Value] {
    array.as_array().unwrap_or_default()
}

/// Returns the first item, or `undefined` for an empty or non-array input.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::first;
/// use underbar::{Value, array};
///
/// assert_eq!(first(&array![5, 4, 3]), Value::from(5));
/// assert_eq!(first(&array![]), Value::Undefined);
/// ```
pub fn first(array: &Value) -> Value {
    items(array).first().cloned().unwrap_or_default()
}

/// Returns the first `count` items.
pub fn first_n(array: &Value, count: usize) -> Vec<Value> {
    let items = items(array);
    items[..count.min(items.len())].to_vec()
}

/// Returns everything but the last `count` items.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::initial;
/// use underbar::{Value, array};
///
/// assert_eq!(Value::from(initial(&array![5, 4, 3, 2, 1], 1)), array![5, 4, 3, 2]);
/// assert!(initial(&array![1], 3).is_empty());
/// ```
pub fn initial(array: &Value, count: usize) -> Vec<Value> {
    let items = items(array);
    items[..items.len().saturating_sub(count)].to_vec()
}

/// Returns the last item, or `undefined` for an empty or non-array input.
pub fn last(array: &Value) -> Value {
    items(array).last().cloned().unwrap_or_default()
}

/// Returns the last `count` items.
pub fn last_n(array: &Value, count: usize) -> Vec<Value> {
    let items = items(array);
    items[items.len().saturating_sub(count)..].to_vec()
}

/// Returns the items from `index` onward.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::rest;
/// use underbar::{Value, array};
///
/// assert_eq!(Value::from(rest(&array![5, 4, 3, 2, 1], 1)), array![4, 3, 2, 1]);
/// assert_eq!(Value::from(rest(&array![5, 4, 3, 2, 1], 3)), array![2, 1]);
/// ```
pub fn rest(array: &Value, index: usize) -> Vec<Value> {
    let items = items(array);
    items[index.min(items.len())..].to_vec()
}

/// Returns the truthy items.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::compact;
/// use underbar::{Value, array};
///
/// let mixed = array![0, 1, false, 2, "", 3, Value::Null, f64::NAN];
/// assert_eq!(Value::from(compact(&mixed)), array![1, 2, 3]);
/// ```
pub fn compact(array: &Value) -> Vec<Value> {
    items(array)
        .iter()
        .filter(|item| item.is_truthy())
        .cloned()
        .collect()
}

/// Flattens nested arrays to any depth.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::flatten;
/// use underbar::{Value, array};
///
/// let nested = array![1, array![2], array![3, array![array![4]]]];
/// assert_eq!(Value::from(flatten(&nested)), array![1, 2, 3, 4]);
/// ```
pub fn flatten(array: &Value) -> Vec<Value> {
    fn flatten_into(items: &[Value], output: &mut Vec<Value>) {
        for item in items {
            match item.as_array() {
                Some(nested) => flatten_into(nested, output),
                None => output.push(item.clone()),
            }
        }
    }

    let mut output = Vec::new();
    flatten_into(items(array), &mut output);
    output
}

/// Flattens a single level of nesting.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::flatten_shallow;
/// use underbar::{Value, array};
///
/// let nested = array![1, array![2], array![3, array![array![4]]]];
/// assert_eq!(Value::from(flatten_shallow(&nested)), array![1, 2, 3, array![array![4]]]);
/// ```
pub fn flatten_shallow(array: &Value) -> Vec<Value> {
    items(array)
        .iter()
        .flat_map(|item| match item.as_array() {
            Some(nested) => nested.to_vec(),
            None => vec![item.clone()],
        })
        .collect()
}
