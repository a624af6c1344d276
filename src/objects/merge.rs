//! Merging and shallow copies.
//!
//! Values are immutable, so both merges build a new mapping from the
//! destination and leave every input untouched.

use std::sync::Arc;

use crate::value::{Mapping, Value};

fn destination_of(destination: &Value) -> Mapping {
    destination.as_mapping().cloned().unwrap_or_default()
}

/// Copies every enumerable entry of `sources` over `destination`.
///
/// Later sources win. Inherited entries of a source are copied too, and
/// the destination keeps its own prototype. A non-mapping destination
/// starts from an empty mapping; non-mapping sources contribute nothing.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::extend;
/// use underbar::object;
///
/// let merged = extend(&object! { "name" => "moe" }, &[object! { "age" => 50 }]);
/// assert_eq!(merged, object! { "name" => "moe", "age" => 50 });
/// ```
pub fn extend(destination: &Value, sources: &[Value]) -> Value {
    let mut result = destination_of(destination);
    for source in sources.iter().filter_map(Value::as_mapping) {
        for (key, value) in source.all_entries() {
            result.insert(key, value);
        }
    }
    Value::from(result)
}

/// Fills keys of `destination` that read as `undefined` from the first
/// source providing them.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::defaults;
/// use underbar::object;
///
/// let iced = object! { "flavor" => "chocolate" };
/// let filled = defaults(&iced, &[object! { "flavor" => "vanilla", "sprinkles" => "lots" }]);
/// assert_eq!(filled, object! { "flavor" => "chocolate", "sprinkles" => "lots" });
/// ```
pub fn defaults(destination: &Value, sources: &[Value]) -> Value {
    let mut result = destination_of(destination);
    for source in sources.iter().filter_map(Value::as_mapping) {
        for (key, value) in source.all_entries() {
            if result.get(&key).is_none_or(Value::is_undefined) {
                result.insert(key, value);
            }
        }
    }
    Value::from(result)
}

/// Returns a shallow copy with a new identity.
///
/// Arrays and mappings get a fresh container holding the same items.
/// Every other value is returned as is.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::clone;
/// use underbar::{array, object};
///
/// let moe = object! { "name" => "moe", "nums" => array![1, 2] };
/// let copy = clone(&moe);
/// assert_eq!(copy, moe);
/// assert!(!copy.strict_equals(&moe));
/// assert!(copy.property("nums").strict_equals(&moe.property("nums")));
/// ```
pub fn clone(object: &Value) -> Value {
    match object {
        Value::Array(items) => Value::Array(Arc::new(Vec::clone(items))),
        Value::Object(mapping) => Value::Object(Arc::new(Mapping::clone(mapping))),
        other => other.clone(),
    }
}
