//! Key and value enumeration.

use crate::value::{Mapping, Value};

fn mapping_of(object: &Value) -> Option<&Mapping> {
    object.as_mapping()
}

/// Returns the own keys of a mapping in enumeration order.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::keys;
/// use underbar::{Value, array, object};
///
/// let keys = keys(&object! { "one" => 1, "two" => 2, "three" => 3 });
/// assert_eq!(Value::from(keys), array!["one", "two", "three"]);
/// ```
pub fn keys(object: &Value) -> Vec<Value> {
    mapping_of(object)
        .map(|mapping| mapping.keys().map(Value::from).collect())
        .unwrap_or_default()
}

/// Returns own keys followed by inherited ones, nearest prototype first.
///
/// A key shadowed by a nearer mapping appears once.
pub fn all_keys(object: &Value) -> Vec<Value> {
    mapping_of(object)
        .map(|mapping| mapping.all_keys().into_iter().map(Value::from).collect())
        .unwrap_or_default()
}

/// Returns the own values of a mapping in enumeration order.
pub fn values(object: &Value) -> Vec<Value> {
    mapping_of(object)
        .map(|mapping| mapping.values().cloned().collect())
        .unwrap_or_default()
}

/// Returns the own entries as `[key, value]` arrays.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::pairs;
/// use underbar::{Value, array, object};
///
/// let pairs = pairs(&object! { "one" => 1, "two" => 2 });
/// assert_eq!(Value::from(pairs), array![array!["one", 1], array!["two", 2]]);
/// ```
pub fn pairs(object: &Value) -> Vec<Value> {
    mapping_of(object)
        .map(|mapping| {
            mapping
                .iter()
                .map(|(key, value)| Value::from(vec![Value::from(key), value.clone()]))
                .collect()
        })
        .unwrap_or_default()
}

/// Swaps keys and values.
///
/// Values are coerced to strings to become keys; when two values coerce to
/// the same string the later key wins.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::invert;
/// use underbar::{Value, object};
///
/// let inverted = invert(&object! { "Moe" => "Moses", "Larry" => "Louis" });
/// assert_eq!(inverted, object! { "Moses" => "Moe", "Louis" => "Larry" });
/// ```
pub fn invert(object: &Value) -> Value {
    let inverted: Mapping = mapping_of(object)
        .map(|mapping| {
            mapping
                .iter()
                .map(|(key, value)| (value.to_string(), Value::from(key)))
                .collect()
        })
        .unwrap_or_default();
    Value::from(inverted)
}

/// Returns the sorted names of every function-valued property, inherited
/// ones included.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::functions;
/// use underbar::{Function, Value, array, object};
///
/// let noop = Function::new(|_, _| Ok(Value::Undefined));
/// let api = object! { "map" => noop.clone(), "each" => noop, "version" => 1 };
/// assert_eq!(Value::from(functions(&api)), array!["each", "map"]);
/// ```
pub fn functions(object: &Value) -> Vec<Value> {
    let Some(mapping) = mapping_of(object) else {
        return Vec::new();
    };
    let mut names: Vec<String> = mapping
        .all_entries()
        .into_iter()
        .filter(|(_, value)| value.is_function())
        .map(|(key, _)| key)
        .collect();
    names.sort();
    names.into_iter().map(Value::from).collect()
}

/// Returns `true` if the value holds nothing.
///
/// Arrays and strings are empty at length zero and mappings without own
/// keys. Every other value, `null` and `undefined` included, is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::is_empty;
/// use underbar::{Value, array, object};
///
/// assert!(is_empty(&array![]));
/// assert!(is_empty(&object! {}));
/// assert!(is_empty(&Value::Null));
/// assert!(!is_empty(&array![1]));
/// assert!(!is_empty(&Value::from("a")));
/// ```
pub fn is_empty(object: &Value) -> bool {
    match object {
        Value::Array(items) => items.is_empty(),
        Value::Object(mapping) => mapping.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => true,
    }
}
