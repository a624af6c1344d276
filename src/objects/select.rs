//! Whitelisting and blacklisting of keys.
//!
//! Selection reads every enumerable key, inherited ones included, and
//! always returns a fresh mapping without a prototype.

use crate::error::Result;
use crate::value::{Function, Mapping, Value};

fn entries(object: &Value) -> Vec<(String, Value)> {
    object
        .as_mapping()
        .map(Mapping::all_entries)
        .unwrap_or_default()
}

fn selected(
    object: &Value,
    predicate: &Function,
    keep: bool,
) -> Result<Value> {
    let mut result = Mapping::new();
    for (key, value) in entries(object) {
        let verdict = predicate
            .invoke(&[value.clone(), Value::from(key.as_str()), object.clone()])?
            .is_truthy();
        if verdict == keep {
            result.insert(key, value);
        }
    }
    Ok(Value::from(result))
}

/// Returns a copy holding only the listed keys, in the order listed.
///
/// Keys absent from the object are skipped.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::pick;
/// use underbar::object;
///
/// let moe = object! { "name" => "moe", "age" => 50, "userid" => "moe1" };
/// assert_eq!(pick(&moe, &["name", "age"]), object! { "name" => "moe", "age" => 50 });
/// ```
pub fn pick<K>(object: &Value, keys: &[K]) -> Value
where
    K: AsRef<str>,
{
    let mut result = Mapping::new();
    if let Some(mapping) = object.as_mapping() {
        for key in keys {
            if let Some(value) = mapping.get(key.as_ref()) {
                result.insert(key.as_ref(), value.clone());
            }
        }
    }
    Value::from(result)
}

/// Returns a copy holding the entries for which `predicate(value, key, object)`
/// is truthy.
///
/// # Errors
///
/// Returns the first error raised by `predicate`.
pub fn pick_by(object: &Value, predicate: &Function) -> Result<Value> {
    selected(object, predicate, true)
}

/// Returns a copy without any of the listed keys.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::omit;
/// use underbar::object;
///
/// let moe = object! { "name" => "moe", "age" => 50, "userid" => "moe1" };
/// assert_eq!(omit(&moe, &["userid", "age"]), object! { "name" => "moe" });
/// ```
pub fn omit<K>(object: &Value, keys: &[K]) -> Value
where
    K: AsRef<str>,
{
    let result: Mapping = entries(object)
        .into_iter()
        .filter(|(key, _)| !keys.iter().any(|omitted| omitted.as_ref() == key))
        .collect();
    Value::from(result)
}

/// Returns a copy without the entries for which `predicate(value, key, object)`
/// is truthy.
///
/// # Errors
///
/// Returns the first error raised by `predicate`.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::omit_by;
/// use underbar::{Function, object};
///
/// let is_number = Function::predicate(|value| value.is_number());
/// let moe = object! { "name" => "moe", "age" => 50 };
/// assert_eq!(omit_by(&moe, &is_number).unwrap(), object! { "name" => "moe" });
/// ```
pub fn omit_by(object: &Value, predicate: &Function) -> Result<Value> {
    selected(object, predicate, false)
}

/// Returns a function reading `key` from its first argument.
///
/// # Examples
///
/// ```rust
/// use underbar::objects::property;
/// use underbar::{Value, object};
///
/// let name = property("name");
/// let moe = object! { "name" => "moe" };
/// assert_eq!(name.invoke(&[moe]).unwrap(), Value::from("moe"));
/// ```
pub fn property(key: impl Into<String>) -> Function {
    let key = key.into();
    Function::named(format!("property({key})"), move |_, arguments| {
        Ok(crate::value::argument(arguments, 0).property(&key))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::object;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    fn test_pick_reads_inherited_and_drops_prototype() {
        let base = Arc::new(Mapping::new().with("kind", "stooge"));
        let moe = Value::from(Mapping::inheriting(base).with("name", "moe"));

        let picked = pick(&moe, &["kind", "missing"]);
        let mapping = picked.as_mapping().unwrap();
        assert_eq!(mapping.get_own("kind"), Some(&Value::from("stooge")));
        assert!(mapping.prototype().is_none());
        assert_eq!(mapping.len(), 1);
    }

    #[rstest]
    fn test_omit_removes_every_listed_key() {
        let moe = object! { "a" => 1, "b" => 2, "c" => 3 };
        assert_eq!(omit(&moe, &["a", "c"]), object! { "b" => 2 });
        assert_eq!(omit(&moe, &Vec::<String>::new()), moe);
    }

    #[rstest]
    fn test_pick_by_receives_key() {
        let starts_with_a = Function::binary(|_, key| {
            Ok(Value::Bool(key.as_str().is_some_and(|key| key.starts_with('a'))))
        });
        let source = object! { "apple" => 1, "banana" => 2, "avocado" => 3 };
        assert_eq!(
            pick_by(&source, &starts_with_a).unwrap(),
            object! { "apple" => 1, "avocado" => 3 }
        );
    }

    #[rstest]
    fn test_predicate_errors_propagate() {
        let failing = Function::new(|_, _| Err(Error::thrown("no")));
        assert_eq!(
            pick_by(&object! { "a" => 1 }, &failing),
            Err(Error::thrown("no"))
        );
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::from(3))]
    fn test_selection_on_non_mappings_is_empty(#[case] input: Value) {
        assert_eq!(pick(&input, &["a"]), object! {});
        assert_eq!(omit(&input, &["a"]), object! {});
    }

    #[rstest]
    fn test_property_reads_missing_as_undefined() {
        let age = property("age");
        assert_eq!(age.invoke(&[object! {}]).unwrap(), Value::Undefined);
        assert_eq!(age.invoke(&[]).unwrap(), Value::Undefined);
    }
}
