//! Property-based tests for deep equality.
//!
//! 1. **Reflexivity**: every value built from plain data equals a structural copy of itself.
//! 2. **Symmetry**: for arrays, and for mappings under the exact key check, the result
//!    does not depend on argument order.
//! 3. **Directional Subset**: under the default key check a mapping equals any superset of itself.
//! 4. **Match Consistency**: a mapping matches a structural copy of itself.

#![forbid(unsafe_code)]

use proptest::prelude::*;
use underbar::equality::{EqualityOptions, is_equal, is_equal_with, is_match};
use underbar::{Mapping, Value};

/// Plain data: no functions, dates, regexps or signed zeros.
fn plain_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::from),
        (-1000i32..1000).prop_map(Value::from),
        "[a-z]{0,5}".prop_map(Value::from),
        Just(Value::from(f64::NAN)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-c]", inner, 0..4)
                .prop_map(|entries| Value::from(entries.into_iter().collect::<Mapping>())),
        ]
    })
}

/// Rebuilds `value` without sharing any composite storage.
fn deep_copy(value: &Value) -> Value {
    if let Some(items) = value.as_array() {
        return items.iter().map(deep_copy).collect();
    }
    if let Some(mapping) = value.as_mapping() {
        return Value::from(
            mapping
                .iter()
                .map(|(key, value)| (key.to_owned(), deep_copy(value)))
                .collect::<Mapping>(),
        );
    }
    value.clone()
}

proptest! {
    #[test]
    fn prop_reflexivity(value in plain_value()) {
        prop_assert!(is_equal(&value, &value));
        prop_assert!(is_equal(&value, &deep_copy(&value)));
        prop_assert!(is_equal_with(&value, &deep_copy(&value), &EqualityOptions::exact()));
    }

    #[test]
    fn prop_array_symmetry(
        left in prop::collection::vec(plain_value(), 0..4),
        right in prop::collection::vec(plain_value(), 0..4),
    ) {
        let options = EqualityOptions::exact();
        let (left, right) = (Value::from(left), Value::from(right));
        prop_assert_eq!(
            is_equal_with(&left, &right, &options),
            is_equal_with(&right, &left, &options)
        );
    }

    #[test]
    fn prop_exact_symmetry(left in plain_value(), right in plain_value()) {
        let options = EqualityOptions::exact();
        prop_assert_eq!(
            is_equal_with(&left, &right, &options),
            is_equal_with(&right, &left, &options)
        );
    }

    #[test]
    fn prop_mapping_equals_its_supersets(
        entries in prop::collection::btree_map("[a-c]", plain_value(), 0..3),
        extra in plain_value(),
    ) {
        let subset: Mapping = entries.iter().map(|(key, value)| (key.clone(), value.clone())).collect();
        let superset = subset.clone().with("zz", extra);
        prop_assert!(is_equal(&Value::from(subset), &Value::from(superset)));
    }

    #[test]
    fn prop_mapping_matches_its_copy(
        entries in prop::collection::btree_map("[a-c]", plain_value(), 0..3),
    ) {
        let original = Value::from(entries.into_iter().collect::<Mapping>());
        let copy = deep_copy(&original);
        prop_assert!(is_equal(&original, &copy));
        prop_assert!(is_match(&copy, &original));
    }
}
