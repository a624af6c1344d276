#![cfg(feature = "collection")]
//! Integration tests for the traversal engine.

use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};
use underbar::collection::{
    contains, each, every, filter, map, max, partition, pluck, reduce, size, some, to_array,
};
use underbar::{Error, Function, Value, array, object};

#[fixture]
fn is_even() -> Function {
    Function::predicate(|value| value.as_number().is_some_and(|n| n % 2.0 == 0.0))
}

#[fixture]
fn double() -> Function {
    Function::unary(|value| Ok(Value::from(value.to_number() * 2.0)))
}

fn recorder() -> (Function, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let record = Function::new(move |_, arguments| {
        let value = arguments.first().cloned().unwrap_or_default();
        let key = arguments.get(1).cloned().unwrap_or_default();
        sink.lock().unwrap().push(format!("{key}={value}"));
        Ok(Value::Undefined)
    });
    (record, seen)
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn test_filter_then_map_scenario(is_even: Function, double: Function) {
    let evens = filter(&array![1, 2, 3, 4, 5, 6], &is_even, None).unwrap();
    let doubled = map(&Value::from(evens), &double, None).unwrap();
    assert_eq!(Value::from(doubled), array![4, 8, 12]);
}

#[rstest]
fn test_reduce_empty_scenario() {
    let sum = Function::binary(|memo, value| Ok(Value::from(memo.to_number() + value.to_number())));
    assert_eq!(reduce(&array![], &sum, None, None), Err(Error::EmptyReduce));
    assert_eq!(
        reduce(&array![], &sum, Some(Value::from(0)), None),
        Ok(Value::from(0))
    );
}

// =============================================================================
// Iteration order
// =============================================================================

#[rstest]
fn test_each_visits_array_indices_in_order() {
    let (record, seen) = recorder();
    each(&array!["a", "b", "c"], &record, None).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["0=a", "1=b", "2=c"]);
}

#[rstest]
fn test_each_visits_mapping_keys_in_insertion_order() {
    let (record, seen) = recorder();
    each(&object! { "one" => 1, "two" => 2, "three" => 3 }, &record, None).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec!["one=1", "two=2", "three=3"]);
}

#[rstest]
fn test_each_on_primitive_is_a_no_op() {
    let (record, seen) = recorder();
    each(&Value::from(42), &record, None).unwrap();
    each(&Value::Null, &record, None).unwrap();
    assert!(seen.lock().unwrap().is_empty());
}

#[rstest]
fn test_each_stops_at_first_error() {
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let failing = Function::unary(move |value| {
        *counter.lock().unwrap() += 1;
        if value.to_number() >= 2.0 {
            Err(Error::thrown("stop"))
        } else {
            Ok(Value::Undefined)
        }
    });
    assert_eq!(
        each(&array![1, 2, 3], &failing, None),
        Err(Error::thrown("stop"))
    );
    assert_eq!(*calls.lock().unwrap(), 2);
}

#[rstest]
fn test_context_is_bound_as_this() {
    let scale = Function::new(|this, arguments| {
        let value = arguments.first().map_or(0.0, Value::to_number);
        Ok(Value::from(value * this.property("factor").to_number()))
    });
    let context = object! { "factor" => 10 };
    assert_eq!(
        map(&array![1, 2], &scale, Some(&context)).unwrap(),
        vec![Value::from(10), Value::from(20)]
    );
}

// =============================================================================
// Mappings
// =============================================================================

#[rstest]
fn test_map_over_mapping_follows_enumeration(double: Function) {
    let scores = object! { "a" => 1, "b" => 2, "c" => 3 };
    let doubled = map(&scores, &double, None).unwrap();
    assert_eq!(doubled.len(), size(&scores));
    assert_eq!(Value::from(doubled), array![2, 4, 6]);
}

#[rstest]
fn test_to_array_of_mapping_takes_values() {
    assert_eq!(
        Value::from(to_array(&object! { "x" => "a", "y" => "b" })),
        array!["a", "b"]
    );
}

// =============================================================================
// Predicates and selection
// =============================================================================

#[rstest]
#[case(array![2, 4, 6], true, true)]
#[case(array![2, 3], false, true)]
#[case(array![1, 3], false, false)]
#[case(array![], true, false)]
fn test_every_and_some(
    is_even: Function,
    #[case] items: Value,
    #[case] all: bool,
    #[case] any: bool,
) {
    assert_eq!(every(&items, Some(&is_even), None), Ok(all));
    assert_eq!(some(&items, Some(&is_even), None), Ok(any));
}

#[rstest]
fn test_every_without_predicate_uses_truthiness() {
    assert_eq!(every(&array![1, "a", true], None, None), Ok(true));
    assert_eq!(every(&array![1, 0], None, None), Ok(false));
    assert_eq!(some(&array![0, "", Value::Null], None, None), Ok(false));
}

#[rstest]
fn test_partition_preserves_order(is_even: Function) {
    let (even, odd) = partition(&array![1, 2, 3, 4, 5], &is_even).unwrap();
    assert_eq!(Value::from(even), array![2, 4]);
    assert_eq!(Value::from(odd), array![1, 3, 5]);
}

#[rstest]
fn test_partition_of_non_array_is_empty(is_even: Function) {
    let (even, odd) = partition(&object! { "a" => 2 }, &is_even).unwrap();
    assert!(even.is_empty());
    assert!(odd.is_empty());
}

#[rstest]
fn test_pluck_skips_missing_properties() {
    let stooges = array![
        object! { "name" => "moe", "age" => 40 },
        object! { "name" => "larry" },
    ];
    assert_eq!(Value::from(pluck(&stooges, "name")), array!["moe", "larry"]);
    assert_eq!(Value::from(pluck(&stooges, "age")), array![40]);
}

#[rstest]
fn test_max_keeps_first_of_ties() {
    let stooges = array![
        object! { "name" => "moe", "age" => 60 },
        object! { "name" => "curly", "age" => 60 },
    ];
    let age = Function::unary(|stooge| Ok(stooge.property("age")));
    let oldest = max(&stooges, Some(&age), None).unwrap();
    assert_eq!(oldest.property("name"), Value::from("moe"));
}

#[rstest]
fn test_max_of_non_array_is_undefined() {
    assert_eq!(max(&Value::from("abc"), None, None), Ok(Value::Undefined));
    assert_eq!(max(&array![], None, None), Ok(Value::Undefined));
}

#[rstest]
fn test_contains_uses_strict_equality() {
    let items = array![1, "two", f64::NAN];
    assert!(contains(&items, &Value::from(1)));
    assert!(contains(&items, &Value::from("two")));
    assert!(!contains(&items, &Value::from(f64::NAN)));
    assert!(contains(&object! { "a" => 1 }, &Value::from(1)));
}

#[rstest]
fn test_reduce_passes_index_and_container() {
    let describe = Function::new(|_, arguments| {
        let memo = arguments.first().cloned().unwrap_or_default();
        let value = arguments.get(1).cloned().unwrap_or_default();
        let index = arguments.get(2).cloned().unwrap_or_default();
        let length = arguments.get(3).map(|container| container.property("length"));
        Ok(Value::from(format!(
            "{memo}[{index}:{value}/{}]",
            length.unwrap_or_default()
        )))
    });
    assert_eq!(
        reduce(&array!["a", "b"], &describe, Some(Value::from(">")), None),
        Ok(Value::from(">[0:a/2][1:b/2]"))
    );
}
