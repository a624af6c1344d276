#![cfg(feature = "array")]
//! Integration tests for the array helpers.

use rstest::rstest;
use underbar::arrays::{
    compact, difference, first, first_n, flatten, flatten_shallow, initial, intersection, last,
    last_n, object, range, rest, union, unzip, without, zip,
};
use underbar::{Error, Value, array};

#[rstest]
fn test_slicing_helpers_agree() {
    let items = array![1, 2, 3, 4, 5];
    assert_eq!(first(&items), Value::from(1));
    assert_eq!(last(&items), Value::from(5));
    assert_eq!(Value::from(first_n(&items, 2)), array![1, 2]);
    assert_eq!(Value::from(last_n(&items, 2)), array![4, 5]);
    assert_eq!(Value::from(initial(&items, 2)), array![1, 2, 3]);
    assert_eq!(Value::from(rest(&items, 2)), array![3, 4, 5]);
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(10)]
fn test_first_n_and_rest_partition_the_array(#[case] split: usize) {
    let items = array![1, 2, 3, 4, 5];
    let mut joined = first_n(&items, split);
    joined.extend(rest(&items, split));
    assert_eq!(Value::from(joined), items);
}

#[rstest]
fn test_slicing_non_arrays_yields_nothing() {
    let object = underbar::object! { "0" => 1 };
    assert_eq!(first(&object), Value::Undefined);
    assert!(last_n(&object, 2).is_empty());
    assert!(rest(&Value::Null, 0).is_empty());
}

#[rstest]
fn test_compact_drops_falsy_values() {
    let items = array![0, 1, false, 2, "", 3, Value::Null, Value::Undefined, f64::NAN];
    assert_eq!(Value::from(compact(&items)), array![1, 2, 3]);
}

#[rstest]
fn test_flatten_depths() {
    let nested = array![1, array![2], array![3, array![array![4]]]];
    assert_eq!(Value::from(flatten(&nested)), array![1, 2, 3, 4]);
    assert_eq!(
        Value::from(flatten_shallow(&nested)),
        array![1, 2, 3, array![array![4]]]
    );
}

#[rstest]
fn test_set_operations() {
    let left = array![1, 2, 3, 4];
    let right = array![3, 4, 5];
    assert_eq!(Value::from(union(&[left.clone(), right.clone()])), array![1, 2, 3, 4, 5]);
    assert_eq!(Value::from(intersection(&[left.clone(), right.clone()])), array![3, 4]);
    assert_eq!(Value::from(difference(&left, &[right])), array![1, 2]);
    assert_eq!(Value::from(without(&left, &[Value::from(2)])), array![1, 3, 4]);
}

#[rstest]
fn test_union_treats_nan_as_one_value() {
    let result = union(&[array![f64::NAN], array![f64::NAN, 0.0, -0.0]]);
    assert_eq!(result.len(), 2);
}

#[rstest]
fn test_zip_then_unzip_restores_rows() {
    let names = array!["moe", "larry", "curly"];
    let ages = array![30, 40, 50];
    let zipped = Value::from(zip(&[names.clone(), ages.clone()]));
    assert_eq!(Value::from(unzip(&zipped)), array![names, ages]);
}

#[rstest]
fn test_object_from_keys_and_values() {
    let built = object(&array!["moe", "larry"], &array![30, 40]);
    assert_eq!(built, underbar::object! { "moe" => 30, "larry" => 40 });
}

#[rstest]
fn test_object_from_pairs() {
    let built = object(&array![array!["moe", 30], array!["larry", 40]], &Value::Undefined);
    assert_eq!(built, underbar::object! { "moe" => 30, "larry" => 40 });
}

#[rstest]
#[case(0.0, 5.0, 1.0, array![0, 1, 2, 3, 4])]
#[case(1.0, 11.0, 5.0, array![1, 6])]
#[case(0.0, -3.0, -1.0, array![0, -1, -2])]
#[case(0.0, 0.0, 1.0, array![])]
#[case(0.0, 5.0, 0.0, array![])]
#[case(0.0, 5.0, -1.0, array![])]
fn test_range(#[case] start: f64, #[case] stop: f64, #[case] step: f64, #[case] expected: Value) {
    assert_eq!(range(start, stop, step).map(Value::from), Ok(expected));
}

#[rstest]
fn test_range_too_long_is_an_error() {
    assert!(matches!(range(0.0, 1e300, 1.0), Err(Error::InvalidArgument { .. })));
}
