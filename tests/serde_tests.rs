#![cfg(feature = "serde")]
//! Integration tests for serde support on `Value`.

use rstest::rstest;
use underbar::{Function, Value, array, object};

#[rstest]
fn test_json_roundtrip_of_plain_data() {
    let original = object! {
        "name" => "moe",
        "nums" => array![1, 2.5, -3],
        "active" => true,
        "nothing" => Value::Null,
    };
    let json = serde_json::to_string(&original).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_integers_serialize_without_fraction() {
    let json = serde_json::to_string(&array![1, 2.5, -3, 1e300]).unwrap();
    assert_eq!(json, "[1,2.5,-3,1e300]");
}

#[rstest]
fn test_key_order_is_kept() {
    let json = serde_json::to_string(&object! { "b" => 1, "a" => 2 }).unwrap();
    assert_eq!(json, r#"{"b":1,"a":2}"#);
}

#[rstest]
fn test_non_data_values_serialize_as_null() {
    let noop = Function::new(|_, _| Ok(Value::Undefined));
    let json = serde_json::to_string(&array![Value::Undefined, noop]).unwrap();
    assert_eq!(json, "[null,null]");
}

#[rstest]
fn test_dates_and_regexps() {
    let json = serde_json::to_string(&array![Value::date(1_500.0), Value::regexp("a+", "g")]).unwrap();
    assert_eq!(json, r#"[1500,"/a+/g"]"#);
}

#[rstest]
fn test_deserialize_nested_json() {
    let value: Value = serde_json::from_str(r#"{"stooges":[{"name":"moe"},{"name":"curly"}]}"#).unwrap();
    assert_eq!(
        value.property("stooges").property("1").property("name"),
        Value::from("curly")
    );
}

#[rstest]
fn test_negative_zero_keeps_its_sign() {
    let json = serde_json::to_string(&array![-0.0, 0.0]).unwrap();
    assert_eq!(json, "[-0.0,0]");

    let restored: Value = serde_json::from_str(&json).unwrap();
    let zero = restored.property("0").as_number().unwrap();
    assert!(zero == 0.0 && zero.is_sign_negative());
    assert!(underbar::equality::is_equal(&restored, &array![-0.0, 0.0]));
    assert!(!underbar::equality::is_equal(&restored, &array![0.0, 0.0]));
}
