//! Literal macros for building values.

/// Builds an array [`Value`](crate::value::Value) from a list of expressions.
///
/// Each element goes through `Value::from`, so numbers, strings, booleans,
/// functions and nested values mix freely.
///
/// # Examples
///
/// ```rust
/// use underbar::{Value, array};
///
/// let items = array![1, "two", true, array![3]];
/// assert_eq!(items.property("length"), Value::from(4));
/// assert_eq!(items.to_string(), "1,two,true,3");
///
/// let empty = array![];
/// assert_eq!(empty.as_array().map(<[Value]>::len), Some(0));
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Value::from(::std::vec::Vec::<$crate::value::Value>::new())
    };

    ($($item:expr),+ $(,)?) => {
        $crate::value::Value::from(::std::vec![$($crate::value::Value::from($item)),+])
    };
}

/// Builds a mapping [`Value`](crate::value::Value) from `key => value` pairs.
///
/// Keys keep the order in which they are written.
///
/// # Examples
///
/// ```rust
/// use underbar::{Value, array, object};
///
/// let moe = object! { "name" => "moe", "nums" => array![1, 2, 3] };
/// assert_eq!(moe.property("name"), Value::from("moe"));
///
/// let keys: Vec<&str> = moe.as_mapping().unwrap().keys().collect();
/// assert_eq!(keys, vec!["name", "nums"]);
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Value::from($crate::value::Mapping::new())
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::value::Mapping::new();
        $(
            mapping.insert($key, $value);
        )+
        $crate::value::Value::from(mapping)
    }};
}

#[cfg(test)]
mod tests {
    use crate::value::{Mapping, Value};
    use rstest::rstest;

    #[rstest]
    fn test_array_macro_converts_elements() {
        let items = array![1, "a", false];
        assert_eq!(
            items,
            Value::from(vec![Value::from(1), Value::from("a"), Value::Bool(false)])
        );
    }

    #[rstest]
    fn test_object_macro_keeps_order() {
        let mapping = object! { "b" => 2, "a" => 1 };
        let expected = Mapping::new().with("b", 2).with("a", 1);
        assert_eq!(mapping.as_mapping(), Some(&expected));
        assert_eq!(
            mapping.as_mapping().unwrap().keys().collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[rstest]
    fn test_empty_literals() {
        assert_eq!(array![].as_array().map(<[Value]>::len), Some(0));
        assert_eq!(object! {}.as_mapping().map(Mapping::len), Some(0));
    }
}
