//! Set-like combinations of arrays, zipping and ranges.
//!
//! Membership is strict equality, except in [`union`] which treats `NaN`
//! as equal to itself.

use crate::error::{Error, Result};
use crate::value::{Mapping, Value};

/// The longest array [`range`] builds.
pub const MAX_RANGE_LENGTH: usize = u32::MAX as usize;

fn items(array: &Value) -> &[Value] {
    array.as_array().unwrap_or_default()
}

fn holds(items: &[Value], target: &Value) -> bool {
    items.iter().any(|item| item.strict_equals(target))
}

/// Returns the items that are strictly equal to none of `values`.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::without;
/// use underbar::{Value, array};
///
/// let result = without(&array![1, 2, 1, 0, 3, 1, 4], &[Value::from(0), Value::from(1)]);
/// assert_eq!(Value::from(result), array![2, 3, 4]);
/// ```
pub fn without(array: &Value, values: &[Value]) -> Vec<Value> {
    items(array)
        .iter()
        .filter(|item| !holds(values, item))
        .cloned()
        .collect()
}

/// Returns the distinct items of all `arrays`, in first-seen order.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::union;
/// use underbar::{Value, array};
///
/// let result = union(&[array![1, 2, 3], array![101, 2, 1, 10], array![2, 1]]);
/// assert_eq!(Value::from(result), array![1, 2, 3, 101, 10]);
/// ```
pub fn union(arrays: &[Value]) -> Vec<Value> {
    let mut seen: Vec<Value> = Vec::new();
    for item in arrays.iter().flat_map(items) {
        if !seen.iter().any(|other| other.same_value_zero(item)) {
            seen.push(item.clone());
        }
    }
    seen
}

/// Returns the distinct items of the first array present in every array.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::intersection;
/// use underbar::{Value, array};
///
/// let result = intersection(&[array![1, 2, 3], array![101, 2, 1, 10], array![2, 1]]);
/// assert_eq!(Value::from(result), array![1, 2]);
/// ```
pub fn intersection(arrays: &[Value]) -> Vec<Value> {
    let Some((head, tail)) = arrays.split_first() else {
        return Vec::new();
    };
    let mut result: Vec<Value> = Vec::new();
    for item in items(head) {
        if !holds(&result, item) && tail.iter().all(|other| holds(items(other), item)) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns the items of `array` not present in any of `others`.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::difference;
/// use underbar::{Value, array};
///
/// let result = difference(&array![1, 2, 3, 4, 5], &[array![5, 2, 10]]);
/// assert_eq!(Value::from(result), array![1, 3, 4]);
/// ```
pub fn difference(array: &Value, others: &[Value]) -> Vec<Value> {
    let excluded: Vec<Value> = others.iter().flat_map(items).cloned().collect();
    without(array, &excluded)
}

/// Groups the items at each position of `arrays` into one array per position.
///
/// The result is as long as the longest input; shorter inputs contribute
/// `undefined`. Non-array inputs count as empty.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::zip;
/// use underbar::{Value, array};
///
/// let result = zip(&[array!["moe", "larry"], array![30, 40], array![true]]);
/// assert_eq!(
///     Value::from(result),
///     array![array!["moe", 30, true], array!["larry", 40, Value::Undefined]]
/// );
/// ```
pub fn zip(arrays: &[Value]) -> Vec<Value> {
    let length = arrays.iter().map(|array| items(array).len()).max().unwrap_or(0);
    (0..length)
        .map(|index| {
            arrays
                .iter()
                .map(|array| items(array).get(index).cloned().unwrap_or_default())
                .collect::<Value>()
        })
        .collect()
}

/// The inverse of [`zip`]: regroups an array of arrays by position.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::unzip;
/// use underbar::{Value, array};
///
/// let zipped = array![array!["moe", 30], array!["larry", 40]];
/// assert_eq!(Value::from(unzip(&zipped)), array![array!["moe", "larry"], array![30, 40]]);
/// ```
pub fn unzip(arrays: &Value) -> Vec<Value> {
    zip(items(arrays))
}

/// Builds a mapping from an array of keys and an array of values.
///
/// Keys are coerced to strings. A later duplicate key overwrites the value
/// but keeps the first position. Keys without a value map to `undefined`.
/// When `values` is nil, `keys` is read as a list of `[key, value]` pairs.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::object;
/// use underbar::{Value, array};
///
/// let stooges = object(&array!["moe", "larry"], &array![30, 40]);
/// assert_eq!(stooges.property("larry"), Value::from(40));
///
/// let paired = object(&array![array!["moe", 30]], &Value::Undefined);
/// assert_eq!(paired.property("moe"), Value::from(30));
/// ```
pub fn object(keys: &Value, values: &Value) -> Value {
    let mapping: Mapping = if values.is_nil() {
        items(keys)
            .iter()
            .map(|pair| (pair.property("0").to_string(), pair.property("1")))
            .collect()
    } else {
        let values = items(values);
        items(keys)
            .iter()
            .enumerate()
            .map(|(index, key)| {
                (
                    key.to_string(),
                    values.get(index).cloned().unwrap_or_default(),
                )
            })
            .collect()
    };
    Value::from(mapping)
}

/// Returns the numbers from `start` up to, but excluding, `stop`, spaced by `step`.
///
/// A zero step, or a step that moves away from `stop`, yields an empty
/// range.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when the range would hold more than
/// [`MAX_RANGE_LENGTH`] numbers.
///
/// # Examples
///
/// ```rust
/// use underbar::arrays::range;
/// use underbar::{Value, array};
///
/// assert_eq!(Value::from(range(0.0, 10.0, 3.0).unwrap()), array![0, 3, 6, 9]);
/// assert_eq!(Value::from(range(0.0, -4.0, -1.0).unwrap()), array![0, -1, -2, -3]);
/// assert!(range(0.0, 10.0, -1.0).unwrap().is_empty());
/// assert!(range(0.0, 1e300, 1.0).is_err());
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn range(start: f64, stop: f64, step: f64) -> Result<Vec<Value>> {
    let steps = ((stop - start) / step).ceil();
    if !steps.is_finite() || steps <= 0.0 {
        return Ok(Vec::new());
    }
    if steps > MAX_RANGE_LENGTH as f64 {
        return Err(Error::invalid_argument(
            "range",
            format!("a range of {steps} numbers exceeds the maximum array length"),
        ));
    }
    let count = steps as usize;
    Ok((0..count)
        .map(|index| Value::from(step.mul_add(index as f64, start)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use rstest::rstest;

    #[rstest]
    fn test_without_uses_strict_equality() {
        let shared = array![1];
        let items = array![shared.clone(), array![1]];
        assert_eq!(without(&items, &[shared]), vec![array![1]]);
    }

    #[rstest]
    fn test_union_collapses_nan() {
        let result = union(&[array![f64::NAN, 1], array![f64::NAN]]);
        assert_eq!(result.len(), 2);
        assert!(result[0].is_nan());
    }

    #[rstest]
    fn test_intersection_of_nothing_is_empty() {
        assert!(intersection(&[]).is_empty());
        assert_eq!(Value::from(intersection(&[array![1, 1, 2]])), array![1, 2]);
    }

    #[rstest]
    fn test_zip_of_nothing_is_empty() {
        assert!(zip(&[]).is_empty());
        assert!(zip(&[Value::Null]).is_empty());
    }

    #[rstest]
    fn test_object_last_duplicate_wins() {
        let mapping = object(&array!["a", "b", "a"], &array![1, 2, 3]);
        assert_eq!(mapping.property("a"), Value::from(3));
        assert_eq!(
            mapping.as_mapping().unwrap().keys().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(
            object(&array!["x"], &array![]).property("x"),
            Value::Undefined
        );
    }

    #[rstest]
    #[case(0.0, 0.0, 1.0, 0)]
    #[case(0.0, 5.0, 0.0, 0)]
    #[case(1.0, 11.0, 1.0, 10)]
    #[case(0.0, 1.0, 0.25, 4)]
    #[case(5.0, 0.0, 1.0, 0)]
    #[case(0.0, f64::NAN, 1.0, 0)]
    fn test_range_lengths(
        #[case] start: f64,
        #[case] stop: f64,
        #[case] step: f64,
        #[case] expected: usize,
    ) {
        assert_eq!(range(start, stop, step).map(|numbers| numbers.len()), Ok(expected));
    }

    #[rstest]
    #[case(0.0, 1e300, 1.0)]
    #[case(0.0, 1.0, 1e-300)]
    #[case(0.0, 4_294_967_296.0, 1.0)]
    fn test_range_rejects_oversized_lengths(
        #[case] start: f64,
        #[case] stop: f64,
        #[case] step: f64,
    ) {
        assert!(matches!(
            range(start, stop, step),
            Err(Error::InvalidArgument { operation: "range", .. })
        ));
    }
}
