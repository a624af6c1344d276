//! Deep structural equality.
//!
//! [`is_equal`] compares two values recursively:
//!
//! 1. Strictly equal values are equal, except `+0` and `-0`.
//! 2. `null` and `undefined` equal nothing but themselves.
//! 3. `NaN` equals `NaN`.
//! 4. Two distinct primitives are unequal.
//! 5. Otherwise both values must share a [`Kind`]. Strings and regular
//!    expressions compare their text, numbers recurse on their numeric value,
//!    dates and booleans compare numerically, arrays element by element and
//!    mappings key by key.
//!
//! The mapping rule is directional by default: every own key of the left
//! operand must be present (own or inherited) in the right operand with an
//! equal value, but keys only the right operand has are not looked at. Pass
//! [`EqualityOptions::exact`] to [`is_equal_with`] for the symmetric rule.
//!
//! Values are immutable and therefore acyclic, so the recursion always ends.

use crate::value::{Kind, Mapping, Value};

/// How the mapping branch treats the keys of the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCheck {
    /// Every own key of the left mapping must resolve in the right one.
    /// Extra keys on the right are ignored.
    #[default]
    Subset,
    /// Both mappings must have the same own keys.
    Exact,
}

/// Options for [`is_equal_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EqualityOptions {
    /// Key check used for mappings.
    pub key_check: KeyCheck,
}

impl EqualityOptions {
    /// The default, directional comparison.
    pub const fn directional() -> Self {
        Self {
            key_check: KeyCheck::Subset,
        }
    }

    /// Symmetric comparison: mappings must agree on their own key sets.
    pub const fn exact() -> Self {
        Self {
            key_check: KeyCheck::Exact,
        }
    }
}

/// Deep comparison with the default, directional options.
///
/// # Examples
///
/// ```rust
/// use underbar::equality::is_equal;
/// use underbar::{Value, array, object};
///
/// let moe = object! { "name" => "moe", "nums" => array![1, 2, 3] };
/// let clone = object! { "name" => "moe", "nums" => array![1, 2, 3] };
/// assert!(is_equal(&moe, &clone));
///
/// assert!(!is_equal(&Value::from(0.0), &Value::from(-0.0)));
/// assert!(is_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
///
/// // Keys only present on the right are not checked.
/// assert!(is_equal(&object! { "name" => "moe" }, &object! { "name" => "moe", "extra" => 1 }));
/// ```
pub fn is_equal(left: &Value, right: &Value) -> bool {
    is_equal_with(left, right, &EqualityOptions::default())
}

/// Deep comparison with explicit options.
///
/// # Examples
///
/// ```rust
/// use underbar::equality::{EqualityOptions, is_equal_with};
/// use underbar::object;
///
/// let subset = object! { "name" => "moe" };
/// let superset = object! { "name" => "moe", "extra" => 1 };
/// assert!(!is_equal_with(&subset, &superset, &EqualityOptions::exact()));
/// ```
pub fn is_equal_with(left: &Value, right: &Value, options: &EqualityOptions) -> bool {
    Comparator { options }.equals(left, right)
}

/// Returns `true` if every key of `properties` holds an equal value in `object`.
///
/// Keys are read with property lookup, so inherited entries of `object`
/// count, and `object` may carry keys that `properties` lacks. A
/// `properties` value that is not a mapping matches anything.
///
/// # Examples
///
/// ```rust
/// use underbar::equality::is_match;
/// use underbar::object;
///
/// let moe = object! { "name" => "moe", "age" => 32 };
/// assert!(is_match(&moe, &object! { "age" => 32 }));
/// assert!(!is_match(&moe, &object! { "age" => 33 }));
/// ```
pub fn is_match(object: &Value, properties: &Value) -> bool {
    let Some(properties) = properties.as_mapping() else {
        return true;
    };
    properties
        .all_entries()
        .iter()
        .all(|(key, expected)| is_equal(&object.property(key), expected))
}

struct Comparator<'o> {
    options: &'o EqualityOptions,
}

impl Comparator<'_> {
    fn equals(&self, left: &Value, right: &Value) -> bool {
        if left.strict_equals(right) {
            return !is_signed_zero_pair(left, right);
        }
        if left.is_nil() || right.is_nil() {
            return false;
        }
        if left.is_nan() {
            return right.is_nan();
        }
        if left.is_primitive() && right.is_primitive() {
            return false;
        }
        self.deep_equals(left, right)
    }

    fn deep_equals(&self, left: &Value, right: &Value) -> bool {
        let kind = left.kind();
        if kind != right.kind() {
            return false;
        }
        match kind {
            Kind::String | Kind::RegExp => left.to_string() == right.to_string(),
            Kind::Number => self.equals(
                &Value::Number(left.to_number()),
                &Value::Number(right.to_number()),
            ),
            #[allow(clippy::float_cmp)]
            Kind::Date | Kind::Boolean => left.to_number() == right.to_number(),
            Kind::Array => match (left.as_array(), right.as_array()) {
                (Some(left), Some(right)) => self.arrays_equal(left, right),
                _ => false,
            },
            Kind::Object => match (left.as_mapping(), right.as_mapping()) {
                (Some(left), Some(right)) => self.mappings_equal(left, right),
                _ => false,
            },
            // Distinct functions never compare equal.
            Kind::Function | Kind::Undefined | Kind::Null => false,
        }
    }

    fn arrays_equal(&self, left: &[Value], right: &[Value]) -> bool {
        left.len() == right.len()
            && left
                .iter()
                .zip(right)
                .all(|(left, right)| self.equals(left, right))
    }

    fn mappings_equal(&self, left: &Mapping, right: &Mapping) -> bool {
        match self.options.key_check {
            KeyCheck::Subset => left.iter().all(|(key, value)| {
                right
                    .get(key)
                    .is_some_and(|other| self.equals(value, other))
            }),
            KeyCheck::Exact => {
                left.len() == right.len()
                    && left.iter().all(|(key, value)| {
                        right
                            .get_own(key)
                            .is_some_and(|other| self.equals(value, other))
                    })
            }
        }
    }
}

fn is_signed_zero_pair(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => {
            *left == 0.0 && left.is_sign_negative() != right.is_sign_negative()
        }
        _ => false,
    }
}
