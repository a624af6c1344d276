//! The dynamic value model.
//!
//! Every helper in the crate operates over [`Value`], a closed enum covering
//! the primitives (`undefined`, `null`, booleans, numbers, strings), boxed
//! primitive wrappers, dates, regular expressions, arrays, mappings and
//! callable [`Function`]s.
//!
//! # Identity
//!
//! Composite variants are reference counted. Two composite values are
//! *strictly equal* ([`Value::strict_equals`]) only when they share an
//! allocation, while primitives compare by value with IEEE semantics.
//! Deep structural comparison lives in [`crate::equality`].
//!
//! Values are immutable once built, so no value can contain itself.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{Value, array, object};
//!
//! let person = object! { "name" => "moe", "nums" => array![1, 2, 3] };
//! assert_eq!(person.property("name"), Value::from("moe"));
//! assert_eq!(person.property("nums").to_string(), "1,2,3");
//!
//! let same = person.clone();
//! assert!(person.strict_equals(&same));
//! assert!(!person.strict_equals(&object! { "name" => "moe", "nums" => array![1, 2, 3] }));
//! ```

use std::fmt;
use std::sync::Arc;

mod function;
mod kind;
mod macros;
mod mapping;
#[cfg(feature = "serde")]
mod serde_support;

pub use function::Function;
pub use kind::Kind;
pub use mapping::Mapping;

pub(crate) use function::argument;

/// Shared `undefined`, handed out wherever a borrowed value may be absent.
pub(crate) static UNDEFINED: Value = Value::Undefined;

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

/// A boxed primitive: the object wrapper around a boolean, number or string.
#[derive(Clone, Debug, PartialEq)]
pub enum Boxed {
    /// A boxed boolean.
    Bool(bool),
    /// A boxed number.
    Number(f64),
    /// A boxed string.
    String(Arc<str>),
}

/// A point in time, in milliseconds since the Unix epoch.
///
/// An invalid date holds `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Date {
    millis: f64,
}

impl Date {
    /// Creates a date from epoch milliseconds.
    pub const fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    /// Returns the epoch milliseconds.
    pub const fn millis(self) -> f64 {
        self.millis
    }

    /// Returns `false` for an invalid (`NaN`) date.
    pub fn is_valid(self) -> bool {
        self.millis.is_finite()
    }
}

/// A regular expression, kept as its source and flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Creates a regular expression from its source and flags.
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Returns the pattern source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the flags.
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "/{}/{}", self.source, self.flags)
    }
}

/// A dynamically typed value.
///
/// `PartialEq` is plain structural equality in the Rust sense (numbers use
/// `f64` comparison, mappings ignore entry order). The library's own
/// comparator is [`crate::equality::is_equal`].
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A primitive boolean.
    Bool(bool),
    /// A primitive number.
    Number(f64),
    /// A primitive string.
    String(Arc<str>),
    /// A boxed primitive wrapper.
    Boxed(Arc<Boxed>),
    /// A date.
    Date(Arc<Date>),
    /// A regular expression.
    RegExp(Arc<RegExp>),
    /// An ordered, indexable sequence.
    Array(Arc<Vec<Value>>),
    /// A key/value mapping.
    Object(Arc<Mapping>),
    /// A callable function.
    Function(Function),
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a date value from epoch milliseconds.
    pub fn date(millis: f64) -> Self {
        Self::Date(Arc::new(Date::from_millis(millis)))
    }

    /// Creates a regular expression value.
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::RegExp(Arc::new(RegExp::new(source, flags)))
    }

    /// Creates a boxed primitive value.
    pub fn boxed(boxed: Boxed) -> Self {
        Self::Boxed(Arc::new(boxed))
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Returns the runtime kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Boxed(boxed) => match **boxed {
                Boxed::Bool(_) => Kind::Boolean,
                Boxed::Number(_) => Kind::Number,
                Boxed::String(_) => Kind::String,
            },
            Self::Date(_) => Kind::Date,
            Self::RegExp(_) => Kind::RegExp,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
            Self::Function(_) => Kind::Function,
        }
    }

    /// Returns `true` for values that are neither objects nor functions.
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_)
        )
    }

    /// Returns `true` for `undefined` and `null`.
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns `true` for `undefined`.
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for primitive booleans.
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns `true` for primitive numbers, `NaN` included.
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for primitive numbers other than `NaN` and the infinities.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Number(number) if number.is_finite())
    }

    /// Returns `true` for the primitive `NaN`.
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(number) if number.is_nan())
    }

    /// Returns `true` for primitive strings.
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` for dates.
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns `true` for regular expressions.
    pub const fn is_regexp(&self) -> bool {
        matches!(self, Self::RegExp(_))
    }

    /// Returns `true` for arrays.
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` for functions.
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns `true` for non-null objects that are neither arrays nor functions.
    pub const fn is_object(&self) -> bool {
        matches!(
            self,
            Self::Object(_) | Self::Boxed(_) | Self::Date(_) | Self::RegExp(_)
        )
    }

    /// Returns the truthiness of the value.
    ///
    /// `false`, `null`, `undefined`, `0`, `-0`, `NaN` and `""` are falsy;
    /// everything else, every composite included, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            _ => true,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the primitive boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the primitive number, if this is one.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the primitive string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the array elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the mapping, if this is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Object(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Reads a property the way `value[key]` does.
    ///
    /// Mappings consult their prototype chain; arrays and strings expose
    /// their indices and `length`. Anything else yields `undefined`.
    pub fn property(&self, key: &str) -> Self {
        match self {
            Self::Object(mapping) => mapping.get(key).cloned().unwrap_or_default(),
            Self::Array(items) => {
                if key == "length" {
                    return Self::from(items.len());
                }
                parse_index(key)
                    .and_then(|index| items.get(index).cloned())
                    .unwrap_or_default()
            }
            Self::String(text) => string_property(text, key),
            Self::Boxed(boxed) => match &**boxed {
                Boxed::String(text) => string_property(text, key),
                Boxed::Bool(_) | Boxed::Number(_) => Self::Undefined,
            },
            _ => Self::Undefined,
        }
    }

    /// Tests for a property the way `key in value` does.
    ///
    /// Primitives have no properties.
    pub fn has_property(&self, key: &str) -> bool {
        match self {
            Self::Object(mapping) => mapping.has(key),
            Self::Array(items) => {
                key == "length" || parse_index(key).is_some_and(|index| index < items.len())
            }
            Self::Boxed(boxed) => match &**boxed {
                Boxed::String(text) => {
                    key == "length"
                        || parse_index(key).is_some_and(|index| index < text.chars().count())
                }
                Boxed::Bool(_) | Boxed::Number(_) => false,
            },
            _ => false,
        }
    }

    // =========================================================================
    // Comparison and coercion
    // =========================================================================

    /// Strict equality (`===`).
    ///
    /// Primitives compare by value with IEEE semantics (`NaN` is unequal to
    /// itself, `+0` equals `-0`); composites compare by identity.
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Boxed(left), Self::Boxed(right)) => Arc::ptr_eq(left, right),
            (Self::Date(left), Self::Date(right)) => Arc::ptr_eq(left, right),
            (Self::RegExp(left), Self::RegExp(right)) => Arc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Arc::ptr_eq(left, right),
            (Self::Object(left), Self::Object(right)) => Arc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }

    /// `SameValueZero`: strict equality, except that `NaN` equals `NaN`.
    pub fn same_value_zero(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.strict_equals(other)
    }

    /// Numeric coercion (unary `+`).
    ///
    /// Strings parse as decimal literals with an optional sign and exponent,
    /// as unsigned `0x`, `0o` or `0b` integers, or as a signed `Infinity`.
    /// Surrounding whitespace is ignored and a blank string is `0`. Anything
    /// else, including `"inf"` and `"nan"`, is `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Boxed(boxed) => match &**boxed {
                Boxed::Bool(flag) => f64::from(u8::from(*flag)),
                Boxed::Number(number) => *number,
                Boxed::String(text) => parse_number(text),
            },
            Self::Date(date) => date.millis(),
            Self::Array(items) => match items.as_slice() {
                [] => 0.0,
                [single] => parse_number(&single.to_string()),
                _ => f64::NAN,
            },
            _ => f64::NAN,
        }
    }
}

fn string_property(text: &str, key: &str) -> Value {
    if key == "length" {
        return Value::from(text.chars().count());
    }
    parse_index(key)
        .and_then(|index| text.chars().nth(index))
        .map_or(Value::Undefined, |character| Value::from(character.to_string()))
}

fn parse_index(key: &str) -> Option<usize> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

fn parse_number(text: &str) -> f64 {
    let trimmed =
        text.trim_matches(|character: char| character.is_whitespace() || character == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|prefix| trimmed.strip_prefix(prefix)) {
            return parse_radix(digits, radix);
        }
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if is_decimal_literal(trimmed) => trimmed.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |total, character| {
            let digit = character.to_digit(radix)?;
            Some(total.mul_add(f64::from(radix), f64::from(digit)))
        })
        .unwrap_or(f64::NAN)
}

/// Digits with an optional sign, fraction and exponent, e.g. `-1.5e3` or `.5`.
fn is_decimal_literal(text: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !digits.is_empty() && all_digits(digits)
    });
    !(integer.is_empty() && fraction.is_empty())
        && all_digits(integer)
        && all_digits(fraction)
        && exponent_ok
}

fn write_number(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else if number.fract() == 0.0 && number.abs() < 1e21 {
        #[allow(clippy::cast_possible_truncation)]
        let integer = number as i128;
        write!(formatter, "{integer}")
    } else {
        write!(formatter, "{number}")
    }
}

/// String coercion.
///
/// Arrays join their elements with `,` (`null` and `undefined` render
/// empty), mappings render `[object Object]`, dates their epoch milliseconds.
impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write_number(formatter, *number),
            Self::String(text) => formatter.write_str(text),
            Self::Boxed(boxed) => match &**boxed {
                Boxed::Bool(flag) => write!(formatter, "{flag}"),
                Boxed::Number(number) => write_number(formatter, *number),
                Boxed::String(text) => formatter.write_str(text),
            },
            Self::Date(date) => write_number(formatter, date.millis()),
            Self::RegExp(regexp) => write!(formatter, "{regexp}"),
            Self::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !item.is_nil() {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Boxed(left), Self::Boxed(right)) => left == right,
            (Self::Date(left), Self::Date(right)) => left == right,
            (Self::RegExp(left), Self::RegExp(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left == right,
            _ => false,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<u64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: u64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Arc::from(text))
    }
}

impl From<Arc<str>> for Value {
    fn from(text: Arc<str>) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Arc::new(items))
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Object(Arc::new(mapping))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Self::Date(Arc::new(date))
    }
}

impl From<RegExp> for Value {
    fn from(regexp: RegExp) -> Self {
        Self::RegExp(Arc::new(regexp))
    }
}

impl From<Boxed> for Value {
    fn from(boxed: Boxed) -> Self {
        Self::boxed(boxed)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from(iterator.into_iter().map(Into::into).collect::<Vec<Value>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Number(0.0), false)]
    #[case(Value::Number(-0.0), false)]
    #[case(Value::Number(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("0"), true)]
    #[case(Value::Number(-1.0), true)]
    #[case(Value::boxed(Boxed::Bool(false)), true)]
    #[case(Value::from(Vec::new()), true)]
    #[case(Value::from(Mapping::new()), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(Value::from(1), "1")]
    #[case(Value::from(-0.0), "0")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::from(vec![Value::from(1), Value::Null, Value::from("a")]), "1,,a")]
    #[case(Value::from(Mapping::new()), "[object Object]")]
    #[case(Value::regexp("a+", "g"), "/a+/g")]
    #[case(Value::boxed(Boxed::Number(3.0)), "3")]
    #[case(Value::date(0.0), "0")]
    fn test_display_coerces_to_string(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_strict_equality_of_primitives() {
        assert!(Value::from(0.0).strict_equals(&Value::from(-0.0)));
        assert!(!Value::from(f64::NAN).strict_equals(&Value::from(f64::NAN)));
        assert!(Value::from("a").strict_equals(&Value::from("a")));
        assert!(!Value::from(1).strict_equals(&Value::from("1")));
    }

    #[rstest]
    fn test_strict_equality_of_composites_is_identity() {
        let items = Value::from(vec![Value::from(1)]);
        let copy = Value::from(vec![Value::from(1)]);
        assert!(items.strict_equals(&items.clone()));
        assert!(!items.strict_equals(&copy));
        assert_eq!(items, copy);
    }

    #[rstest]
    fn test_same_value_zero_treats_nan_as_equal() {
        assert!(Value::from(f64::NAN).same_value_zero(&Value::from(f64::NAN)));
        assert!(Value::from(0.0).same_value_zero(&Value::from(-0.0)));
    }

    #[rstest]
    fn test_array_properties() {
        let items = Value::from(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(items.property("1"), Value::from("b"));
        assert_eq!(items.property("length"), Value::from(2));
        assert_eq!(items.property("2"), Value::Undefined);
        assert!(items.has_property("0"));
        assert!(!items.has_property("01"));
    }

    #[rstest]
    fn test_primitives_have_no_properties_in_membership() {
        assert!(!Value::from("abc").has_property("length"));
        assert_eq!(Value::from("abc").property("length"), Value::from(3));
        assert_eq!(Value::from(5).property("x"), Value::Undefined);
    }

    #[rstest]
    #[case(Value::Null, 0.0)]
    #[case(Value::Bool(true), 1.0)]
    #[case(Value::from(" 12 "), 12.0)]
    #[case(Value::from(""), 0.0)]
    #[case(Value::date(86_400_000.0), 86_400_000.0)]
    #[case(Value::boxed(Boxed::Bool(false)), 0.0)]
    #[case(Value::from("0x10"), 16.0)]
    #[case(Value::from("0B101"), 5.0)]
    #[case(Value::from("0o17"), 15.0)]
    #[case(Value::from("-1.5e3"), -1500.0)]
    #[case(Value::from(".5"), 0.5)]
    #[case(Value::from("5."), 5.0)]
    #[case(Value::from("+2E-1"), 0.2)]
    fn test_numeric_coercion(#[case] value: Value, #[case] expected: f64) {
        assert!((value.to_number() - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("inf")]
    #[case("infinity")]
    #[case("-INF")]
    #[case("nan")]
    #[case("NaN")]
    #[case("-0x10")]
    #[case("0x")]
    #[case("0b102")]
    #[case("1e")]
    #[case(".")]
    #[case("1_000")]
    #[case("12abc")]
    fn test_non_numeric_strings_coerce_to_nan(#[case] text: &str) {
        assert!(Value::from(text).to_number().is_nan());
    }

    #[rstest]
    fn test_signed_infinity_strings() {
        assert_eq!(Value::from(" -Infinity ").to_number(), f64::NEG_INFINITY);
        assert_eq!(Value::from("+Infinity").to_number(), f64::INFINITY);
    }

    #[rstest]
    fn test_kind_is_shared_by_boxed_values() {
        assert_eq!(Value::boxed(Boxed::Number(1.0)).kind(), Kind::Number);
        assert_eq!(Value::from(1).kind(), Kind::Number);
        assert_eq!(Value::boxed(Boxed::String(Arc::from("x"))).kind(), Kind::String);
    }

    #[rstest]
    fn test_collects_into_array() {
        let collected: Value = (1..=3).map(Value::from).collect();
        assert_eq!(collected.to_string(), "1,2,3");
    }
}
