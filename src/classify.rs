//! Container shape classification.
//!
//! Every traversal starts by asking what kind of container it was handed.
//! [`classify`] answers with a [`Shape`] that already borrows the payload, so
//! the caller iterates without matching on [`Value`] a second time.
//!
//! Only arrays are array-like and only mappings are mappings. Strings, boxed
//! primitives, dates, regular expressions and functions are [`Shape::Other`]
//! and traverse as empty.

use crate::value::{Mapping, Value};

/// The traversal shape of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// An ordered, indexable sequence.
    ArrayLike(&'a [Value]),
    /// A key/value mapping, enumerated over its own entries.
    Mapping(&'a Mapping),
    /// Anything else. Traverses as empty.
    Other,
}

/// Classifies a value for traversal.
///
/// # Examples
///
/// ```rust
/// use underbar::classify::{Shape, classify};
/// use underbar::{Value, array, object};
///
/// assert!(matches!(classify(&array![1, 2]), Shape::ArrayLike(items) if items.len() == 2));
/// assert!(matches!(classify(&object! { "a" => 1 }), Shape::Mapping(_)));
/// assert_eq!(classify(&Value::from("text")), Shape::Other);
/// assert_eq!(classify(&Value::Null), Shape::Other);
/// ```
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Array(items) => Shape::ArrayLike(items),
        Value::Object(mapping) => Shape::Mapping(mapping),
        _ => Shape::Other,
    }
}

impl<'a> Shape<'a> {
    /// Returns the element count for arrays, the own key count for mappings
    /// and zero otherwise.
    pub fn len(self) -> usize {
        match self {
            Self::ArrayLike(items) => items.len(),
            Self::Mapping(mapping) => mapping.len(),
            Self::Other => 0,
        }
    }

    /// Returns `true` when traversal would visit nothing.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Iterates `(key, value)` pairs in traversal order.
    ///
    /// Array keys are `Value::Number(index)`, mapping keys `Value::String(key)`.
    pub fn entries(self) -> Entries<'a> {
        match self {
            Self::ArrayLike(items) => Entries::Indexed(items.iter().enumerate()),
            Self::Mapping(mapping) => Entries::Keyed(Box::new(mapping.iter())),
            Self::Other => Entries::Empty,
        }
    }

    /// Iterates values in traversal order.
    pub fn values(self) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries().map(|(_, value)| value)
    }
}

/// Iterator over the entries of a [`Shape`].
pub enum Entries<'a> {
    /// Entries of an array.
    Indexed(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    /// Entries of a mapping.
    Keyed(Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>),
    /// No entries.
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Indexed(iterator) => iterator
                .next()
                .map(|(index, value)| (Value::from(index), value)),
            Self::Keyed(iterator) => iterator.next().map(|(key, value)| (Value::from(key), value)),
            Self::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Indexed(iterator) => iterator.size_hint(),
            Self::Keyed(iterator) => iterator.size_hint(),
            Self::Empty => (0, Some(0)),
        }
    }
}
