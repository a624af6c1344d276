//! The traversal engine.
//!
//! Every operation classifies its container with
//! [`classify`](crate::classify::classify) and then walks it in a single pass:
//!
//! - arrays by ascending index, with the index passed as a number key
//! - mappings in enumeration order over their own entries, with the key
//!   passed as a string
//! - anything else as an empty container
//!
//! Iteratees receive `(value, key, container)` and, when a context is given,
//! run with that context as `this`. Errors raised by an iteratee stop the
//! traversal and reach the caller unchanged.
//!
//! - [`each`], [`map`], [`filter`], [`every`], [`some`], [`reduce`]
//! - [`pluck`], [`max`], [`partition`]
//! - [`size`], [`contains`], [`to_array`]
//! - [`sample`], [`sample_n`] and their `_with` forms taking an explicit
//!   random source
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{filter, map, reduce};
//! use underbar::{Function, Value, array};
//!
//! let is_even = Function::predicate(|value| value.as_number().is_some_and(|n| n % 2.0 == 0.0));
//! let double = Function::unary(|value| Ok(Value::from(value.to_number() * 2.0)));
//! let sum = Function::binary(|memo, value| Ok(Value::from(memo.to_number() + value.to_number())));
//!
//! let evens = filter(&array![1, 2, 3, 4, 5, 6], &is_even, None).unwrap();
//! let doubled = Value::from(map(&Value::from(evens), &double, None).unwrap());
//! assert_eq!(doubled, array![4, 8, 12]);
//! assert_eq!(reduce(&doubled, &sum, None, None).unwrap(), Value::from(24));
//! ```

mod sample;
mod traversal;

pub use sample::{sample, sample_n, sample_n_with, sample_with};
pub use traversal::{
    contains, each, every, filter, map, max, partition, pluck, reduce, size, some, to_array,
};
