//! Array helpers.
//!
//! Helpers take the array as a [`Value`](crate::value::Value) and return a
//! fresh `Vec<Value>`, leaving the input untouched. A non-array input acts
//! as an empty array: single-item getters return `undefined` and the rest
//! return an empty vector.
//!
//! - Access and slicing: [`first`], [`first_n`], [`initial`], [`last`],
//!   [`last_n`], [`rest`]
//! - Cleanup: [`compact`], [`flatten`], [`flatten_shallow`], [`without`]
//! - Sets: [`union`], [`intersection`], [`difference`]
//! - Reshaping: [`zip`], [`unzip`], [`object`], [`range`]

mod sets;
mod slicing;

pub use sets::{difference, intersection, object, range, union, unzip, without, zip};
pub use slicing::{compact, first, first_n, flatten, flatten_shallow, initial, last, last_n, rest};
