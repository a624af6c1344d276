//! Function combinators.
//!
//! Each combinator takes a [`Function`](crate::value::Function) and returns
//! a new one with modified invocation semantics:
//!
//! - [`bind`], [`partial`]: fixed `this` and preset arguments
//! - [`memoize`], [`memoize_with_cache`]: results cached by a string key
//! - [`once`], [`before`], [`after`]: call-count gates
//! - [`negate`], [`compose`]: predicate complement and left-to-right piping
//! - [`delay`], [`defer`]: calls scheduled on a tokio runtime (`async` feature)
//!
//! Stateful wrappers keep their state behind a `parking_lot` mutex that is
//! never held while the wrapped function runs, so wrappers may call
//! themselves.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{compose, negate, partial};
//! use underbar::{Function, Value};
//!
//! let add = Function::binary(|a, b| Ok(Value::from(a.to_number() + b.to_number())));
//! let is_positive = Function::predicate(|value| value.to_number() > 0.0);
//!
//! let add_ten = partial(&add, [Value::from(10)]);
//! let is_below_minus_ten = compose([add_ten, negate(&is_positive)]);
//! assert_eq!(is_below_minus_ten.invoke(&[Value::from(-12)]).unwrap(), Value::Bool(true));
//! ```

mod binding;
mod compose;
mod gate;
mod memoize;
#[cfg(feature = "async")]
mod schedule;

pub use binding::{bind, partial};
pub use compose::{compose, negate};
pub use gate::{after, before, once};
pub use memoize::{MemoCache, memoize, memoize_with_cache};
#[cfg(feature = "async")]
pub use schedule::{TaskHandle, defer, delay};
