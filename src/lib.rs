//! # underbar
//!
//! A functional collection utility library for Rust, in the spirit of
//! Underscore.js, built over a closed dynamic [`Value`](value::Value) model.
//!
//! ## Overview
//!
//! - **Value model**: [`Value`](value::Value), [`Mapping`](value::Mapping) and
//!   callable [`Function`](value::Function) values
//! - **Type classification**: [`classify`](classify::classify) decides how a container is traversed
//! - **Traversal**: `each`, `map`, `filter`, `reduce`, `every`, `some`, `max`, `partition`, ...
//! - **Deep equality**: [`is_equal`](equality::is_equal) and [`is_match`](equality::is_match)
//! - **Function combinators**: `bind`, `partial`, `memoize`, `once`, `before`, `after`,
//!   `negate`, `compose`, `delay`, `defer`
//! - **Array, object and utility helpers**: `flatten`, `zip`, `pick`, `extend`, `random`, ...
//! - **Chain wrapper**: thread a value through registered operations by name
//!
//! ## Feature Flags
//!
//! - `collection`: Traversal engine
//! - `array`: Array helpers
//! - `object`: Object helpers
//! - `function`: Function combinators
//! - `utility`: Utility helpers
//! - `chain`: Chain wrapper and operation registry (enables all helper families)
//! - `async`: `delay`/`defer` on a tokio runtime
//! - `serde`: `Serialize`/`Deserialize` for [`Value`](value::Value)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let is_even = Function::predicate(|value| value.as_number().is_some_and(|n| n % 2.0 == 0.0));
//! let double = Function::unary(|value| Ok(Value::from(value.as_number().unwrap_or(0.0) * 2.0)));
//!
//! let evens = filter(&array![1, 2, 3, 4, 5, 6], &is_even, None).unwrap();
//! let doubled = map(&Value::from(evens), &double, None).unwrap();
//! assert_eq!(doubled, vec![Value::from(4), Value::from(8), Value::from(12)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model, the error type and every enabled helper family.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::classify::*;
    pub use crate::equality::*;
    pub use crate::error::{Error, Result};
    pub use crate::value::*;
    pub use crate::{array, object};

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "array")]
    pub use crate::arrays::*;

    #[cfg(feature = "object")]
    pub use crate::objects::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "utility")]
    pub use crate::utility::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::{Chaining, Registry, Unchained, Wrapper, chain, wrap};
}

pub mod classify;
pub mod equality;
pub mod error;
pub mod value;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "array")]
pub mod arrays;

#[cfg(feature = "object")]
pub mod objects;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "utility")]
pub mod utility;

#[cfg(feature = "chain")]
pub mod chain;

pub use error::{Error, Result};
pub use value::{Function, Mapping, Value};
