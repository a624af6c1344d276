//! Object helpers.
//!
//! - Enumeration: [`keys`], [`all_keys`], [`values`], [`pairs`], [`invert`],
//!   [`functions`], [`is_empty`]
//! - Selection: [`pick`], [`pick_by`], [`omit`], [`omit_by`], [`property`]
//! - Merging: [`extend`], [`defaults`], [`clone`]
//!
//! Enumeration sees own entries only, except [`all_keys`] and
//! [`functions`]. Non-mapping inputs enumerate nothing. The type predicates
//! (`is_array`, `is_function`, `is_object`, ...) are methods on
//! [`Value`](crate::value::Value).
//!
//! # Examples
//!
//! ```rust
//! use underbar::objects::{defaults, keys, pick};
//! use underbar::{Value, array, object};
//!
//! let moe = object! { "name" => "moe", "age" => 50 };
//! assert_eq!(Value::from(keys(&moe)), array!["name", "age"]);
//!
//! let named = pick(&moe, &["name"]);
//! let filled = defaults(&named, &[object! { "age" => 0, "job" => "stooge" }]);
//! assert_eq!(filled, object! { "name" => "moe", "age" => 0, "job" => "stooge" });
//! ```

mod enumerate;
mod merge;
mod select;

pub use enumerate::{all_keys, functions, invert, is_empty, keys, pairs, values};
pub use merge::{clone, defaults, extend};
pub use select::{omit, omit_by, pick, pick_by, property};
