//! Chain wrapper and operation registry.
//!
//! Operations are looked up by name in a [`Registry`]. The process-wide
//! registry starts with every built-in helper and grows through [`install`]
//! and [`mixin`]; whatever it holds is reachable both through [`call`] and
//! through every [`Wrapper`] created by [`wrap`] or [`chain`].
//!
//! # Examples
//!
//! ```rust
//! use underbar::chain::{self, chain, wrap};
//! use underbar::{Function, Value, array, object};
//!
//! let source = object! {
//!     "triple" => Function::unary(|value| Ok(Value::from(value.to_number() * 3.0))),
//! };
//! chain::mixin(source.as_mapping().unwrap());
//!
//! assert_eq!(chain::call("triple", &Value::from(2), &[]).unwrap(), Value::from(6));
//! assert_eq!(wrap(5).invoke("triple", &[]).unwrap(), Value::from(15));
//!
//! let tripled = chain(array![1, 2])
//!     .invoke("map", &[source.property("triple")])
//!     .and_then(|tripled| tripled.invoke("last", &[]))
//!     .unwrap();
//! assert_eq!(tripled.into_value(), Value::from(6));
//! ```

mod arguments;
mod registry;
mod standard;
mod wrapper;

use std::sync::LazyLock;

use parking_lot::RwLock;

pub use registry::{Operation, Registry};
pub use wrapper::{ChainState, Chaining, Unchained, Wrapper};

use crate::error::{Error, Result};
use crate::value::{Mapping, Value};

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::standard()));

/// Installs `operation` under `name` in the process-wide registry,
/// replacing any previous operation of that name.
pub fn install<F>(name: impl Into<String>, operation: F)
where
    F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
{
    REGISTRY.write().install(name, operation);
}

/// Installs every function-valued own entry of `source` in the
/// process-wide registry. Returns the number installed.
pub fn mixin(source: &Mapping) -> usize {
    REGISTRY.write().mixin(source)
}

/// Calls the operation registered under `name` with `target` followed by
/// `arguments`.
///
/// The registry lock is released before the operation runs, so operations
/// may install or call others.
///
/// # Errors
///
/// Returns [`Error::UnknownOperation`] for an unregistered name, and
/// otherwise whatever the operation returns.
pub fn call(name: &str, target: &Value, arguments: &[Value]) -> Result<Value> {
    let operation = REGISTRY
        .read()
        .operation(name)
        .ok_or_else(|| Error::UnknownOperation(name.to_owned()))?;
    operation(target, arguments)
}

/// Names in the process-wide registry, in installation order.
pub fn registered_names() -> Vec<String> {
    REGISTRY.read().names().map(str::to_owned).collect()
}

/// Wraps `value` without chaining.
pub fn wrap(value: impl Into<Value>) -> Wrapper<Unchained> {
    Wrapper::new(value)
}

/// Wraps `value` and starts chaining.
pub fn chain(value: impl Into<Value>) -> Wrapper<Chaining> {
    Wrapper::new(value).chain()
}
