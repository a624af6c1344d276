//! Name-to-operation table consulted by chain dispatch.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::value::{Function, Mapping, Value};

/// A registered operation: called with the chained target and the extra
/// arguments supplied at the call site.
pub type Operation = Arc<dyn Fn(&Value, &[Value]) -> Result<Value> + Send + Sync>;

/// An ordered table of named operations.
///
/// Installing under an existing name replaces the previous operation and
/// keeps its position.
///
/// # Examples
///
/// ```rust
/// use underbar::chain::Registry;
/// use underbar::{Value, array};
///
/// let mut registry = Registry::new();
/// registry.install("length", |target, _| Ok(target.property("length")));
///
/// assert_eq!(registry.call("length", &array![1, 2], &[]).unwrap(), Value::from(2));
/// assert!(registry.call("missing", &Value::Null, &[]).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    operations: IndexMap<String, Operation>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in operation.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        super::standard::install_all(&mut registry);
        registry
    }

    /// Installs `operation` under `name`.
    pub fn install<F>(&mut self, name: impl Into<String>, operation: F)
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(operation));
    }

    /// Installs `function` under `name`, called with the target prepended
    /// to the arguments.
    pub fn install_function(&mut self, name: impl Into<String>, function: Function) {
        self.install(name, move |target, arguments| {
            let mut full = Vec::with_capacity(arguments.len() + 1);
            full.push(target.clone());
            full.extend_from_slice(arguments);
            function.invoke(&full)
        });
    }

    /// Installs every function-valued own entry of `source` under its key.
    ///
    /// Returns the number of operations installed. Other entries are ignored.
    pub fn mixin(&mut self, source: &Mapping) -> usize {
        let mut installed = 0;
        for (name, value) in source.iter() {
            if let Value::Function(function) = value {
                self.install_function(name, function.clone());
                installed += 1;
            }
        }
        installed
    }

    fn insert(&mut self, name: String, operation: Operation) {
        if self.operations.contains_key(&name) {
            tracing::debug!(operation = %name, "overwriting registered operation");
        } else {
            tracing::trace!(operation = %name, "registering operation");
        }
        self.operations.insert(name, operation);
    }

    /// Returns the operation registered under `name`.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<Operation> {
        self.operations.get(name).cloned()
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names in installation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Calls the operation registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperation`] for an unregistered name, and
    /// otherwise whatever the operation returns.
    pub fn call(&self, name: &str, target: &Value, arguments: &[Value]) -> Result<Value> {
        let operation = self
            .operations
            .get(name)
            .ok_or_else(|| Error::UnknownOperation(name.to_owned()))?;
        operation(target, arguments)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}
