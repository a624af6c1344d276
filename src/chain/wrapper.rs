//! Type-state chain handles.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::registry::Registry;
use crate::error::Result;
use crate::value::{Function, Value};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Unchained {}
    impl Sealed for super::Chaining {}
}

/// Decides what a dispatched call on a [`Wrapper`] returns.
///
/// Implemented only by [`Unchained`] and [`Chaining`].
pub trait ChainState: sealed::Sealed + Sized {
    /// Result of every dispatched call.
    type Output;

    /// Whether results are re-wrapped.
    const CHAINING: bool;

    #[doc(hidden)]
    fn finish(value: Value, origin: &Wrapper<Self>) -> Self::Output;
}

/// State of a freshly wrapped value: calls return raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unchained {}

/// State after [`Wrapper::chain`]: calls return new chaining handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chaining {}

impl ChainState for Unchained {
    type Output = Value;

    const CHAINING: bool = false;

    fn finish(value: Value, _origin: &Wrapper<Self>) -> Value {
        value
    }
}

impl ChainState for Chaining {
    type Output = Wrapper<Self>;

    const CHAINING: bool = true;

    fn finish(value: Value, origin: &Wrapper<Self>) -> Wrapper<Self> {
        Wrapper {
            value,
            scope: origin.scope.clone(),
            state: PhantomData,
        }
    }
}

#[derive(Clone)]
enum Scope {
    Global,
    Local(Arc<Registry>),
}

/// A value threaded through registered operations by name.
///
/// Every call passes the held value as the operation's target. On a
/// `Wrapper<Unchained>` the raw result comes back; on a
/// `Wrapper<Chaining>` it comes back wrapped again so calls can continue.
///
/// # Examples
///
/// ```rust
/// use underbar::chain::wrap;
/// use underbar::{Function, Value, array};
///
/// let is_even = Function::predicate(|value| value.to_number() % 2.0 == 0.0);
/// let double = Function::unary(|value| Ok(Value::from(value.to_number() * 2.0)));
///
/// let doubled = wrap(array![1, 2, 3, 4])
///     .chain()
///     .filter(&is_even)
///     .and_then(|evens| evens.map(&double))
///     .unwrap()
///     .into_value();
/// assert_eq!(doubled, array![4, 8]);
///
/// assert_eq!(wrap(array![1, 2, 3]).size().unwrap(), Value::from(3));
/// ```
pub struct Wrapper<S: ChainState = Unchained> {
    value: Value,
    scope: Scope,
    state: PhantomData<S>,
}

impl Wrapper<Unchained> {
    /// Wraps `value`, dispatching through the process-wide registry.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            scope: Scope::Global,
            state: PhantomData,
        }
    }

    /// Wraps `value`, dispatching through `registry` instead of the
    /// process-wide one.
    pub fn with_registry(value: impl Into<Value>, registry: Arc<Registry>) -> Self {
        Self {
            value: value.into(),
            scope: Scope::Local(registry),
            state: PhantomData,
        }
    }
}

impl<S: ChainState> Wrapper<S> {
    /// Switches to chaining: later calls return wrapped results.
    #[must_use]
    pub fn chain(self) -> Wrapper<Chaining> {
        Wrapper {
            value: self.value,
            scope: self.scope,
            state: PhantomData,
        }
    }

    /// The held value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Unwraps the held value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns `true` for a chaining handle.
    pub const fn is_chaining(&self) -> bool {
        S::CHAINING
    }

    /// Calls the operation registered under `name` with the held value
    /// followed by `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperation`](crate::Error::UnknownOperation)
    /// for an unregistered name, and otherwise whatever the operation returns.
    pub fn invoke(&self, name: &str, arguments: &[Value]) -> Result<S::Output> {
        tracing::trace!(operation = name, chaining = S::CHAINING, "dispatching chained call");
        let result = match &self.scope {
            Scope::Global => super::call(name, &self.value, arguments)?,
            Scope::Local(registry) => registry.call(name, &self.value, arguments)?,
        };
        Ok(S::finish(result, self))
    }

    /// Dispatches `each`; the result holds the original value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `iteratee`.
    pub fn each(&self, iteratee: &Function) -> Result<S::Output> {
        self.invoke("each", &[iteratee.clone().into()])
    }

    /// Dispatches `map`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `iteratee`.
    pub fn map(&self, iteratee: &Function) -> Result<S::Output> {
        self.invoke("map", &[iteratee.clone().into()])
    }

    /// Dispatches `filter`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate`.
    pub fn filter(&self, predicate: &Function) -> Result<S::Output> {
        self.invoke("filter", &[predicate.clone().into()])
    }

    /// Dispatches `every`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate`.
    pub fn every(&self, predicate: &Function) -> Result<S::Output> {
        self.invoke("every", &[predicate.clone().into()])
    }

    /// Dispatches `some`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate`.
    pub fn some(&self, predicate: &Function) -> Result<S::Output> {
        self.invoke("some", &[predicate.clone().into()])
    }

    /// Dispatches `reduce`, seeded with `initial` when given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyReduce`](crate::Error::EmptyReduce) for an empty
    /// container without `initial`, or the first error raised by `iteratee`.
    pub fn reduce(&self, iteratee: &Function, initial: Option<Value>) -> Result<S::Output> {
        let mut arguments = vec![Value::from(iteratee.clone())];
        arguments.extend(initial);
        self.invoke("reduce", &arguments)
    }

    /// Dispatches `pluck`.
    ///
    /// # Errors
    ///
    /// Fails only if `pluck` was replaced by a failing operation.
    pub fn pluck(&self, key: &str) -> Result<S::Output> {
        self.invoke("pluck", &[key.into()])
    }

    /// Dispatches `max` over the values themselves.
    ///
    /// # Errors
    ///
    /// Fails only if `max` was replaced by a failing operation.
    pub fn max(&self) -> Result<S::Output> {
        self.invoke("max", &[])
    }

    /// Dispatches `size`.
    ///
    /// # Errors
    ///
    /// Fails only if `size` was replaced by a failing operation.
    pub fn size(&self) -> Result<S::Output> {
        self.invoke("size", &[])
    }

    /// Dispatches `first`.
    ///
    /// # Errors
    ///
    /// Fails only if `first` was replaced by a failing operation.
    pub fn first(&self) -> Result<S::Output> {
        self.invoke("first", &[])
    }

    /// Dispatches `last`.
    ///
    /// # Errors
    ///
    /// Fails only if `last` was replaced by a failing operation.
    pub fn last(&self) -> Result<S::Output> {
        self.invoke("last", &[])
    }

    /// Dispatches a deep `flatten`.
    ///
    /// # Errors
    ///
    /// Fails only if `flatten` was replaced by a failing operation.
    pub fn flatten(&self) -> Result<S::Output> {
        self.invoke("flatten", &[])
    }

    /// Dispatches `compact`.
    ///
    /// # Errors
    ///
    /// Fails only if `compact` was replaced by a failing operation.
    pub fn compact(&self) -> Result<S::Output> {
        self.invoke("compact", &[])
    }

    /// Dispatches `without`.
    ///
    /// # Errors
    ///
    /// Fails only if `without` was replaced by a failing operation.
    pub fn without(&self, values: &[Value]) -> Result<S::Output> {
        self.invoke("without", values)
    }

    /// Dispatches `keys`.
    ///
    /// # Errors
    ///
    /// Fails only if `keys` was replaced by a failing operation.
    pub fn keys(&self) -> Result<S::Output> {
        self.invoke("keys", &[])
    }

    /// Dispatches `values`.
    ///
    /// # Errors
    ///
    /// Fails only if `values` was replaced by a failing operation.
    pub fn values(&self) -> Result<S::Output> {
        self.invoke("values", &[])
    }

    /// Dispatches `pick` with a list of keys.
    ///
    /// # Errors
    ///
    /// Fails only if `pick` was replaced by a failing operation.
    pub fn pick(&self, keys: &[&str]) -> Result<S::Output> {
        self.invoke("pick", &key_list(keys))
    }

    /// Dispatches `omit` with a list of keys.
    ///
    /// # Errors
    ///
    /// Fails only if `omit` was replaced by a failing operation.
    pub fn omit(&self, keys: &[&str]) -> Result<S::Output> {
        self.invoke("omit", &key_list(keys))
    }
}

fn key_list(keys: &[&str]) -> Vec<Value> {
    keys.iter().map(|&key| Value::from(key)).collect()
}

impl<S: ChainState> Clone for Wrapper<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            scope: self.scope.clone(),
            state: PhantomData,
        }
    }
}

impl<S: ChainState> fmt::Debug for Wrapper<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Wrapper")
            .field("value", &self.value)
            .field("chaining", &S::CHAINING)
            .field("local", &matches!(self.scope, Scope::Local(_)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::{array, object};
    use rstest::rstest;

    fn double() -> Function {
        Function::unary(|value| Ok(Value::from(value.to_number() * 2.0)))
    }

    #[rstest]
    fn test_unchained_returns_raw_values() {
        let wrapper = Wrapper::new(array![1, 2, 3]);
        assert!(!wrapper.is_chaining());
        assert_eq!(wrapper.map(&double()), Ok(array![2, 4, 6]));
        assert_eq!(wrapper.value(), &array![1, 2, 3]);
    }

    #[rstest]
    fn test_chaining_rewraps_every_result() {
        let chained = Wrapper::new(array![3, 1, 2]).chain();
        let doubled = chained.map(&double()).unwrap();
        assert!(doubled.is_chaining());
        assert_eq!(doubled.max().unwrap().into_value(), Value::from(6));
    }

    #[rstest]
    fn test_chain_is_idempotent() {
        let chained = Wrapper::new(array![1]).chain().chain();
        assert!(chained.is_chaining());
        assert_eq!(chained.into_value(), array![1]);
    }

    #[rstest]
    fn test_each_keeps_the_original_value() {
        let noop = Function::new(|_, _| Ok(Value::Undefined));
        let items = array![1, 2];
        assert_eq!(Wrapper::new(items.clone()).each(&noop), Ok(items));
    }

    #[rstest]
    fn test_reduce_with_initial() {
        let sum = Function::binary(|memo, value| Ok(Value::from(memo.to_number() + value.to_number())));
        assert_eq!(
            Wrapper::new(array![]).reduce(&sum, Some(Value::from(10))),
            Ok(Value::from(10))
        );
        assert_eq!(Wrapper::new(array![]).reduce(&sum, None), Err(Error::EmptyReduce));
    }

    #[rstest]
    fn test_local_registry_scopes_dispatch() {
        let mut registry = Registry::new();
        registry.install("shout", |target, _| Ok(Value::from(target.to_string().to_uppercase())));
        let registry = Arc::new(registry);

        let chained = Wrapper::with_registry("moe", Arc::clone(&registry)).chain();
        let shouted = chained.invoke("shout", &[]).unwrap();
        assert_eq!(shouted.value(), &Value::from("MOE"));
        assert_eq!(
            shouted.invoke("map", &[]).unwrap_err(),
            Error::UnknownOperation("map".to_owned())
        );
    }

    #[rstest]
    fn test_pick_and_omit() {
        let stooge = Wrapper::new(object! { "name" => "moe", "age" => 50 });
        assert_eq!(stooge.pick(&["name"]), Ok(object! { "name" => "moe" }));
        assert_eq!(stooge.omit(&["name"]), Ok(object! { "age" => 50 }));
    }

    #[rstest]
    fn test_debug_shows_state() {
        let wrapper = Wrapper::new(1).chain();
        assert_eq!(
            format!("{wrapper:?}"),
            "Wrapper { value: Number(1.0), chaining: true, local: false }"
        );
    }
}
