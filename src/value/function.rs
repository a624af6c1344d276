//! Callable function values.

use std::fmt;
use std::sync::Arc;

use super::{UNDEFINED, Value};
use crate::error::Result;

type Body = dyn Fn(&Value, &[Value]) -> Result<Value> + Send + Sync;

struct FunctionInner {
    name: Option<String>,
    body: Box<Body>,
}

/// A callable value.
///
/// A `Function` receives a calling context (`this`) and a slice of
/// positional arguments, and returns a [`Result`]. Cloning is cheap: clones
/// share one allocation, and two functions are strictly equal only when they
/// share it (see [`Function::ptr_eq`]).
///
/// Positional arguments a function does not receive read as
/// [`Value::Undefined`].
///
/// # Examples
///
/// ```rust
/// use underbar::{Function, Value};
///
/// let greet = Function::new(|this, arguments| {
///     let greeting = arguments.first().cloned().unwrap_or_default();
///     Ok(Value::from(format!("{greeting}: {}", this.property("name"))))
/// });
///
/// let moe = underbar::object! { "name" => "moe" };
/// let result = greet.call(&moe, &[Value::from("hi")]).unwrap();
/// assert_eq!(result, Value::from("hi: moe"));
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

impl Function {
    /// Creates an anonymous function from a body taking `this` and the arguments.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(FunctionInner {
                name: None,
                body: Box::new(body),
            }),
        }
    }

    /// Creates a named function.
    ///
    /// The name shows up in [`Display`](fmt::Display) output and in
    /// `functions()` listings of the mapping holding it.
    pub fn named<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(FunctionInner {
                name: Some(name.into()),
                body: Box::new(body),
            }),
        }
    }

    /// Creates a function of its first argument, ignoring `this` and the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::{Function, Value};
    ///
    /// let double = Function::unary(|value| {
    ///     Ok(Value::from(value.as_number().unwrap_or(f64::NAN) * 2.0))
    /// });
    /// assert_eq!(double.invoke(&[Value::from(21)]).unwrap(), Value::from(42));
    /// ```
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(move |_, arguments| body(argument(arguments, 0)))
    }

    /// Creates a function of its first two arguments.
    pub fn binary<F>(body: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(move |_, arguments| body(argument(arguments, 0), argument(arguments, 1)))
    }

    /// Creates an infallible predicate over the first argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::{Function, Value};
    ///
    /// let is_positive = Function::predicate(|value| value.as_number().is_some_and(|n| n > 0.0));
    /// assert_eq!(is_positive.invoke(&[Value::from(3)]).unwrap(), Value::Bool(true));
    /// ```
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(move |_, arguments| Ok(Value::Bool(test(argument(arguments, 0)))))
    }

    /// Returns the name given at construction, if any.
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Calls the function with an explicit `this` binding.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn call(&self, this: &Value, arguments: &[Value]) -> Result<Value> {
        (self.inner.body)(this, arguments)
    }

    /// Calls the function with `this` bound to [`Value::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body raises.
    pub fn invoke(&self, arguments: &[Value]) -> Result<Value> {
        self.call(&UNDEFINED, arguments)
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Returns the argument at `index`, or [`Value::Undefined`] when absent.
pub(crate) fn argument(arguments: &[Value], index: usize) -> &Value {
    arguments.get(index).unwrap_or(&UNDEFINED)
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(formatter, "Function({name})"),
            None => formatter.write_str("Function(<anonymous>)"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "function {}", self.name().unwrap_or_default())
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
