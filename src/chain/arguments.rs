//! Typed access to the positional arguments of a registered operation.

use crate::error::{Error, Result};
use crate::value::{Function, Value, argument};

/// Positional arguments of one dispatched call, tagged with the operation
/// name for error reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Arguments<'a> {
    operation: &'static str,
    values: &'a [Value],
}

impl<'a> Arguments<'a> {
    pub(crate) const fn new(operation: &'static str, values: &'a [Value]) -> Self {
        Self { operation, values }
    }

    /// The argument at `index`, `undefined` when absent.
    pub(crate) fn get(&self, index: usize) -> &'a Value {
        argument(self.values, index)
    }

    /// The argument at `index`, or `None` when absent or `undefined`.
    pub(crate) fn optional(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index).filter(|value| !value.is_undefined())
    }

    /// Every argument from `start` on.
    pub(crate) fn rest(&self, start: usize) -> &'a [Value] {
        self.values.get(start..).unwrap_or_default()
    }

    pub(crate) fn function(&self, index: usize) -> Result<&'a Function> {
        callable(self.operation, self.get(index))
    }

    /// A function, or `None` for a nil argument.
    pub(crate) fn optional_function(&self, index: usize) -> Result<Option<&'a Function>> {
        let value = self.get(index);
        if value.is_nil() {
            Ok(None)
        } else {
            callable(self.operation, value).map(Some)
        }
    }

    /// A non-negative integer, or `default` when absent.
    pub(crate) fn count_or(&self, index: usize, default: usize) -> Result<usize> {
        self.optional(index)
            .map_or(Ok(default), |value| count(self.operation, value))
    }

    pub(crate) fn string(&self, index: usize) -> Result<&'a str> {
        let value = self.get(index);
        value.as_str().ok_or_else(|| {
            Error::invalid_argument(self.operation, format!("expected a string, found {}", value.kind()))
        })
    }

    /// String arguments from `start` on; array arguments are flattened one level.
    pub(crate) fn strings(&self, start: usize) -> Result<Vec<&'a str>> {
        let mut strings = Vec::new();
        for value in self.rest(start) {
            match value.as_array() {
                Some(items) => {
                    for item in items {
                        strings.push(self.expect_str(item)?);
                    }
                }
                None => strings.push(self.expect_str(value)?),
            }
        }
        Ok(strings)
    }

    fn expect_str(&self, value: &'a Value) -> Result<&'a str> {
        value.as_str().ok_or_else(|| {
            Error::invalid_argument(self.operation, format!("expected a key, found {}", value.kind()))
        })
    }
}

/// Checks that `value` is a function.
pub(crate) fn callable<'a>(operation: &'static str, value: &'a Value) -> Result<&'a Function> {
    value.as_function().ok_or(Error::NotCallable {
        operation,
        found: value.kind(),
    })
}

pub(crate) fn number(operation: &'static str, value: &Value) -> Result<f64> {
    value.as_number().ok_or_else(|| {
        Error::invalid_argument(operation, format!("expected a number, found {}", value.kind()))
    })
}

/// Checks that `value` is a finite, non-negative number and truncates it.
pub(crate) fn count(operation: &'static str, value: &Value) -> Result<usize> {
    match value.as_number() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(number) if number.is_finite() && number >= 0.0 => Ok(number.trunc() as usize),
        _ => Err(Error::invalid_argument(
            operation,
            format!("expected a non-negative count, found {value}"),
        )),
    }
}
