//! Error types for the library.
//!
//! Every fallible operation returns [`Result<T>`]. Errors raised by
//! caller-supplied iteratees travel through the library untouched: the
//! traversal engine performs no catching or retry.

use crate::value::{Kind, Value};

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents the errors that can occur while working with the library.
///
/// # Examples
///
/// ```rust
/// use underbar::Error;
///
/// let error = Error::EmptyReduce;
/// assert_eq!(
///     format!("{error}"),
///     "reduce of an empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// `reduce` was called on an empty container without an initial accumulator.
    EmptyReduce,
    /// An error raised by caller code, usually from inside an iteratee.
    Thrown(Value),
    /// A value that had to be callable was not a function.
    NotCallable {
        /// The operation that expected a function.
        operation: &'static str,
        /// The kind of value that was found instead.
        found: Kind,
    },
    /// An operation received arguments of the wrong shape.
    InvalidArgument {
        /// The operation that rejected its arguments.
        operation: &'static str,
        /// What was wrong with them.
        message: String,
    },
    /// No operation is registered under the requested name.
    UnknownOperation(String),
    /// The host scheduler could not accept a delayed call.
    Scheduler(String),
    /// A scheduled call was cancelled before it completed.
    Cancelled,
}

impl Error {
    /// Creates an [`Error::Thrown`] carrying the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::{Error, Value};
    ///
    /// let error = Error::thrown("boom");
    /// assert_eq!(error, Error::Thrown(Value::from("boom")));
    /// ```
    pub fn thrown(value: impl Into<Value>) -> Self {
        Self::Thrown(value.into())
    }

    pub(crate) fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyReduce => write!(
                formatter,
                "reduce of an empty collection with no initial value"
            ),
            Self::Thrown(value) => write!(formatter, "uncaught {value}"),
            Self::NotCallable { operation, found } => {
                write!(formatter, "{operation}: expected a function, found {found}")
            }
            Self::InvalidArgument { operation, message } => {
                write!(formatter, "{operation}: {message}")
            }
            Self::UnknownOperation(name) => write!(formatter, "no operation named `{name}`"),
            Self::Scheduler(message) => write!(formatter, "scheduler unavailable: {message}"),
            Self::Cancelled => write!(formatter, "scheduled call was cancelled"),
        }
    }
}

impl std::error::Error for Error {}
