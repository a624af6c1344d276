//! Runtime kind tags.

use std::fmt;

/// The runtime kind of a [`Value`](super::Value).
///
/// Primitive values and their boxed wrappers share a tag, so a primitive
/// `5` and a boxed `5` are both [`Kind::Number`]. Deep equality compares
/// kinds before anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The `undefined` value.
    Undefined,
    /// The `null` value.
    Null,
    /// Primitive or boxed booleans.
    Boolean,
    /// Primitive or boxed numbers, including `NaN`.
    Number,
    /// Primitive or boxed strings.
    String,
    /// Dates.
    Date,
    /// Regular expressions.
    RegExp,
    /// Arrays.
    Array,
    /// Plain mappings.
    Object,
    /// Callable functions.
    Function,
}

impl Kind {
    /// Returns the name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Date => "Date",
            Self::RegExp => "RegExp",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Function => "Function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
