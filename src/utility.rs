//! Small utility helpers.
//!
//! - [`identity`] and [`constant`]: the I and K combinators as [`Function`]s
//! - [`random`], [`random_with`]: inclusive random integers
//! - [`result`]: property resolution with lazy defaults

use rand::Rng;

use crate::error::Result;
use crate::value::{Function, Value, argument};

/// Returns a function that returns its first argument.
///
/// # Examples
///
/// ```rust
/// use underbar::utility::identity;
/// use underbar::Value;
///
/// assert_eq!(identity().invoke(&[Value::from(4)]).unwrap(), Value::from(4));
/// ```
pub fn identity() -> Function {
    Function::named("identity", |_, arguments| Ok(argument(arguments, 0).clone()))
}

/// Returns a function that ignores its arguments and returns `value`.
///
/// # Examples
///
/// ```rust
/// use underbar::utility::constant;
/// use underbar::{Value, object};
///
/// let stooge = object! { "name" => "moe" };
/// let always = constant(stooge.clone());
/// assert!(always.invoke(&[Value::from(1)]).unwrap().strict_equals(&stooge));
/// ```
pub fn constant(value: Value) -> Function {
    Function::new(move |_, _| Ok(value.clone()))
}

/// Returns a random integer between `min` and `max`, both inclusive.
///
/// The bounds are swapped when `max < min`.
///
/// # Examples
///
/// ```rust
/// use underbar::utility::random;
///
/// let roll = random(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
pub fn random(min: i64, max: i64) -> i64 {
    random_with(min, max, &mut rand::rng())
}

/// [`random`] with an explicit random source.
pub fn random_with<R>(min: i64, max: i64, rng: &mut R) -> i64
where
    R: Rng + ?Sized,
{
    let (low, high) = if max < min { (max, min) } else { (min, max) };
    rng.random_range(low..=high)
}

/// Resolves `object[property]`.
///
/// A function-valued property is called with the object as `this` and as
/// its argument. When the property reads as `undefined`, `default` is used
/// instead, and called the same way when it is a function.
///
/// # Errors
///
/// Returns whatever error the called property or default raises.
///
/// # Examples
///
/// ```rust
/// use underbar::utility::result;
/// use underbar::{Function, Value, object};
///
/// let stuff = Function::new(|this, _| Ok(Value::from(format!("nonsense {}", this.property("cheese")))));
/// let object = object! { "cheese" => "crumpets", "stuff" => stuff };
///
/// assert_eq!(result(&object, "cheese", &Value::Undefined).unwrap(), Value::from("crumpets"));
/// assert_eq!(result(&object, "stuff", &Value::Undefined).unwrap(), Value::from("nonsense crumpets"));
/// assert_eq!(result(&object, "meat", &Value::from("ham")).unwrap(), Value::from("ham"));
/// ```
pub fn result(object: &Value, property: &str, default: &Value) -> Result<Value> {
    let resolved = object.property(property);
    let candidate = if resolved.is_undefined() {
        default
    } else {
        &resolved
    };
    match candidate {
        Value::Function(function) => function.call(object, std::slice::from_ref(object)),
        other => Ok(other.clone()),
    }
}
