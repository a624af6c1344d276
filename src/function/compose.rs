//! Negation and left-to-right composition.

use crate::value::{Function, Value, argument};

/// Returns the boolean complement of `predicate`.
///
/// `this` and the arguments pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use underbar::function::negate;
/// use underbar::{Function, Value};
///
/// let is_falsy = negate(&Function::unary(|value| Ok(value.clone())));
/// assert_eq!(is_falsy.invoke(&[Value::from(0)]).unwrap(), Value::Bool(true));
/// assert_eq!(is_falsy.invoke(&[Value::from("a")]).unwrap(), Value::Bool(false));
/// ```
pub fn negate(predicate: &Function) -> Function {
    let predicate = predicate.clone();
    Function::new(move |this, arguments| {
        Ok(Value::Bool(!predicate.call(this, arguments)?.is_truthy()))
    })
}

/// Pipes the arguments through `functions`, first to last.
///
/// The first function receives every argument; each later one receives
/// the previous result alone. All of them share the caller's `this`. An
/// empty composition returns its first argument.
///
/// # Examples
///
/// ```rust
/// use underbar::function::compose;
/// use underbar::{Function, Value};
///
/// let greet = Function::unary(|name| Ok(Value::from(format!("hi: {name}"))));
/// let exclaim = Function::unary(|text| Ok(Value::from(format!("{}!", text.to_string().to_uppercase()))));
///
/// let welcome = compose([greet, exclaim]);
/// assert_eq!(welcome.invoke(&[Value::from("moe")]).unwrap(), Value::from("HI: MOE!"));
/// ```
pub fn compose(functions: impl IntoIterator<Item = Function>) -> Function {
    let functions: Vec<Function> = functions.into_iter().collect();
    Function::new(move |this, arguments| {
        let Some((head, tail)) = functions.split_first() else {
            return Ok(argument(arguments, 0).clone());
        };
        let seed = head.call(this, arguments)?;
        tail.iter()
            .try_fold(seed, |value, function| function.call(this, &[value]))
    })
}
