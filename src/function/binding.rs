//! Context binding and partial application.

use smallvec::SmallVec;

use crate::value::{Function, Value};

/// Preset arguments, inline for the common short case.
type Presets = SmallVec<[Value; 4]>;

fn concatenated(presets: &[Value], arguments: &[Value]) -> SmallVec<[Value; 8]> {
    presets.iter().chain(arguments).cloned().collect()
}

/// Fixes `this` and prepends `presets` to every call.
///
/// The `this` a caller passes to the bound function is ignored.
///
/// # Examples
///
/// ```rust
/// use underbar::function::bind;
/// use underbar::{Function, Value, object};
///
/// let greet = Function::new(|this, arguments| {
///     Ok(Value::from(format!("{}: {}", arguments[0], this.property("name"))))
/// });
/// let bound = bind(&greet, object! { "name" => "moe" }, [Value::from("hi")]);
/// assert_eq!(bound.invoke(&[]).unwrap(), Value::from("hi: moe"));
/// ```
pub fn bind(function: &Function, this: Value, presets: impl IntoIterator<Item = Value>) -> Function {
    let function = function.clone();
    let presets: Presets = presets.into_iter().collect();
    Function::new(move |_, arguments| function.call(&this, &concatenated(&presets, arguments)))
}

/// Prepends `presets` to every call, passing the caller's `this` through.
///
/// # Examples
///
/// ```rust
/// use underbar::function::partial;
/// use underbar::{Function, Value};
///
/// let subtract = Function::binary(|a, b| Ok(Value::from(a.to_number() - b.to_number())));
/// let from_twenty = partial(&subtract, [Value::from(20)]);
/// assert_eq!(from_twenty.invoke(&[Value::from(5)]).unwrap(), Value::from(15));
/// ```
pub fn partial(function: &Function, presets: impl IntoIterator<Item = Value>) -> Function {
    let function = function.clone();
    let presets: Presets = presets.into_iter().collect();
    Function::new(move |this, arguments| function.call(this, &concatenated(&presets, arguments)))
}
