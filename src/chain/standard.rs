//! Built-in operations installed by [`Registry::standard`].
//!
//! Each adapter receives the chained target first and validates the rest
//! of its arguments before delegating to the typed helper of the same name.

use std::iter;

use super::arguments::{Arguments, callable, count, number};
use super::registry::Registry;
use crate::arrays::{
    compact, difference, first, first_n, flatten, flatten_shallow, initial, intersection, last,
    last_n, object, range, rest, union, unzip, without, zip,
};
use crate::collection::{
    contains, each, every, filter, map, max, partition, pluck, reduce, sample, sample_n, size,
    some, to_array,
};
use crate::equality::{is_equal, is_match};
use crate::error::Result;
use crate::function::{after, before, bind, compose, memoize, negate, once, partial};
use crate::objects::{
    all_keys, clone, defaults, extend, functions, invert, is_empty, keys, omit, omit_by, pairs,
    pick, pick_by, property, values,
};
use crate::utility::{constant, random, result};
use crate::value::{Function, Value};

type Adapter = fn(&Value, Arguments<'_>) -> Result<Value>;

const PREDICATES: [(&str, fn(&Value) -> bool); 12] = [
    ("is_array", Value::is_array),
    ("is_function", Value::is_function),
    ("is_object", Value::is_object),
    ("is_string", Value::is_string),
    ("is_number", Value::is_number),
    ("is_boolean", Value::is_boolean),
    ("is_date", Value::is_date),
    ("is_regexp", Value::is_regexp),
    ("is_nan", Value::is_nan),
    ("is_null", Value::is_null),
    ("is_undefined", Value::is_undefined),
    ("is_finite", Value::is_finite),
];

pub(super) fn install_all(registry: &mut Registry) {
    install_collection(registry);
    install_arrays(registry);
    install_objects(registry);
    install_functions(registry);
    install_utility(registry);
    for (name, test) in PREDICATES {
        registry.install(name, move |target, _| Ok(Value::Bool(test(target))));
    }
}

fn register(registry: &mut Registry, name: &'static str, adapter: Adapter) {
    registry.install(name, move |target, values| {
        adapter(target, Arguments::new(name, values))
    });
}

fn with_target(target: &Value, arguments: Arguments<'_>) -> Vec<Value> {
    iter::once(target.clone())
        .chain(arguments.rest(0).iter().cloned())
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn integer(number: f64) -> i64 {
    number.floor() as i64
}

// =============================================================================
// Collections
// =============================================================================

fn install_collection(registry: &mut Registry) {
    register(registry, "each", |target, arguments| {
        each(target, arguments.function(0)?, arguments.optional(1))?;
        Ok(target.clone())
    });
    register(registry, "map", |target, arguments| {
        map(target, arguments.function(0)?, arguments.optional(1)).map(Value::from)
    });
    register(registry, "filter", |target, arguments| {
        filter(target, arguments.function(0)?, arguments.optional(1)).map(Value::from)
    });
    register(registry, "every", |target, arguments| {
        every(target, arguments.optional_function(0)?, arguments.optional(1)).map(Value::Bool)
    });
    register(registry, "some", |target, arguments| {
        some(target, arguments.optional_function(0)?, arguments.optional(1)).map(Value::Bool)
    });
    register(registry, "pluck", |target, arguments| {
        Ok(pluck(target, arguments.string(0)?).into())
    });
    register(registry, "max", |target, arguments| {
        max(target, arguments.optional_function(0)?, arguments.optional(1))
    });
    register(registry, "reduce", |target, arguments| {
        let initial = arguments.rest(1).first().cloned();
        reduce(target, arguments.function(0)?, initial, arguments.optional(2))
    });
    register(registry, "partition", |target, arguments| {
        let (matching, others) = partition(target, arguments.function(0)?)?;
        Ok(Value::from(vec![Value::from(matching), Value::from(others)]))
    });
    register(registry, "size", |target, _| Ok(size(target).into()));
    register(registry, "contains", |target, arguments| {
        Ok(contains(target, arguments.get(0)).into())
    });
    register(registry, "to_array", |target, _| Ok(to_array(target).into()));
    register(registry, "sample", |target, arguments| match arguments.optional(0) {
        Some(requested) => Ok(sample_n(target, count("sample", requested)?).into()),
        None => Ok(sample(target)),
    });
}

// =============================================================================
// Arrays
// =============================================================================

fn install_arrays(registry: &mut Registry) {
    register(registry, "first", |target, arguments| match arguments.optional(0) {
        Some(requested) => Ok(first_n(target, count("first", requested)?).into()),
        None => Ok(first(target)),
    });
    register(registry, "last", |target, arguments| match arguments.optional(0) {
        Some(requested) => Ok(last_n(target, count("last", requested)?).into()),
        None => Ok(last(target)),
    });
    register(registry, "initial", |target, arguments| {
        Ok(initial(target, arguments.count_or(0, 1)?).into())
    });
    register(registry, "rest", |target, arguments| {
        Ok(rest(target, arguments.count_or(0, 1)?).into())
    });
    register(registry, "compact", |target, _| Ok(compact(target).into()));
    register(registry, "flatten", |target, arguments| {
        let flattened = if arguments.get(0).is_truthy() {
            flatten_shallow(target)
        } else {
            flatten(target)
        };
        Ok(flattened.into())
    });
    register(registry, "without", |target, arguments| {
        Ok(without(target, arguments.rest(0)).into())
    });
    register(registry, "union", |target, arguments| {
        Ok(union(&with_target(target, arguments)).into())
    });
    register(registry, "intersection", |target, arguments| {
        Ok(intersection(&with_target(target, arguments)).into())
    });
    register(registry, "difference", |target, arguments| {
        Ok(difference(target, arguments.rest(0)).into())
    });
    register(registry, "zip", |target, arguments| {
        Ok(zip(&with_target(target, arguments)).into())
    });
    register(registry, "unzip", |target, _| Ok(unzip(target).into()));
    register(registry, "object", |target, arguments| {
        Ok(object(target, arguments.get(0)))
    });
    register(registry, "range", |target, arguments| {
        let bound = number("range", target)?;
        let (start, stop) = match arguments.optional(0) {
            Some(stop) => (bound, number("range", stop)?),
            None => (0.0, bound),
        };
        let step = match arguments.optional(1) {
            Some(step) => number("range", step)?,
            None => 1.0,
        };
        Ok(range(start, stop, step)?.into())
    });
}

// =============================================================================
// Objects
// =============================================================================

fn install_objects(registry: &mut Registry) {
    register(registry, "keys", |target, _| Ok(keys(target).into()));
    register(registry, "all_keys", |target, _| Ok(all_keys(target).into()));
    register(registry, "values", |target, _| Ok(values(target).into()));
    register(registry, "pairs", |target, _| Ok(pairs(target).into()));
    register(registry, "invert", |target, _| Ok(invert(target)));
    register(registry, "functions", |target, _| Ok(functions(target).into()));
    register(registry, "extend", |target, arguments| {
        Ok(extend(target, arguments.rest(0)))
    });
    register(registry, "defaults", |target, arguments| {
        Ok(defaults(target, arguments.rest(0)))
    });
    register(registry, "clone", |target, _| Ok(clone(target)));
    register(registry, "is_empty", |target, _| Ok(is_empty(target).into()));
    register(registry, "pick", |target, arguments| match arguments.get(0) {
        Value::Function(predicate) => pick_by(target, predicate),
        _ => Ok(pick(target, &arguments.strings(0)?)),
    });
    register(registry, "omit", |target, arguments| match arguments.get(0) {
        Value::Function(predicate) => omit_by(target, predicate),
        _ => Ok(omit(target, &arguments.strings(0)?)),
    });
    register(registry, "property", |target, _| {
        let key = target.as_str().map_or_else(|| target.to_string(), str::to_owned);
        Ok(property(key).into())
    });
    register(registry, "is_equal", |target, arguments| {
        Ok(is_equal(target, arguments.get(0)).into())
    });
    register(registry, "is_match", |target, arguments| {
        Ok(is_match(target, arguments.get(0)).into())
    });
}

// =============================================================================
// Functions
// =============================================================================

fn install_functions(registry: &mut Registry) {
    register(registry, "bind", |target, arguments| {
        let function = callable("bind", target)?;
        let presets = arguments.rest(1).iter().cloned();
        Ok(bind(function, arguments.get(0).clone(), presets).into())
    });
    register(registry, "partial", |target, arguments| {
        let function = callable("partial", target)?;
        Ok(partial(function, arguments.rest(0).iter().cloned()).into())
    });
    register(registry, "memoize", |target, arguments| {
        let function = callable("memoize", target)?;
        Ok(memoize(function, arguments.optional_function(0)?).into())
    });
    register(registry, "once", |target, _| {
        Ok(once(callable("once", target)?).into())
    });
    register(registry, "negate", |target, _| {
        Ok(negate(callable("negate", target)?).into())
    });
    register(registry, "before", |target, arguments| {
        Ok(before(count("before", target)?, arguments.function(0)?).into())
    });
    register(registry, "after", |target, arguments| {
        Ok(after(count("after", target)?, arguments.function(0)?).into())
    });
    register(registry, "compose", |target, arguments| {
        let functions = iter::once(target)
            .chain(arguments.rest(0))
            .map(|value| callable("compose", value).cloned())
            .collect::<Result<Vec<Function>>>()?;
        Ok(compose(functions).into())
    });
}

// =============================================================================
// Utility
// =============================================================================

fn install_utility(registry: &mut Registry) {
    register(registry, "identity", |target, _| Ok(target.clone()));
    register(registry, "constant", |target, _| {
        Ok(constant(target.clone()).into())
    });
    register(registry, "random", |target, arguments| {
        let bound = integer(number("random", target)?);
        let drawn = match arguments.optional(0) {
            Some(max) => random(bound, integer(number("random", max)?)),
            None => random(0, bound),
        };
        Ok(drawn.into())
    });
    register(registry, "result", |target, arguments| {
        result(target, arguments.string(0)?, arguments.get(1))
    });
}
