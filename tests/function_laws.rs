#![cfg(feature = "function")]
//! Property-based tests for the function combinators.
//!
//! 1. **Memoize Once Per Key**: the wrapped function runs once per distinct key,
//!    however many times and in whatever order the keys are requested.
//! 2. **Before Count**: `before(n, f)` runs `f` exactly `min(n, calls)` times.
//! 3. **After Count**: `after(n, f)` runs `f` exactly `calls - min(n, calls)` times.
//! 4. **Compose Identity**: composing with an identity function changes nothing.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use underbar::function::{after, before, compose, memoize};
use underbar::{Function, Value};

fn counted() -> (Function, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let square = Function::unary(move |value| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Value::from(value.to_number() * value.to_number()))
    });
    (square, calls)
}

proptest! {
    #[test]
    fn prop_memoize_runs_once_per_key(requests in prop::collection::vec(0i32..10, 0..50)) {
        let (square, calls) = counted();
        let cached = memoize(&square, None);

        for request in &requests {
            let result = cached.invoke(&[Value::from(*request)]).unwrap();
            prop_assert_eq!(result, Value::from(request * request));
        }

        let distinct: BTreeSet<i32> = requests.iter().copied().collect();
        prop_assert_eq!(calls.load(Ordering::SeqCst), distinct.len());
    }

    #[test]
    fn prop_before_runs_at_most_count_times(count in 0usize..8, invocations in 0usize..16) {
        let (square, calls) = counted();
        let limited = before(count, &square);
        for _ in 0..invocations {
            limited.invoke(&[Value::from(2)]).unwrap();
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), count.min(invocations));
    }

    #[test]
    fn prop_after_skips_count_calls(count in 0usize..8, invocations in 0usize..16) {
        let (square, calls) = counted();
        let delayed = after(count, &square);
        let results: Vec<Value> = (0..invocations)
            .map(|_| delayed.invoke(&[Value::from(3)]).unwrap())
            .collect();

        prop_assert_eq!(calls.load(Ordering::SeqCst), invocations - count.min(invocations));
        for (index, result) in results.iter().enumerate() {
            let expected = if index < count { Value::Undefined } else { Value::from(9) };
            prop_assert_eq!(result, &expected);
        }
    }

    #[test]
    fn prop_compose_with_identity(input in -1000i32..1000) {
        let (square, _) = counted();
        let identity = Function::unary(|value| Ok(value.clone()));
        let left = compose([identity.clone(), square.clone()]);
        let right = compose([square.clone(), identity]);

        let expected = square.invoke(&[Value::from(input)]).unwrap();
        prop_assert_eq!(left.invoke(&[Value::from(input)]).unwrap(), expected.clone());
        prop_assert_eq!(right.invoke(&[Value::from(input)]).unwrap(), expected);
    }
}
