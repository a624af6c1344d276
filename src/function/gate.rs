//! Call-count gates.

use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex};
use smallvec::SmallVec;

use crate::value::{Function, Value};

struct Remembered {
    remaining: usize,
    /// Threads currently inside a counted call.
    running: SmallVec<[ThreadId; 1]>,
    last: Value,
}

struct Gate {
    state: Mutex<Remembered>,
    settled: Condvar,
}

/// Marks a counted call in flight until dropped.
struct Running<'a> {
    gate: &'a Gate,
    thread: ThreadId,
}

impl Drop for Running<'_> {
    fn drop(&mut self) {
        let mut state = self.gate.state.lock();
        if let Some(position) = state.running.iter().position(|thread| *thread == self.thread) {
            state.running.swap_remove(position);
        }
        drop(state);
        self.gate.settled.notify_all();
    }
}

/// Calls `function` on the first `count` invocations only.
///
/// Later invocations return the result of the last real call without
/// calling again. With a `count` of zero `function` never runs and every
/// invocation returns `undefined`.
///
/// A later invocation made while counted calls are still running on other
/// threads blocks until they finish. A re-entrant invocation from inside
/// `function` returns the last finished result immediately.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use underbar::function::before;
/// use underbar::{Function, Value};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let next = Function::new(move |_, _| Ok(Value::from(counter.fetch_add(1, Ordering::SeqCst))));
///
/// let limited = before(2, &next);
/// let results: Vec<Value> = (0..4).map(|_| limited.invoke(&[]).unwrap()).collect();
/// assert_eq!(results, vec![Value::from(0), Value::from(1), Value::from(1), Value::from(1)]);
/// ```
pub fn before(count: usize, function: &Function) -> Function {
    let function = function.clone();
    let gate = Arc::new(Gate {
        state: Mutex::new(Remembered {
            remaining: count,
            running: SmallVec::new(),
            last: Value::Undefined,
        }),
        settled: Condvar::new(),
    });
    Function::new(move |this, arguments| {
        let current = thread::current().id();
        let running = {
            let mut state = gate.state.lock();
            if state.remaining == 0 {
                while !state.running.is_empty() && !state.running.contains(&current) {
                    gate.settled.wait(&mut state);
                }
                return Ok(state.last.clone());
            }
            state.remaining -= 1;
            state.running.push(current);
            Running {
                gate: &gate,
                thread: current,
            }
        };
        let result = function.call(this, arguments)?;
        gate.state.lock().last = result.clone();
        drop(running);
        Ok(result)
    })
}

/// Calls `function` once; every later invocation returns the first result.
///
/// # Examples
///
/// ```rust
/// use underbar::function::once;
/// use underbar::{Function, Value};
///
/// let echo = Function::unary(|value| Ok(value.clone()));
/// let first_only = once(&echo);
/// assert_eq!(first_only.invoke(&[Value::from("a")]).unwrap(), Value::from("a"));
/// assert_eq!(first_only.invoke(&[Value::from("b")]).unwrap(), Value::from("a"));
/// ```
pub fn once(function: &Function) -> Function {
    before(1, function)
}

/// Returns `undefined` for the first `count` invocations, then calls through.
///
/// # Examples
///
/// ```rust
/// use underbar::function::after;
/// use underbar::{Function, Value};
///
/// let done = Function::new(|_, _| Ok(Value::from("done")));
/// let last_of_two = after(2, &done);
/// assert_eq!(last_of_two.invoke(&[]).unwrap(), Value::Undefined);
/// assert_eq!(last_of_two.invoke(&[]).unwrap(), Value::Undefined);
/// assert_eq!(last_of_two.invoke(&[]).unwrap(), Value::from("done"));
/// ```
pub fn after(count: usize, function: &Function) -> Function {
    let function = function.clone();
    let remaining = Arc::new(Mutex::new(count));
    Function::new(move |this, arguments| {
        {
            let mut remaining = remaining.lock();
            if *remaining > 0 {
                *remaining -= 1;
                return Ok(Value::Undefined);
            }
        }
        function.call(this, arguments)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (Function, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let function = Function::new(move |_, _| {
            Ok(Value::from(counter.fetch_add(1, Ordering::SeqCst)))
        });
        (function, calls)
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(10, 5)]
    fn test_before_call_counts(#[case] count: usize, #[case] expected: usize) {
        let (function, calls) = counting();
        let limited = before(count, &function);
        for _ in 0..5 {
            limited.invoke(&[]).unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), expected);
    }

    #[rstest]
    fn test_before_zero_returns_undefined() {
        let (function, _) = counting();
        assert_eq!(before(0, &function).invoke(&[]).unwrap(), Value::Undefined);
    }

    #[rstest]
    #[case(0, 5)]
    #[case(2, 3)]
    #[case(7, 0)]
    fn test_after_call_counts(#[case] count: usize, #[case] expected: usize) {
        let (function, calls) = counting();
        let delayed = after(count, &function);
        for _ in 0..5 {
            delayed.invoke(&[]).unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), expected);
    }

    #[rstest]
    fn test_before_passes_this_through() {
        let this_of = Function::new(|this, _| Ok(this.clone()));
        let limited = before(1, &this_of);
        assert_eq!(limited.call(&Value::from(3), &[]).unwrap(), Value::from(3));
        assert_eq!(limited.call(&Value::from(4), &[]).unwrap(), Value::from(3));
    }

    #[rstest]
    fn test_latecomer_waits_for_the_running_call() {
        let slow = Function::new(|_, _| {
            thread::sleep(std::time::Duration::from_millis(50));
            Ok(Value::from(7))
        });
        let first_only = once(&slow);

        let results: Vec<Value> = thread::scope(|scope| {
            let workers: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| first_only.invoke(&[]).unwrap()))
                .collect();
            workers.into_iter().map(|worker| worker.join().unwrap()).collect()
        });

        assert_eq!(results, vec![Value::from(7); 4]);
    }

    #[rstest]
    fn test_reentrant_call_does_not_block() {
        let slot: Arc<Mutex<Option<Function>>> = Arc::new(Mutex::new(None));
        let inner = Arc::clone(&slot);
        let recursive = Function::new(move |_, _| {
            let gated = inner.lock().clone().unwrap();
            let nested = gated.invoke(&[])?;
            Ok(Value::from(nested.is_undefined()))
        });
        let first_only = once(&recursive);
        *slot.lock() = Some(first_only.clone());

        assert_eq!(first_only.invoke(&[]).unwrap(), Value::Bool(true));
        assert_eq!(first_only.invoke(&[]).unwrap(), Value::Bool(true));
    }

    #[rstest]
    fn test_failed_call_still_counts() {
        let failing = Function::new(|_, _| Err(Error::thrown("nope")));
        let first_only = once(&failing);
        assert!(first_only.invoke(&[]).is_err());
        assert_eq!(first_only.invoke(&[]).unwrap(), Value::Undefined);
    }
}
