//! Delayed and deferred calls on the ambient tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// Handle on a scheduled call.
///
/// Dropping the handle does not cancel the call; use [`TaskHandle::cancel`].
#[derive(Debug)]
pub struct TaskHandle {
    task: JoinHandle<Result<Value>>,
}

impl TaskHandle {
    /// Prevents the call from running if it has not started yet.
    ///
    /// A function that has already started runs to completion.
    pub fn cancel(&self) {
        tracing::debug!("cancelling scheduled call");
        self.task.abort();
    }

    /// Returns `true` once the call has completed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the call and returns its result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the call was cancelled,
    /// [`Error::Scheduler`] if the task panicked, and otherwise whatever
    /// error the function raised.
    pub async fn join(self) -> Result<Value> {
        match self.task.await {
            Ok(result) => result,
            Err(error) if error.is_cancelled() => Err(Error::Cancelled),
            Err(error) => Err(Error::Scheduler(error.to_string())),
        }
    }
}

fn runtime(operation: &'static str) -> Result<Handle> {
    Handle::try_current().map_err(|error| {
        tracing::warn!(operation, error = %error, "no tokio runtime to schedule on");
        Error::Scheduler(error.to_string())
    })
}

/// Calls `function(arguments...)` once at least `wait` has elapsed.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns [`Error::Scheduler`] when no runtime is available.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::function::delay;
/// use underbar::{Function, Value};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let echo = Function::unary(|value| Ok(value.clone()));
/// let handle = delay(&echo, Duration::from_millis(5), vec![Value::from("later")]).unwrap();
/// assert_eq!(handle.join().await.unwrap(), Value::from("later"));
/// # }
/// ```
pub fn delay(function: &Function, wait: Duration, arguments: Vec<Value>) -> Result<TaskHandle> {
    let runtime = runtime("delay")?;
    let function = function.clone();
    let task = runtime.spawn(async move {
        tokio::time::sleep(wait).await;
        function.invoke(&arguments)
    });
    tracing::debug!(wait = ?wait, "scheduled delayed call");
    Ok(TaskHandle { task })
}

/// Calls `function(arguments...)` as soon as the current task yields.
///
/// # Errors
///
/// Returns [`Error::Scheduler`] when no runtime is available.
pub fn defer(function: &Function, arguments: Vec<Value>) -> Result<TaskHandle> {
    let runtime = runtime("defer")?;
    let function = function.clone();
    let task = runtime.spawn(async move {
        tokio::task::yield_now().await;
        function.invoke(&arguments)
    });
    tracing::debug!("scheduled deferred call");
    Ok(TaskHandle { task })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_scheduling_outside_a_runtime_fails() {
        let noop = Function::new(|_, _| Ok(Value::Undefined));
        assert!(matches!(
            delay(&noop, Duration::from_millis(1), Vec::new()),
            Err(Error::Scheduler(_))
        ));
        assert!(matches!(defer(&noop, Vec::new()), Err(Error::Scheduler(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_defer_runs_after_yield() {
        let echo = Function::unary(|value| Ok(value.clone()));
        let handle = defer(&echo, vec![Value::from(1)]).unwrap();
        assert_eq!(handle.join().await, Ok(Value::from(1)));
    }
}
