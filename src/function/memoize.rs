//! Result caching keyed by a string form of the arguments.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::value::{Function, Value, argument};

/// Handle on the cache of one memoized function.
///
/// Returned by [`memoize_with_cache`]. The handle shares storage with the
/// function it came from and is read-only.
#[derive(Clone, Default)]
pub struct MemoCache {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoCache {
    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns `true` if a result is cached under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns the result cached under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().get(key).cloned()
    }

    fn store(&self, key: String, value: Value) -> Value {
        self.entries.lock().entry(key).or_insert(value).clone()
    }
}

impl fmt::Debug for MemoCache {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("len", &self.len())
            .finish()
    }
}

/// Caches results by key.
///
/// The key is the string form of `hasher(arguments...)` when a hasher is
/// given, otherwise the string form of the first argument. A hit returns the
/// cached result without calling `function`; errors are not cached.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use underbar::function::memoize;
/// use underbar::{Function, Value};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let square = Function::unary(move |value| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok(Value::from(value.to_number() * value.to_number()))
/// });
///
/// let cached = memoize(&square, None);
/// assert_eq!(cached.invoke(&[Value::from(9)]).unwrap(), Value::from(81));
/// assert_eq!(cached.invoke(&[Value::from(9)]).unwrap(), Value::from(81));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub fn memoize(function: &Function, hasher: Option<&Function>) -> Function {
    memoize_with_cache(function, hasher).0
}

/// [`memoize`], also returning a handle on the cache.
///
/// The cache lock is released while `function` runs, so a memoized
/// function may call itself.
///
/// # Examples
///
/// ```rust
/// use underbar::function::memoize_with_cache;
/// use underbar::{Function, Value};
///
/// let upper = Function::unary(|value| Ok(Value::from(value.to_string().to_uppercase())));
/// let (cached, cache) = memoize_with_cache(&upper, None);
/// cached.invoke(&[Value::from("moe")]).unwrap();
///
/// assert_eq!(cache.len(), 1);
/// assert_eq!(cache.get("moe"), Some(Value::from("MOE")));
/// ```
pub fn memoize_with_cache(function: &Function, hasher: Option<&Function>) -> (Function, MemoCache) {
    let cache = MemoCache::default();
    let shared = cache.clone();
    let function = function.clone();
    let hasher = hasher.cloned();

    let memoized = Function::new(move |this, arguments| {
        let key = match &hasher {
            Some(hasher) => hasher.call(this, arguments)?.to_string(),
            None => argument(arguments, 0).to_string(),
        };
        if let Some(hit) = shared.get(&key) {
            return Ok(hit);
        }
        tracing::trace!(key = %key, "memo cache miss");
        let computed = function.call(this, arguments)?;
        Ok(shared.store(key, computed))
    });
    (memoized, cache)
}
