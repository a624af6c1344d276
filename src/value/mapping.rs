//! Insertion-ordered mappings with an optional prototype.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use super::Value;

/// A key/value mapping.
///
/// Own entries keep their insertion order, which is the enumeration order
/// used by every traversal. A mapping may inherit from a prototype: lookups
/// ([`get`](Self::get), [`has`](Self::has)) walk the prototype chain, while
/// enumeration ([`keys`](Self::keys), [`iter`](Self::iter)) only sees own
/// entries. [`all_keys`](Self::all_keys) is the one operation that
/// enumerates inherited keys too.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use underbar::{Mapping, Value};
///
/// let base = Mapping::new().with("greeting", "hi");
/// let derived = Mapping::inheriting(Arc::new(base)).with("name", "moe");
///
/// assert_eq!(derived.get("greeting"), Some(&Value::from("hi")));
/// assert_eq!(derived.keys().collect::<Vec<_>>(), vec!["name"]);
/// assert_eq!(derived.all_keys(), vec!["name".to_string(), "greeting".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
    prototype: Option<Arc<Mapping>>,
}

impl Mapping {
    /// Creates an empty mapping with no prototype.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping inheriting from `prototype`.
    pub fn inheriting(prototype: Arc<Self>) -> Self {
        Self {
            entries: IndexMap::new(),
            prototype: Some(prototype),
        }
    }

    /// Inserts an own entry, returning the previous own value for the key.
    ///
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks a key up along the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .get(key)
            .or_else(|| self.prototype.as_ref().and_then(|prototype| prototype.get(key)))
    }

    /// Looks a key up among own entries only.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the key is present along the prototype chain.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the key is an own entry.
    pub fn has_own(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of own entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no own entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the prototype, if any.
    pub const fn prototype(&self) -> Option<&Arc<Self>> {
        self.prototype.as_ref()
    }

    /// Iterates own keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates own values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates own entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns own keys followed by inherited keys, nearest prototype first.
    ///
    /// A key shadowed by a nearer mapping is listed once.
    pub fn all_keys(&self) -> Vec<String> {
        let Some(prototype) = self.prototype.as_deref() else {
            return self.entries.keys().cloned().collect();
        };
        let mut keys: IndexSet<String> = self.entries.keys().cloned().collect();
        let mut current = Some(prototype);
        while let Some(mapping) = current {
            for key in mapping.keys() {
                if !keys.contains(key) {
                    keys.insert(key.to_string());
                }
            }
            current = mapping.prototype.as_deref();
        }
        keys.into_iter().collect()
    }

    /// Returns every enumerable entry, own and inherited, in
    /// [`all_keys`](Self::all_keys) order, each resolved to its nearest value.
    pub fn all_entries(&self) -> Vec<(String, Value)> {
        self.all_keys()
            .into_iter()
            .filter_map(|key| {
                let value = self.get(&key)?.clone();
                Some((key, value))
            })
            .collect()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.entries.get(key) == Some(value))
            && self.prototype == other.prototype
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        Self {
            entries: iterator
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            prototype: None,
        }
    }
}
