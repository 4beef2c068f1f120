//! Field names, accessor naming and the objects builders can read from.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap as StdHashMap};
use std::hash::{BuildHasher, Hash};

use hashbrown::HashMap;

/// The mapping produced by assembling a builder.
///
/// Each build returns a fresh map. The values inside are clones of the
/// stored handles, so reference-like values (`Rc`, `Arc`) stay shared with
/// whatever the caller originally supplied.
pub type Fields<V> = HashMap<String, V>;

/// Prefix of generated setter names.
pub const SETTER_PREFIX: &str = "with";
/// Prefix of generated unsetter names.
pub const UNSETTER_PREFIX: &str = "without";

/// Uppercases the first character and leaves the rest untouched.
///
/// ```rust
/// use sugars_builder_factory::fields::capitalize;
///
/// assert_eq!(capitalize("queryString"), "QueryString");
/// assert_eq!(capitalize("host"), "Host");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Name of the generated setter for `field` (`host` -> `withHost`).
pub fn setter_name(field: &str) -> String {
    format!("{SETTER_PREFIX}{}", capitalize(field))
}

/// Name of the generated unsetter for `field` (`host` -> `withoutHost`).
pub fn unsetter_name(field: &str) -> String {
    format!("{UNSETTER_PREFIX}{}", capitalize(field))
}

/// An insertion-ordered, deduplicated set of field names.
///
/// Position in the set is the field's slot in builder state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldNames {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FieldNames {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` unless already present and returns its slot.
    pub fn insert(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&slot) = self.index.get(name.as_str()) {
            return slot;
        }
        let slot = self.names.len();
        self.index.insert(name.clone(), slot);
        self.names.push(name);
        slot
    }

    /// Slot of `name`, if registered.
    #[inline]
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether `name` is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Name stored at `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.names.get(slot).map(String::as_str)
    }

    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = FieldNames::new();
        for name in iter {
            names.insert(name);
        }
        names
    }
}

/// Anything a builder can read field values from by name.
///
/// A key that is absent reads as `None` and leaves the builder untouched.
pub trait ObjectSource<V> {
    /// Value stored under `name`, if any.
    fn lookup(&self, name: &str) -> Option<V>;
}

impl<K, V, S> ObjectSource<V> for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<K, V, S> ObjectSource<V> for StdHashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<K, V> ObjectSource<V> for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Clone,
{
    fn lookup(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

#[cfg(feature = "json")]
impl ObjectSource<serde_json::Value> for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, name: &str) -> Option<serde_json::Value> {
        self.get(name).cloned()
    }
}
