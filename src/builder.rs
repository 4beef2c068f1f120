//! Builder instances produced by a [`BuilderFactory`](crate::BuilderFactory).

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::accessors::AccessorKind;
use crate::error::{BuilderError, Result};
use crate::factory::{Hook, Layout};
use crate::fields::{Fields, ObjectSource};

/// A fluent builder for one factory's field specification.
///
/// Explicit values take precedence over defaults; fields with neither are
/// left out of the output. Defaults are kept apart from explicit state, so
/// [`without`](Self::without) reverts a field to its default instead of
/// dropping it.
///
/// Cloning a builder copies its state shallowly: both builders own their
/// field assignments, while the values themselves are cloned handles.
///
/// ```rust
/// use sugars_builder_factory::{BuilderConfig, BuilderFactory};
///
/// let names = BuilderFactory::<&str>::new(
///     BuilderConfig::new().optional(["firstName", "lastName", "middleName"]),
/// )?;
///
/// let name = names
///     .builder()
///     .with("firstName", "abc")
///     .with("lastName", "def")
///     .with("middleName", "embarrassing")
///     .without("middleName")
///     .build()?;
///
/// assert_eq!(name.len(), 2);
/// assert!(!name.contains_key("middleName"));
/// # Ok::<(), sugars_builder_factory::BuilderError>(())
/// ```
pub struct Builder<V, T = Fields<V>> {
    layout: Rc<Layout>,
    hook: Hook<V, T>,
    defaults: Rc<Vec<Option<V>>>,
    state: Vec<Option<V>>,
}

impl<V: Clone, T> Builder<V, T> {
    pub(crate) fn new(layout: Rc<Layout>, hook: Hook<V, T>, defaults: Rc<Vec<Option<V>>>) -> Self {
        let state = vec![None; layout.names.len()];
        Self {
            layout,
            hook,
            defaults,
            state,
        }
    }

    /// Assigns `name` in place. Unknown names are reported and ignored.
    ///
    /// Returns whether the field was assigned.
    pub fn set(&mut self, name: &str, value: impl Into<V>) -> bool {
        match self.layout.names.slot(name) {
            Some(slot) => {
                self.state[slot] = Some(value.into());
                true
            }
            None => {
                self.layout.diagnostics.unknown_field(name);
                false
            }
        }
    }

    /// Clears the explicit value of `name` in place, returning it.
    pub fn unset(&mut self, name: &str) -> Option<V> {
        let slot = self.layout.names.slot(name)?;
        self.state[slot].take()
    }

    /// Assigns a field by name.
    ///
    /// Any value is accepted, empty strings and zeroes included. A name the
    /// factory does not know produces one diagnostic and leaves the builder
    /// unchanged.
    pub fn with(mut self, name: &str, value: impl Into<V>) -> Self {
        self.set(name, value);
        self
    }

    /// Clears a field so it falls back to its default, if any.
    pub fn without(mut self, name: &str) -> Self {
        self.unset(name);
        self
    }

    /// Calls `getter` once per field and assigns every value it returns.
    ///
    /// `None` leaves the field as it was.
    pub fn read_from_getter_function<F>(mut self, mut getter: F) -> Self
    where
        F: FnMut(&str) -> Option<V>,
    {
        let layout = Rc::clone(&self.layout);
        for (slot, name) in layout.names.iter().enumerate() {
            if let Some(value) = getter(name) {
                self.state[slot] = Some(value);
            }
        }
        self
    }

    /// Assigns every field present in `object`; absent keys are left as they were.
    pub fn read_from_object<S>(self, object: &S) -> Self
    where
        S: ObjectSource<V> + ?Sized,
    {
        self.read_from_getter_function(|name| object.lookup(name))
    }

    /// Runs a generated accessor by its method name.
    ///
    /// `with<Name>` needs a value; `without<Name>` ignores `value`.
    ///
    /// ```rust
    /// use sugars_builder_factory::{BuilderConfig, BuilderFactory};
    ///
    /// let factory = BuilderFactory::new(BuilderConfig::new().required("queryString"))?;
    /// let mut builder = factory.builder();
    /// builder.invoke("withQueryString", Some("a=b"))?;
    ///
    /// assert_eq!(builder.value("queryString"), Some(&"a=b"));
    /// # Ok::<(), sugars_builder_factory::BuilderError>(())
    /// ```
    pub fn invoke(&mut self, method: &str, value: Option<V>) -> Result<&mut Self> {
        let accessor =
            self.layout
                .accessors
                .resolve(method)
                .ok_or_else(|| BuilderError::UnknownAccessor {
                    method: method.to_string(),
                })?;

        match accessor.kind() {
            AccessorKind::Setter => {
                let value = value.ok_or_else(|| BuilderError::MissingArgument {
                    method: method.to_string(),
                })?;
                self.state[accessor.slot()] = Some(value);
            }
            AccessorKind::Unsetter => {
                self.state[accessor.slot()] = None;
            }
        }
        Ok(self)
    }

    /// Value the field would be built with: explicit, else default.
    pub fn value(&self, name: &str) -> Option<&V> {
        let slot = self.layout.names.slot(name)?;
        self.effective(slot)
    }

    fn effective(&self, slot: usize) -> Option<&V> {
        self.state[slot].as_ref().or(self.defaults[slot].as_ref())
    }

    /// Required fields with neither a value nor a default, in declaration order.
    pub fn list_missing_fields(&self) -> Vec<String> {
        self.layout
            .required
            .iter()
            .filter(|&&slot| self.effective(slot).is_none())
            .filter_map(|&slot| self.layout.names.get(slot))
            .map(str::to_string)
            .collect()
    }

    /// Whether every required field has a value or a default.
    pub fn validate(&self) -> bool {
        self.list_missing_fields().is_empty()
    }

    /// Validates, then assembles.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Validation`] naming every missing field, or whatever
    /// the post-build hook reports.
    pub fn build(&self) -> Result<T> {
        let missing = self.list_missing_fields();
        if !missing.is_empty() {
            return Err(BuilderError::Validation { missing });
        }
        self.build_without_validating()
    }

    /// Assembles a fresh [`Fields`] map and runs the post-build hook, skipping validation.
    pub fn build_without_validating(&self) -> Result<T> {
        let mut fields = Fields::with_capacity(self.state.len());
        for (slot, name) in self.layout.names.iter().enumerate() {
            if let Some(value) = self.effective(slot) {
                fields.insert(name.to_string(), value.clone());
            }
        }
        log::trace!(
            "assembled {} of {} fields",
            fields.len(),
            self.layout.names.len()
        );
        (self.hook)(fields)
    }

    /// Field names known to this builder.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.layout.names.iter()
    }

    /// Generated accessor names usable with [`invoke`](Self::invoke).
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.layout.accessors.methods()
    }
}

impl<V: Clone, T> Clone for Builder<V, T> {
    fn clone(&self) -> Self {
        Self {
            layout: Rc::clone(&self.layout),
            hook: Rc::clone(&self.hook),
            defaults: Rc::clone(&self.defaults),
            state: self.state.clone(),
        }
    }
}

impl<V: fmt::Debug, T> fmt::Debug for Builder<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assigned: BTreeMap<&str, &V> = self
            .state
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| Some((self.layout.names.get(slot)?, value.as_ref()?)))
            .collect();
        f.debug_struct("Builder")
            .field("state", &assigned)
            .finish_non_exhaustive()
    }
}
