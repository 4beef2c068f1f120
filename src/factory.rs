//! The builder factory.
//!
//! A [`BuilderFactory`] captures a [`BuilderConfig`] once and hands out
//! independent [`Builder`]s. Everything that is fixed at creation time (field
//! names, the required list, the accessor table, the diagnostic channel) lives
//! in one shared layout; each builder keeps its own state.

use std::fmt;
use std::rc::Rc;

use crate::accessors::AccessorTable;
use crate::builder::Builder;
use crate::config::BuilderConfig;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::{BuilderError, HookError, Result};
use crate::fields::{FieldNames, Fields, ObjectSource};

/// Transform applied to the assembled fields.
pub(crate) type Hook<V, T> = Rc<dyn Fn(Fields<V>) -> Result<T>>;

/// Creation-time facts shared by a factory and all of its builders.
#[derive(Clone)]
pub(crate) struct Layout {
    pub(crate) names: FieldNames,
    pub(crate) required: Vec<usize>,
    pub(crate) accessors: AccessorTable,
    pub(crate) diagnostics: Rc<dyn Diagnostics>,
}

/// Produces fluent builders for one field specification.
///
/// `V` is the field value type and `T` what [`Builder::build`] returns:
/// the assembled [`Fields`] unless a post-build hook is installed.
///
/// Defaults are captured by each builder when it is constructed, so
/// [`set_default`](Self::set_default) only affects builders created afterwards.
///
/// ```rust
/// use sugars_builder_factory::{BuilderConfig, BuilderFactory};
///
/// let create_url = BuilderFactory::new(
///     BuilderConfig::new()
///         .required("host")
///         .optional("port")
///         .with_default("protocol", "http")
///         .with_default("path", "/"),
/// )?;
///
/// let url = create_url
///     .builder()
///     .with("host", "example.com")
///     .with("port", "8080")
///     .build()?;
///
/// assert_eq!(url["protocol"], "http");
/// assert_eq!(url["port"], "8080");
/// # Ok::<(), sugars_builder_factory::BuilderError>(())
/// ```
pub struct BuilderFactory<V, T = Fields<V>> {
    layout: Rc<Layout>,
    hook: Hook<V, T>,
    defaults: Rc<Vec<Option<V>>>,
}

impl<V: Clone + 'static> BuilderFactory<V> {
    /// Creates a factory, failing with [`BuilderError::Configuration`] when
    /// no configuration is supplied.
    pub fn new(config: impl Into<Option<BuilderConfig<V>>>) -> Result<Self> {
        let config = config.into().ok_or(BuilderError::Configuration)?;
        let names = config.field_names();
        let (required, defaults) = config.into_parts();

        let mut required_slots = Vec::with_capacity(required.len());
        for name in required.as_slice() {
            if let Some(slot) = names.slot(name) {
                if !required_slots.contains(&slot) {
                    required_slots.push(slot);
                }
            }
        }

        let mut default_slots = vec![None; names.len()];
        for (name, value) in defaults {
            if let Some(slot) = names.slot(&name) {
                default_slots[slot] = Some(value);
            }
        }

        let accessors = AccessorTable::for_fields(&names);
        log::debug!(
            "builder factory registered {} fields ({} required, {} accessors)",
            names.len(),
            required_slots.len(),
            accessors.len()
        );

        Ok(Self {
            layout: Rc::new(Layout {
                names,
                required: required_slots,
                accessors,
                diagnostics: Rc::new(LogDiagnostics),
            }),
            hook: Rc::new(|fields: Fields<V>| -> Result<Fields<V>> { Ok(fields) }),
            defaults: Rc::new(default_slots),
        })
    }

    /// Creates a factory from a JSON configuration document.
    ///
    /// A falsy document (`null`, `false`, `0`, `""`) is treated as a
    /// missing configuration.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self>
    where
        V: serde::de::DeserializeOwned,
    {
        use serde::Deserialize;
        use serde_json::Value;

        let document: Value = serde_json::from_str(json)?;
        let absent = match &document {
            Value::Null => true,
            Value::Bool(flag) => !flag,
            Value::Number(number) => number.as_f64() == Some(0.0),
            Value::String(text) => text.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        };
        if absent {
            return Err(BuilderError::Configuration);
        }
        Self::new(BuilderConfig::<V>::deserialize(document)?)
    }
}

impl<V: Clone + 'static, T: 'static> BuilderFactory<V, T> {
    /// Installs a transform applied to the assembled fields on every build.
    ///
    /// The hook decides the build output type and replaces any earlier hook.
    pub fn with_post_build_hook<U, F>(self, hook: F) -> BuilderFactory<V, U>
    where
        U: 'static,
        F: Fn(Fields<V>) -> U + 'static,
    {
        BuilderFactory {
            layout: self.layout,
            hook: Rc::new(move |fields: Fields<V>| -> Result<U> { Ok(hook(fields)) }),
            defaults: self.defaults,
        }
    }

    /// Installs a transform that may reject the assembled fields.
    ///
    /// Rejections surface as [`BuilderError::PostBuild`].
    pub fn with_fallible_post_build_hook<U, E, F>(self, hook: F) -> BuilderFactory<V, U>
    where
        U: 'static,
        E: Into<HookError>,
        F: Fn(Fields<V>) -> std::result::Result<U, E> + 'static,
    {
        BuilderFactory {
            layout: self.layout,
            hook: Rc::new(move |fields: Fields<V>| -> Result<U> {
                hook(fields).map_err(|e| BuilderError::PostBuild(e.into()))
            }),
            defaults: self.defaults,
        }
    }

    /// Replaces the channel that receives unknown-key warnings.
    pub fn with_diagnostics(self, diagnostics: impl Diagnostics + 'static) -> Self {
        let layout = Layout {
            diagnostics: Rc::new(diagnostics),
            ..Layout::clone(&self.layout)
        };
        Self {
            layout: Rc::new(layout),
            ..self
        }
    }

    /// Changes the default for `name` in builders constructed from now on.
    ///
    /// The field set is fixed at creation; unknown names are reported and ignored.
    pub fn set_default(&mut self, name: &str, value: impl Into<V>) -> &mut Self {
        match self.layout.names.slot(name) {
            Some(slot) => Rc::make_mut(&mut self.defaults)[slot] = Some(value.into()),
            None => self.layout.diagnostics.unknown_field(name),
        }
        self
    }

    /// A builder with no explicit values; defaults apply at build time.
    pub fn builder(&self) -> Builder<V, T> {
        Builder::new(
            Rc::clone(&self.layout),
            Rc::clone(&self.hook),
            Rc::clone(&self.defaults),
        )
    }

    /// A builder pre-populated from `object`, see [`Builder::read_from_object`].
    pub fn builder_from_object<S>(&self, object: &S) -> Builder<V, T>
    where
        S: ObjectSource<V> + ?Sized,
    {
        self.builder().read_from_object(object)
    }

    /// A builder pre-populated from `getter`, see [`Builder::read_from_getter_function`].
    pub fn builder_from_getter<F>(&self, getter: F) -> Builder<V, T>
    where
        F: FnMut(&str) -> Option<V>,
    {
        self.builder().read_from_getter_function(getter)
    }

    /// Every field name: required, then optional, then defaults-only.
    pub fn field_names(&self) -> &FieldNames {
        &self.layout.names
    }

    /// Required field names in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.layout
            .required
            .iter()
            .filter_map(|&slot| self.layout.names.get(slot))
            .collect()
    }

    /// Generated accessor names (`withHost`, `withoutHost`, ...).
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.layout.accessors.methods()
    }

    /// Current default for `name`.
    pub fn default_value(&self, name: &str) -> Option<&V> {
        self.layout
            .names
            .slot(name)
            .and_then(|slot| self.defaults[slot].as_ref())
    }
}

impl<V, T> Clone for BuilderFactory<V, T> {
    fn clone(&self) -> Self {
        Self {
            layout: Rc::clone(&self.layout),
            hook: Rc::clone(&self.hook),
            defaults: Rc::clone(&self.defaults),
        }
    }
}

impl<V, T> fmt::Debug for BuilderFactory<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderFactory")
            .field("fields", &self.layout.names)
            .field("required", &self.layout.required)
            .finish_non_exhaustive()
    }
}
