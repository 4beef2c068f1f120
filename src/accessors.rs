//! Generated accessor names.
//!
//! Every field gets a `with<Name>` setter and a `without<Name>` unsetter.
//! The table maps those method names back to field slots once, when the
//! factory is created, so builders can dispatch them by name at runtime.

use hashbrown::HashMap;

use crate::fields::{setter_name, unsetter_name, FieldNames};

/// What a generated accessor does to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// `with<Name>(value)`: assigns the field.
    Setter,
    /// `without<Name>()`: clears the explicit value.
    Unsetter,
}

/// A resolved accessor: which field, and how it is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accessor {
    slot: usize,
    kind: AccessorKind,
}

impl Accessor {
    /// Field slot the accessor targets.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Setter or unsetter.
    #[inline]
    pub fn kind(&self) -> AccessorKind {
        self.kind
    }
}

/// Method name to accessor lookup for one factory.
#[derive(Debug, Clone, Default)]
pub struct AccessorTable {
    methods: Vec<String>,
    by_method: HashMap<String, Accessor>,
}

impl AccessorTable {
    /// Builds the setter/unsetter pair for every field.
    ///
    /// Two fields that differ only in the case of their first letter
    /// (`host` / `Host`) share method names; the later field takes them over.
    pub fn for_fields(names: &FieldNames) -> Self {
        let mut table = AccessorTable::default();
        for (slot, name) in names.iter().enumerate() {
            table.register(setter_name(name), slot, AccessorKind::Setter);
            table.register(unsetter_name(name), slot, AccessorKind::Unsetter);
        }
        table
    }

    fn register(&mut self, method: String, slot: usize, kind: AccessorKind) {
        let accessor = Accessor { slot, kind };
        if let Some(existing) = self.by_method.get_mut(method.as_str()) {
            log::debug!("accessor {method} regenerated for field slot {slot}");
            *existing = accessor;
            return;
        }
        self.by_method.insert(method.clone(), accessor);
        self.methods.push(method);
    }

    /// Accessor generated under `method`, if any.
    #[inline]
    pub fn resolve(&self, method: &str) -> Option<Accessor> {
        self.by_method.get(method).copied()
    }

    /// Generated method names, setter before unsetter, in field order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    /// Number of generated accessors.
    #[inline]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether no accessor was generated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
