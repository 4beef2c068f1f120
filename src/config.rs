//! Declarative field specifications handed to a [`BuilderFactory`](crate::BuilderFactory).
//!
//! A configuration lists required fields, optional fields and default values.
//! It can be assembled fluently in Rust or, with the `json` feature, loaded
//! from a JSON document:
//!
//! ```rust
//! # #[cfg(feature = "json")] {
//! use sugars_builder_factory::BuilderConfig;
//!
//! let config: BuilderConfig<serde_json::Value> = serde_json::from_str(r#"{
//!     "required": "host",
//!     "optional": ["port", "queryString"],
//!     "defaults": { "protocol": "http", "path": "/" }
//! }"#).unwrap();
//!
//! assert_eq!(config.required_fields(), ["host"]);
//! # }
//! ```

use crate::fields::FieldNames;

#[cfg(feature = "json")]
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
#[cfg(feature = "json")]
use serde::Deserialize;
#[cfg(feature = "json")]
use std::fmt;
#[cfg(feature = "json")]
use std::marker::PhantomData;

/// An ordered list of field names.
///
/// A bare string is treated as a one-element list, so `"host"` and
/// `["host"]` describe the same fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(Vec<String>);

impl FieldList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names in declaration order.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn extend(&mut self, other: FieldList) {
        self.0.extend(other.0);
    }
}

impl From<&str> for FieldList {
    #[inline]
    fn from(name: &str) -> Self {
        FieldList(vec![name.to_string()])
    }
}

impl From<String> for FieldList {
    #[inline]
    fn from(name: String) -> Self {
        FieldList(vec![name])
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldList {
    #[inline]
    fn from(names: Vec<S>) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FieldList {
    #[inline]
    fn from(names: [S; N]) -> Self {
        names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldList(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "json")]
impl<'de> Deserialize<'de> for FieldList {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct ListVisitor;
        impl<'de> Visitor<'de> for ListVisitor {
            type Value = FieldList;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, a field name, or a sequence of field names")
            }

            #[inline]
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldList::new())
            }

            #[inline]
            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldList::new())
            }

            #[inline]
            fn visit_str<E>(self, name: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FieldList::from(name))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut names = Vec::new();
                while let Some(name) = seq.next_element::<String>()? {
                    names.push(name);
                }
                Ok(FieldList(names))
            }
        }

        de.deserialize_any(ListVisitor)
    }
}

/// Default values in declaration order.
///
/// Setting a name twice replaces the value but keeps the first position.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValues<V>(Vec<(String, V)>);

impl<V> Default for DefaultValues<V> {
    fn default() -> Self {
        DefaultValues(Vec::new())
    }
}

impl<V> DefaultValues<V> {
    /// Sets the default for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    /// Default for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of defaults.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no defaults are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names and values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for DefaultValues<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut defaults = DefaultValues::default();
        for (name, value) in iter {
            defaults.insert(name, value);
        }
        defaults
    }
}

impl<V> IntoIterator for DefaultValues<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(feature = "json")]
impl<'de, V: Deserialize<'de>> Deserialize<'de> for DefaultValues<V> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);
        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = DefaultValues<V>;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null or a map of field names to default values")
            }

            #[inline]
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DefaultValues::default())
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut defaults = DefaultValues::default();
                while let Some((name, value)) = map.next_entry::<String, V>()? {
                    defaults.insert(name, value);
                }
                Ok(defaults)
            }
        }

        de.deserialize_any(MapVisitor(PhantomData))
    }
}

/// The declarative field specification of a builder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Deserialize))]
#[cfg_attr(
    feature = "json",
    serde(deny_unknown_fields, bound(deserialize = "V: Deserialize<'de>"))
)]
pub struct BuilderConfig<V> {
    #[cfg_attr(feature = "json", serde(default))]
    required: FieldList,
    #[cfg_attr(feature = "json", serde(default))]
    optional: FieldList,
    #[cfg_attr(feature = "json", serde(default))]
    defaults: DefaultValues<V>,
}

impl<V> Default for BuilderConfig<V> {
    fn default() -> Self {
        Self {
            required: FieldList::new(),
            optional: FieldList::new(),
            defaults: DefaultValues::default(),
        }
    }
}

impl<V> BuilderConfig<V> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds required fields. Accepts a single name or a list.
    pub fn required(mut self, fields: impl Into<FieldList>) -> Self {
        self.required.extend(fields.into());
        self
    }

    /// Adds optional fields. Accepts a single name or a list.
    pub fn optional(mut self, fields: impl Into<FieldList>) -> Self {
        self.optional.extend(fields.into());
        self
    }

    /// Sets a default value. The name need not be listed as required or optional.
    pub fn with_default(mut self, name: impl Into<String>, value: V) -> Self {
        self.defaults.insert(name, value);
        self
    }

    /// Sets several default values at once.
    pub fn defaults<K, I>(mut self, defaults: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in defaults {
            self.defaults.insert(name, value);
        }
        self
    }

    /// Required field names in declaration order.
    pub fn required_fields(&self) -> &[String] {
        self.required.as_slice()
    }

    /// Optional field names in declaration order.
    pub fn optional_fields(&self) -> &[String] {
        self.optional.as_slice()
    }

    /// Configured default values.
    pub fn default_values(&self) -> &DefaultValues<V> {
        &self.defaults
    }

    /// Ordered union of required, optional and defaulted names.
    pub fn field_names(&self) -> FieldNames {
        self.required
            .as_slice()
            .iter()
            .chain(self.optional.as_slice())
            .map(String::as_str)
            .chain(self.defaults.iter().map(|(name, _)| name))
            .collect()
    }

    pub(crate) fn into_parts(self) -> (FieldList, DefaultValues<V>) {
        (self.required, self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_string_is_one_field() {
        let config: BuilderConfig<&str> = BuilderConfig::new()
            .required("username")
            .optional("password");
        assert_eq!(config.required_fields(), ["username"]);
        assert_eq!(config.optional_fields(), ["password"]);
    }

    #[test]
    fn test_field_names_union_keeps_order() {
        let config = BuilderConfig::new()
            .required("host")
            .optional(["port", "host"])
            .with_default("protocol", "http")
            .with_default("port", "80")
            .with_default("path", "/");
        let names = config.field_names();
        assert_eq!(
            names.iter().collect::<Vec<_>>(),
            vec!["host", "port", "protocol", "path"]
        );
    }

    #[test]
    fn test_default_replaced_in_place() {
        let config = BuilderConfig::new()
            .with_default("a", 1)
            .with_default("b", 2)
            .with_default("a", 3);
        let defaults: Vec<(&str, &i32)> = config.default_values().iter().collect();
        assert_eq!(defaults, vec![("a", &3), ("b", &2)]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_config_variants() {
        let config: BuilderConfig<serde_json::Value> = serde_json::from_str(
            r#"{"required": "host", "optional": null, "defaults": {"path": "/", "protocol": "http"}}"#,
        )
        .expect("valid config");
        assert_eq!(config.required_fields(), ["host"]);
        assert!(config.optional_fields().is_empty());
        let order: Vec<&str> = config.default_values().iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["path", "protocol"]);

        let empty: BuilderConfig<serde_json::Value> = serde_json::from_str("{}").expect("empty config");
        assert!(empty.field_names().is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_value_type_without_default() {
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        struct Port(u16);

        fn parse<V: serde::de::DeserializeOwned>(json: &str) -> BuilderConfig<V> {
            serde_json::from_str(json).expect("valid config")
        }

        let config: BuilderConfig<Port> = parse(r#"{"optional": "port", "defaults": {"port": 8080}}"#);
        assert_eq!(config.default_values().get("port"), Some(&Port(8080)));

        let bare: BuilderConfig<Port> = parse(r#"{"required": "port"}"#);
        assert!(bare.default_values().is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<BuilderConfig<serde_json::Value>, _> =
            serde_json::from_str(r#"{"requried": ["typo"]}"#);
        assert!(result.is_err());
    }
}
