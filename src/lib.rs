//! # Sugars Builder Factory
//!
//! Fluent builders generated from a declarative field specification.
//!
//! A [`BuilderFactory`] takes a [`BuilderConfig`] listing required fields,
//! optional fields and default values, and hands out independent
//! [`Builder`]s. Every builder offers:
//!
//! - a generic setter `with(name, value)` and unsetter `without(name)`,
//!   plus `with<Name>` / `without<Name>` accessors generated per field
//!   (dispatched by name with [`Builder::invoke`], or as real methods through
//!   the [`field_accessors!`] macro)
//! - batch population from maps ([`Builder::read_from_object`]) and getter
//!   closures ([`Builder::read_from_getter_function`])
//! - validation of required fields and assembly into a fresh [`Fields`] map,
//!   optionally transformed by a post-build hook
//!
//! Explicit values win over defaults, defaults win over nothing. Defaults are
//! kept apart from builder state, so clearing a field reverts it to its
//! default.
//!
//! ## Features
//!
//! - `json` - load configurations from JSON and read builders from `serde_json` objects
//! - `macros` - the [`field_accessors!`] code generator
//!
//! ## Example
//!
//! ```rust
//! use sugars_builder_factory::{BuilderConfig, BuilderFactory, Fields};
//!
//! let urls = BuilderFactory::new(
//!     BuilderConfig::new()
//!         .required("host")
//!         .optional(["port", "queryString"])
//!         .with_default("protocol", "http")
//!         .with_default("path", "/"),
//! )?
//! .with_post_build_hook(|url: Fields<&str>| {
//!     let port = url.get("port").map(|p| format!(":{p}")).unwrap_or_default();
//!     format!("{}://{}{}{}", url["protocol"], url["host"], port, url["path"])
//! });
//!
//! let defaults = urls.builder().with("host", "example.com").with("protocol", "https");
//! let specific = defaults.clone().with("path", "/my-path");
//!
//! assert_eq!(defaults.build()?, "https://example.com/");
//! assert_eq!(specific.build()?, "https://example.com/my-path");
//! # Ok::<(), sugars_builder_factory::BuilderError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod accessors;
mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
mod factory;
pub mod fields;
mod macros;

pub use accessors::{Accessor, AccessorKind, AccessorTable};
pub use builder::Builder;
pub use config::{BuilderConfig, DefaultValues, FieldList};
pub use diagnostics::{Diagnostics, LogDiagnostics, Silent};
pub use error::{BuilderError, HookError, Result};
pub use factory::BuilderFactory;
pub use fields::{FieldNames, Fields, ObjectSource};

#[cfg(feature = "macros")]
pub use sugars_builder_macros::field_accessors;
