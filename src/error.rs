//! Error types for builder factories and the builders they produce.

use thiserror::Error;

/// Result type alias for builder factory operations
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Boxed error returned by a fallible post-build hook
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for builder factory operations
#[derive(Error, Debug)]
pub enum BuilderError {
    /// The factory was created without any configuration
    #[error("Missing builder configuration. It can contain required, optional and defaults")]
    Configuration,

    /// The configuration document could not be parsed
    #[cfg(feature = "json")]
    #[error("Invalid builder configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Required fields have neither a value nor a default
    #[error("Could not build as builder didn't validate: missing {}", .missing.join(", "))]
    Validation {
        /// Missing required fields, in declaration order
        missing: Vec<String>,
    },

    /// No generated accessor carries this method name
    #[error("No accessor named '{method}' was generated for this builder")]
    UnknownAccessor {
        /// Requested method name
        method: String,
    },

    /// A `with<Name>` accessor was invoked without a value
    #[error("Accessor '{method}' requires a value")]
    MissingArgument {
        /// Requested method name
        method: String,
    },

    /// The post-build hook rejected the assembled fields
    #[error("Post-build hook failed: {0}")]
    PostBuild(#[source] HookError),
}

impl BuilderError {
    /// Missing field names when this is a validation failure
    pub fn missing_fields(&self) -> &[String] {
        match self {
            BuilderError::Validation { missing } => missing,
            _ => &[],
        }
    }
}
