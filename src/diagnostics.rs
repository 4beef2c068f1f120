//! Where builders report keys they ignore.
//!
//! Reporting is best-effort: the default channel goes through the [`log`]
//! facade, which silently drops records when no logger is installed.

/// Receives warnings about field names a builder does not know.
pub trait Diagnostics {
    /// Called once for every ignored key.
    fn unknown_field(&self, name: &str);
}

/// Emits a `warn` record through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn unknown_field(&self, name: &str) {
        log::warn!("Key {name} ignored as it wasn't defined in builder configuration");
    }
}

/// Drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn unknown_field(&self, _name: &str) {}
}

impl<F> Diagnostics for F
where
    F: Fn(&str),
{
    fn unknown_field(&self, name: &str) {
        self(name)
    }
}
