//! Where compiler warnings go.

/// Sink for non-fatal compiler diagnostics.
///
/// Every warning also ends up in [`crate::CompiledCommand::warnings`]; this hook lets the caller
/// route them as they happen.
pub trait Diagnostics: Send + Sync {
    /// Report a problem that did not stop compilation.
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to `tracing` under the `slidecast` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "slidecast", "{message}");
    }
}

/// Drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn warn(&self, _message: &str) {}
}
