//! Boundary scene model: what callers hand to the compiler.

/// Serde data model.
pub mod model;
mod validate;
