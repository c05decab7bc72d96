//! Per-slide motion and between-slide transitions.

/// Ken-Burns pan/zoom synthesis.
pub mod ken_burns;
/// Cross-fade sequencing.
pub mod transitions;
