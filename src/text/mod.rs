//! Text and color sanitizing for the filter-graph language.

/// Color specification parsing and ffmpeg color syntax.
pub mod color;
/// Escaping of literal text and option values.
pub mod sanitize;
