//! Scene to encoder-command compilation.

/// Encoder argument assembly.
pub mod command;
/// Orchestration.
pub mod compiler;
/// Per-slide filter chains.
pub mod slide;
/// Audio-synchronized durations.
pub mod timing;
