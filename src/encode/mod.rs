//! Running the external encoder and probe.

/// ffmpeg execution.
pub mod ffmpeg;
/// Audio duration probing.
pub mod probe;
pub(crate) mod process;
