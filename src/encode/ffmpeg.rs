use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::compile::command::CompiledCommand;
use crate::encode::process::run_captured;
use crate::foundation::error::{SlidecastError, SlidecastResult};

/// What a successful encoder run produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderOutcome {
    /// Written video file.
    pub file_path: PathBuf,
    /// Length of the video stream in seconds.
    pub duration: f64,
    /// Rendered slide durations, in display order.
    pub slide_durations: Vec<f64>,
    /// Encoder stdout and stderr.
    pub encoder_output: String,
}

/// Execute `cmd` and wait for the encoder to finish.
///
/// Creates the output directory first. With `overwrite` unset an existing output file is a
/// validation error rather than an encoder prompt.
#[tracing::instrument(skip_all, fields(output = %cmd.output_path.display()))]
pub fn run_ffmpeg(
    cmd: &CompiledCommand,
    overwrite: bool,
    timeout: Option<Duration>,
) -> SlidecastResult<RenderOutcome> {
    ensure_parent_dir(&cmd.output_path)?;
    if !overwrite && cmd.output_path.exists() {
        return Err(SlidecastError::validation(format!(
            "output file '{}' already exists",
            cmd.output_path.display()
        )));
    }

    tracing::debug!(command = %cmd.command_line(), "spawning encoder");
    let out = run_captured(&cmd.program, &cmd.args, timeout)?;
    let encoder_output = out.combined();
    if !out.status.success() {
        return Err(SlidecastError::Encoder {
            status: out.status.code(),
            output: encoder_output,
        });
    }

    tracing::info!(duration = cmd.total_duration, "encoder finished");
    Ok(RenderOutcome {
        file_path: cmd.output_path.clone(),
        duration: cmd.total_duration,
        slide_durations: cmd.final_durations.clone(),
        encoder_output,
    })
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SlidecastResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `program` can be invoked, e.g. `ffmpeg` on `PATH`.
pub fn is_on_path(program: impl AsRef<std::ffi::OsStr>) -> bool {
    std::process::Command::new(program)
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    is_on_path("ffmpeg")
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
