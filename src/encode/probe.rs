use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::encode::process::run_captured;
use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Source of audio durations.
///
/// Injected into [`crate::SlideshowCompiler`] so tests and callers with their own metadata
/// can skip `ffprobe`.
pub trait DurationProbe: Send + Sync {
    /// Duration of the media file at `path`, in seconds.
    fn probe_duration(&self, path: &Path) -> SlidecastResult<f64>;
}

/// [`DurationProbe`] backed by the `ffprobe` executable.
#[derive(Clone, Debug)]
pub struct FfprobeDurationProbe {
    program: PathBuf,
}

impl FfprobeDurationProbe {
    /// Use `program` (a name on `PATH` or a full path) as the `ffprobe` binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FfprobeDurationProbe {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl DurationProbe for FfprobeDurationProbe {
    #[tracing::instrument(level = "debug", skip(self), fields(program = %self.program.display()))]
    fn probe_duration(&self, path: &Path) -> SlidecastResult<f64> {
        let args = [
            OsStr::new("-v"),
            OsStr::new("error"),
            OsStr::new("-show_entries"),
            OsStr::new("format=duration"),
            OsStr::new("-of"),
            OsStr::new("default=noprint_wrappers=1:nokey=1"),
            path.as_os_str(),
        ];
        let out = run_captured(&self.program, args, None)
            .map_err(|e| SlidecastError::probe(format!("failed to run ffprobe: {e}")))?;

        if !out.status.success() {
            return Err(SlidecastError::probe(format!(
                "ffprobe failed for '{}': {}",
                path.display(),
                out.stderr.trim()
            )));
        }
        parse_duration(&out.stdout)
            .map_err(|e| SlidecastError::probe(format!("'{}': {e}", path.display())))
    }
}

/// Fixed duration, for dry runs and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedDuration(pub f64);

impl DurationProbe for FixedDuration {
    fn probe_duration(&self, _path: &Path) -> SlidecastResult<f64> {
        Ok(self.0)
    }
}

/// Parse ffprobe's bare `format=duration` output.
pub fn parse_duration(stdout: &str) -> Result<f64, String> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| "ffprobe printed no duration".to_owned())?;
    let secs: f64 = line
        .parse()
        .map_err(|_| format!("ffprobe duration \"{line}\" is not a number"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("ffprobe duration {secs} is not positive"));
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/probe.rs"]
mod tests;
