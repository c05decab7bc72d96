//! Blocking child-process execution with captured output.

use std::ffi::OsStr;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::foundation::error::{SlidecastError, SlidecastResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Exit status and captured pipes of a finished process.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Exit status.
    pub status: ExitStatus,
    /// Everything written to stdout.
    pub stdout: String,
    /// Everything written to stderr.
    pub stderr: String,
}

impl ProcessOutput {
    /// stdout followed by stderr, for diagnostics.
    pub fn combined(&self) -> String {
        join_output(&self.stdout, &self.stderr)
    }
}

/// Run `program` with `args` and wait for it, killing it after `timeout`.
///
/// stdin is closed. Both output pipes are drained on background threads so a chatty child
/// never blocks on a full pipe. Returns [`SlidecastError::Timeout`] when the child had to be
/// killed; a non-zero exit is reported through [`ProcessOutput::status`], not as an error.
pub fn run_captured<I, S>(
    program: impl AsRef<OsStr>,
    args: I,
    timeout: Option<Duration>,
) -> SlidecastResult<ProcessOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            anyhow::anyhow!(
                "failed to spawn '{}' (is it installed and on PATH?): {e}",
                program.to_string_lossy()
            )
        })?;

    let stdout_drain = drain(child.stdout.take());
    let stderr_drain = drain(child.stderr.take());

    let started = Instant::now();
    let status = wait(&mut child, started, timeout)?;

    let stdout = collect(stdout_drain, "stdout")?;
    let stderr = collect(stderr_drain, "stderr")?;

    match status {
        Some(status) => Ok(ProcessOutput {
            status,
            stdout,
            stderr,
        }),
        None => Err(SlidecastError::Timeout {
            seconds: started.elapsed().as_secs_f64(),
            output: join_output(&stdout, &stderr),
        }),
    }
}

/// `None` when the deadline passed and the child was killed.
fn wait(
    child: &mut Child,
    started: Instant,
    timeout: Option<Duration>,
) -> SlidecastResult<Option<ExitStatus>> {
    let Some(timeout) = timeout else {
        let status = child
            .wait()
            .map_err(|e| anyhow::anyhow!("failed to wait for child process: {e}"))?;
        return Ok(Some(status));
    };

    loop {
        if let Some(status) = child
            .try_wait()
            .map_err(|e| anyhow::anyhow!("failed to poll child process: {e}"))?
        {
            return Ok(Some(status));
        }
        if started.elapsed() >= timeout {
            tracing::warn!(timeout_secs = timeout.as_secs_f64(), "killing child process");
            // The child may exit on its own between the poll and the kill.
            let _ = child.kill();
            child
                .wait()
                .map_err(|e| anyhow::anyhow!("failed to reap killed child process: {e}"))?;
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

type Drain = Option<JoinHandle<std::io::Result<Vec<u8>>>>;

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Drain {
    pipe.map(|mut pipe| {
        std::thread::spawn(move || {
            let mut bytes = Vec::new();
            pipe.read_to_end(&mut bytes)?;
            Ok(bytes)
        })
    })
}

fn collect(handle: Drain, name: &str) -> SlidecastResult<String> {
    let Some(handle) = handle else {
        return Ok(String::new());
    };
    let bytes = handle
        .join()
        .map_err(|_| anyhow::anyhow!("{name} drain thread panicked"))?
        .map_err(|e| anyhow::anyhow!("{name} read failed: {e}"))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn join_output(stdout: &str, stderr: &str) -> String {
    match (stdout.trim().is_empty(), stderr.trim().is_empty()) {
        (true, _) => stderr.to_owned(),
        (false, true) => stdout.to_owned(),
        (false, false) => format!("{}\n{stderr}", stdout.trim_end()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/process.rs"]
mod tests;
