/// Convenience result type used across slidecast.
pub type SlidecastResult<T> = Result<T, SlidecastError>;

/// Top-level error taxonomy used by compiler and encoder APIs.
#[derive(thiserror::Error, Debug)]
pub enum SlidecastError {
    /// Invalid scene description; raised before any external process runs.
    #[error("invalid scene: {0}")]
    Validation(String),

    /// Audio duration probe returned nothing usable.
    #[error("probe failure: {0}")]
    Probe(String),

    /// Encoder exited with a non-zero status.
    #[error("encoder failed with status {}: {}", status_label(.status), .output.trim())]
    Encoder {
        /// Numeric exit status, `None` when the process was terminated by a signal.
        status: Option<i32>,
        /// Captured stdout followed by stderr.
        output: String,
    },

    /// Encoder exceeded the caller-provided timeout and was killed.
    #[error("encoder timed out after {seconds:.1}s: {}", .output.trim())]
    Timeout {
        /// Elapsed wall time when the process was killed.
        seconds: f64,
        /// Output captured before the kill.
        output: String,
    },

    /// Errors when serializing or deserializing scene descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidecastError {
    /// Build a [`SlidecastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlidecastError::Probe`] value.
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    /// Build a [`SlidecastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Captured process output carried by encoder failures, if any.
    pub fn diagnostic_output(&self) -> Option<&str> {
        match self {
            Self::Encoder { output, .. } | Self::Timeout { output, .. } => Some(output),
            _ => None,
        }
    }
}

fn status_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "signal".to_owned(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
