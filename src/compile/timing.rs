//! Audio-synchronized slide durations.

use crate::foundation::format::fmt_num;

/// Largest `|screen_time - audio|` gap, in seconds, left uncorrected.
pub const SYNC_TOLERANCE: f64 = 0.1;

/// How nominal durations are stretched to match the audio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// `audio / screen_time`: every slide gets the audio-to-screen-time ratio.
    ///
    /// With overlapping transitions the slideshow lasts `audio + overlap * (scale - 1)`;
    /// the encoder's `-shortest` stops at the shorter stream.
    #[default]
    ScreenTime,
    /// `(audio + overlap) / total_nominal`: on-screen time matches the audio exactly.
    Exact,
}

/// Output of [`compute_timing`].
#[derive(Clone, Debug, PartialEq)]
pub struct SlideTiming {
    /// Per-slide durations actually rendered, in display order.
    pub final_durations: Vec<f64>,
    /// Seconds consumed by overlapping transitions.
    pub overlap: f64,
    /// Common factor applied to every nominal duration, `None` when left unscaled.
    pub scale: Option<f64>,
    /// Non-fatal problems that left durations unscaled.
    pub warnings: Vec<String>,
}

impl SlideTiming {
    /// Visible length of the chained slides: `sum(final) - overlap`.
    pub fn screen_time(&self) -> f64 {
        self.final_durations.iter().sum::<f64>() - self.overlap
    }
}

/// Scale `nominal` slide durations so the slideshow lasts as long as the audio.
///
/// `transition_duration` is the effective per-transition overlap (zero for cuts). A missing or
/// unusable `audio_duration` keeps nominal durations and records a warning.
pub fn compute_timing(
    nominal: &[f64],
    transition_duration: f64,
    audio_duration: Option<f64>,
    mode: ScaleMode,
) -> SlideTiming {
    let total: f64 = nominal.iter().sum();
    let overlap = transition_duration.max(0.0) * nominal.len().saturating_sub(1) as f64;
    let screen_time = total - overlap;

    let unscaled = |warning: Option<String>| SlideTiming {
        final_durations: nominal.to_vec(),
        overlap,
        scale: None,
        warnings: warning.into_iter().collect(),
    };

    let audio = match audio_duration {
        Some(a) if a.is_finite() && a > 0.0 => a,
        other => {
            let got = other.map_or_else(|| "none".to_owned(), |a| a.to_string());
            return unscaled(Some(format!(
                "audio duration unavailable ({got}); keeping nominal slide durations"
            )));
        }
    };

    if screen_time <= 0.0 || total <= 0.0 {
        return unscaled(Some(format!(
            "transitions ({}s) consume all {}s of slide time; keeping nominal slide durations",
            fmt_num(overlap),
            fmt_num(total)
        )));
    }

    if (screen_time - audio).abs() <= SYNC_TOLERANCE {
        return unscaled(None);
    }

    let scale = match mode {
        ScaleMode::Exact => (audio + overlap) / total,
        ScaleMode::ScreenTime => audio / screen_time,
    };
    SlideTiming {
        final_durations: nominal.iter().map(|d| d * scale).collect(),
        overlap,
        scale: Some(scale),
        warnings: Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/timing.rs"]
mod tests;
