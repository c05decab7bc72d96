use crate::foundation::format::fmt_num;

/// Label of the final video stream produced by [`sequence_slides`].
pub const OUTPUT_LABEL: &str = "vout";

/// Transition between consecutive slides.
///
/// Every variant except [`TransitionKind::None`] maps onto an ffmpeg `xfade` transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Hard cut; slides are concatenated without overlap.
    #[serde(alias = "cut")]
    None,
    /// Cross-fade.
    #[default]
    #[serde(alias = "crossfade")]
    Fade,
    /// Fade through black.
    #[serde(alias = "fade_black")]
    FadeBlack,
    /// Fade through white.
    #[serde(alias = "fade_white")]
    FadeWhite,
    /// Noise dissolve.
    Dissolve,
    /// Wipe towards the left.
    #[serde(alias = "wipe_left")]
    WipeLeft,
    /// Wipe towards the right.
    #[serde(alias = "wipe_right")]
    WipeRight,
    /// Wipe upwards.
    #[serde(alias = "wipe_up")]
    WipeUp,
    /// Wipe downwards.
    #[serde(alias = "wipe_down")]
    WipeDown,
    /// Push towards the left.
    #[serde(alias = "slide_left")]
    SlideLeft,
    /// Push towards the right.
    #[serde(alias = "slide_right")]
    SlideRight,
    /// Push upwards.
    #[serde(alias = "slide_up")]
    SlideUp,
    /// Push downwards.
    #[serde(alias = "slide_down")]
    SlideDown,
    /// Soft-edged wipe towards the left.
    #[serde(alias = "smooth_left")]
    SmoothLeft,
    /// Soft-edged wipe towards the right.
    #[serde(alias = "smooth_right")]
    SmoothRight,
    /// Soft-edged wipe upwards.
    #[serde(alias = "smooth_up")]
    SmoothUp,
    /// Soft-edged wipe downwards.
    #[serde(alias = "smooth_down")]
    SmoothDown,
    /// Growing circle reveal.
    #[serde(alias = "circle_open")]
    CircleOpen,
    /// Shrinking circle reveal.
    #[serde(alias = "circle_close")]
    CircleClose,
    /// Clock-hand sweep.
    Radial,
    /// Pixelate through.
    Pixelize,
    /// Zoom into the next slide.
    #[serde(alias = "zoom_in")]
    ZoomIn,
}

impl TransitionKind {
    /// The `xfade` transition name, or `None` for a hard cut.
    pub fn xfade_name(self) -> Option<&'static str> {
        Some(match self {
            Self::None => return None,
            Self::Fade => "fade",
            Self::FadeBlack => "fadeblack",
            Self::FadeWhite => "fadewhite",
            Self::Dissolve => "dissolve",
            Self::WipeLeft => "wipeleft",
            Self::WipeRight => "wiperight",
            Self::WipeUp => "wipeup",
            Self::WipeDown => "wipedown",
            Self::SlideLeft => "slideleft",
            Self::SlideRight => "slideright",
            Self::SlideUp => "slideup",
            Self::SlideDown => "slidedown",
            Self::SmoothLeft => "smoothleft",
            Self::SmoothRight => "smoothright",
            Self::SmoothUp => "smoothup",
            Self::SmoothDown => "smoothdown",
            Self::CircleOpen => "circleopen",
            Self::CircleClose => "circleclose",
            Self::Radial => "radial",
            Self::Pixelize => "pixelize",
            Self::ZoomIn => "zoomin",
        })
    }
}

/// Chained slide streams.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    /// Filter-graph fragment consuming `[v0]..[vN-1]` and producing `[vout]`.
    pub filter: String,
    /// `xfade` offset of each transition, in emission order (empty for cuts).
    pub offsets: Vec<f64>,
    /// Length of the chained output in seconds.
    pub total_duration: f64,
}

/// Cross-fade offsets for slides of `final_durations` joined by `td`-second transitions.
///
/// The running offset starts at `final[0] - td` and grows by `final[i] - td` after each
/// transition. Each emitted offset is clamped at zero, so a slide shorter than the transition
/// overlaps its neighbour instead of leaving a gap.
pub fn transition_offsets(final_durations: &[f64], td: f64) -> Vec<f64> {
    let Some((first, rest)) = final_durations.split_first() else {
        return Vec::new();
    };
    let mut current = first - td;
    let mut offsets = Vec::with_capacity(rest.len());
    for d in rest {
        offsets.push(current.max(0.0));
        current += d - td;
    }
    offsets
}

/// Chain slide streams `[v0]..[vN-1]` into `[vout]`.
///
/// Uses `xfade` when `kind` has a transition name and `td > 0`; otherwise `concat`.
pub fn sequence_slides(final_durations: &[f64], kind: TransitionKind, td: f64) -> Sequence {
    let n = final_durations.len();
    if n <= 1 {
        return Sequence {
            filter: format!("[v0]null[{OUTPUT_LABEL}]"),
            offsets: Vec::new(),
            total_duration: final_durations.first().copied().unwrap_or(0.0),
        };
    }

    let name = match kind.xfade_name() {
        Some(name) if td > 0.0 => name,
        _ => {
            let inputs: String = (0..n).map(|i| format!("[v{i}]")).collect();
            return Sequence {
                filter: format!("{inputs}concat=n={n}:v=1:a=0[{OUTPUT_LABEL}]"),
                offsets: Vec::new(),
                total_duration: final_durations.iter().sum(),
            };
        }
    };

    let offsets = transition_offsets(final_durations, td);
    let mut steps = Vec::with_capacity(offsets.len());
    let mut prev = "v0".to_owned();
    for (i, offset) in offsets.iter().enumerate() {
        let next = i + 1;
        let out = if next == n - 1 {
            OUTPUT_LABEL.to_owned()
        } else {
            format!("x{next}")
        };
        steps.push(format!(
            "[{prev}][v{next}]xfade=transition={name}:duration={}:offset={}[{out}]",
            fmt_num(td),
            fmt_num(*offset)
        ));
        prev = out;
    }

    let last_offset = offsets.last().copied().unwrap_or(0.0);
    Sequence {
        filter: steps.join(";"),
        total_duration: last_offset + final_durations[n - 1],
        offsets,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
