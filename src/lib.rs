//! slidecast compiles timed slideshows into `ffmpeg` filter-graph commands.
//!
//! A [`SceneDescription`] (images, text overlays, a backing audio track and output settings)
//! goes through [`SlideshowCompiler`]:
//!
//! - slide durations are stretched to the probed audio length,
//! - each slide becomes a scale/crop/pan-zoom/drawtext chain,
//! - chains are joined with `xfade` transitions (or `concat` for hard cuts),
//! - the result is a [`CompiledCommand`] that can be inspected, logged or executed.
//!
//! Nothing is rendered in-process; the `ffmpeg` and `ffprobe` executables do the media work.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Scene to encoder-command compilation.
pub mod compile;
/// Diagnostics routing.
pub mod diagnostics;
/// Ken-Burns motion and slide transitions.
pub mod effects;
/// External process execution.
pub mod encode;
pub(crate) mod layout;
/// Boundary scene model.
pub mod scene;
/// Text escaping and color syntax.
pub mod text;

pub use crate::foundation::error::{SlidecastError, SlidecastResult};
pub use crate::foundation::format::fmt_num;

pub use crate::animation::ease::Ease;
pub use crate::animation::overlay::{AnimationWindow, OverlayAnimation, SLIDE_OFFSET};
pub use crate::compile::command::CompiledCommand;
pub use crate::compile::compiler::{CompilerOpts, SlideshowCompiler};
pub use crate::compile::timing::{ScaleMode, SlideTiming, compute_timing};
pub use crate::diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use crate::effects::ken_burns::{KenBurnsIntensity, KenBurnsMotion, KenBurnsStyle};
pub use crate::effects::transitions::{TransitionKind, sequence_slides, transition_offsets};
pub use crate::encode::ffmpeg::{RenderOutcome, is_ffmpeg_on_path, run_ffmpeg};
pub use crate::encode::probe::{DurationProbe, FfprobeDurationProbe, FixedDuration};
pub use crate::layout::position::{MARGIN, Placement, SlideFrom};
pub use crate::scene::model::{
    Anchor, AnimationKind, AudioTrack, CustomPoint, FontStyle, KenBurnsConfig, Orientation,
    OutputFormat, Quality, SceneDescription, Slide, TextAnimation, TextBlock, VideoConfig,
};
