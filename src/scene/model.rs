use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::effects::ken_burns::{KenBurnsIntensity, KenBurnsStyle};
use crate::effects::transitions::TransitionKind;
use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Complete input for one compilation: slides, backing audio and output settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Slides in display order.
    pub slides: Vec<Slide>,
    /// Backing audio track; its probed duration drives slide timing.
    pub audio: AudioTrack,
    /// Output settings.
    #[serde(default)]
    pub video: VideoConfig,
}

impl SceneDescription {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlidecastResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlidecastError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SlidecastResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlidecastError::serde(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Nominal slide durations in display order.
    pub fn nominal_durations(&self) -> Vec<f64> {
        self.slides.iter().map(|s| s.duration).collect()
    }
}

/// One image shown for a computed duration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Slide {
    /// Resolved path of the source image.
    pub image_path: PathBuf,
    /// Nominal display time in seconds, before audio synchronization.
    #[serde(alias = "nominal_duration")]
    pub duration: f64,
    /// Text overlays drawn in order, last on top.
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
}

/// A text overlay on one slide.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextBlock {
    /// Caller-assigned identifier, used in diagnostics only.
    #[serde(default)]
    pub id: String,
    /// Disabled blocks are dropped before compilation.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Literal text; placeholders must already be substituted.
    pub text: String,
    /// Symbolic anchor.
    #[serde(default)]
    pub position: Anchor,
    /// Pixel coordinates for [`Anchor::Custom`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_position: Option<CustomPoint>,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Text color (`#RRGGBB`, `#RRGGBBAA`, `rgb()`, or an ffmpeg color name).
    #[serde(default = "default_font_color")]
    pub font_color: String,
    /// Fontconfig family name or path to a font file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Outline / shadow decoration.
    #[serde(default)]
    pub font_style: FontStyle,
    /// Box color drawn behind the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Entrance/exit animation.
    #[serde(default)]
    pub animation: TextAnimation,
}

/// Custom anchor coordinates in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomPoint {
    /// Horizontal position from the left edge.
    pub x: f64,
    /// Vertical position from the top edge.
    pub y: f64,
}

/// Symbolic text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Top-left corner.
    TopLeft,
    /// Top edge, horizontally centered.
    #[serde(alias = "top_center")]
    Top,
    /// Top-right corner.
    TopRight,
    /// Left edge, vertically centered.
    Left,
    /// Canvas center.
    #[default]
    Center,
    /// Right edge, vertically centered.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, horizontally centered.
    #[serde(alias = "bottom_center")]
    Bottom,
    /// Bottom-right corner.
    BottomRight,
    /// Literal coordinates from [`TextBlock::custom_position`].
    Custom,
}

impl Anchor {
    /// The nine fixed anchors, excluding [`Anchor::Custom`].
    pub const STANDARD: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];
}

/// Text decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// Plain glyphs.
    #[default]
    Normal,
    /// Black outline.
    Outline,
    /// Soft drop shadow.
    Shadow,
    /// Outline and drop shadow.
    OutlineShadow,
}

impl FontStyle {
    /// Whether glyphs get a border.
    pub fn has_outline(self) -> bool {
        matches!(self, Self::Outline | Self::OutlineShadow)
    }

    /// Whether glyphs get a drop shadow.
    pub fn has_shadow(self) -> bool {
        matches!(self, Self::Shadow | Self::OutlineShadow)
    }
}

/// Animation settings of a [`TextBlock`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextAnimation {
    /// Animation style.
    #[serde(rename = "type", default)]
    pub kind: AnimationKind,
    /// Length of the entrance (and fade exit) ramp in seconds.
    #[serde(default = "default_animation_duration")]
    pub duration: f64,
    /// Seconds after slide start before the entrance begins.
    #[serde(default)]
    pub delay: f64,
    /// Easing applied to ramps.
    #[serde(default)]
    pub easing: Ease,
}

impl Default for TextAnimation {
    fn default() -> Self {
        Self {
            kind: AnimationKind::None,
            duration: default_animation_duration(),
            delay: 0.0,
            easing: Ease::Linear,
        }
    }
}

/// Animation style.
///
/// Unrecognized names are kept as [`AnimationKind::Unknown`] and compile like
/// [`AnimationKind::None`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnimationKind {
    /// Static text.
    #[default]
    None,
    /// Fade in, hold, fade out.
    Fade,
    /// Slide in from the anchor side while fading in.
    Slide,
    /// Grow from zero font size while fading in.
    Scale,
    /// Rendered as a fade-in; no per-character reveal.
    Typewriter,
    /// Anything else, as written.
    Unknown(String),
}

impl From<String> for AnimationKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Self::None,
            "fade" => Self::Fade,
            "slide" => Self::Slide,
            "scale" => Self::Scale,
            "typewriter" => Self::Typewriter,
            _ => Self::Unknown(s),
        }
    }
}

impl From<AnimationKind> for String {
    fn from(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::None => "none".to_owned(),
            AnimationKind::Fade => "fade".to_owned(),
            AnimationKind::Slide => "slide".to_owned(),
            AnimationKind::Scale => "scale".to_owned(),
            AnimationKind::Typewriter => "typewriter".to_owned(),
            AnimationKind::Unknown(s) => s,
        }
    }
}

/// The backing audio track.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Resolved path of the audio file.
    pub path: PathBuf,
}

/// Output resolution class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// 854x480.
    Low,
    /// 1280x720.
    #[default]
    Medium,
    /// 1920x1080.
    High,
}

/// Canvas orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Landscape.
    #[default]
    Horizontal,
    /// Portrait (width and height swapped).
    Vertical,
}

/// Output container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// H.264 + AAC in MP4.
    #[default]
    Mp4,
    /// VP9 + Opus in WebM.
    Webm,
    /// H.264 + AAC in QuickTime.
    Mov,
}

impl OutputFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Webm => "webm",
            Self::Mov => "mov",
        }
    }
}

/// Ken-Burns settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KenBurnsConfig {
    /// Apply pan/zoom to every slide.
    pub enabled: bool,
    /// Motion style.
    pub style: KenBurnsStyle,
    /// Motion strength.
    pub intensity: KenBurnsIntensity,
}

/// Output settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Resolution class.
    pub quality: Quality,
    /// Landscape or portrait.
    pub orientation: Orientation,
    /// Transition between consecutive slides.
    pub transition_type: TransitionKind,
    /// Transition length in seconds.
    pub transition_duration: f64,
    /// Video bitrate as understood by ffmpeg (`4M`, `2500k`).
    pub bitrate: String,
    /// Output frame rate.
    pub framerate: u32,
    /// Pan/zoom motion.
    pub ken_burns: KenBurnsConfig,
    /// Output container.
    pub output_format: OutputFormat,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            quality: Quality::Medium,
            orientation: Orientation::Horizontal,
            transition_type: TransitionKind::Fade,
            transition_duration: 1.0,
            bitrate: "4M".to_owned(),
            framerate: 30,
            ken_burns: KenBurnsConfig::default(),
            output_format: OutputFormat::Mp4,
        }
    }
}

impl VideoConfig {
    /// Canvas size `(width, height)` from the quality table and orientation.
    pub fn resolution(&self) -> (u32, u32) {
        let (w, h) = match self.quality {
            Quality::Low => (854, 480),
            Quality::Medium => (1280, 720),
            Quality::High => (1920, 1080),
        };
        match self.orientation {
            Orientation::Horizontal => (w, h),
            Orientation::Vertical => (h, w),
        }
    }

    /// Transition length actually used between slides; zero when transitions are off.
    pub fn effective_transition_duration(&self) -> f64 {
        if self.transition_type == TransitionKind::None {
            0.0
        } else {
            self.transition_duration.max(0.0)
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> u32 {
    48
}

fn default_font_color() -> String {
    "white".to_owned()
}

fn default_animation_duration() -> f64 {
    1.0
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
