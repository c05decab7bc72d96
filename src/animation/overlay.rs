//! Text animation on a slide's local timeline.
//!
//! Every expression produced here is a pure function of drawtext's `t` (seconds since the
//! slide stream started, after `setpts=PTS-STARTPTS`), so a compiled overlay renders the same
//! way regardless of where the slide lands in the final video.

use crate::animation::ease::Ease;
use crate::foundation::format::fmt_num;
use crate::layout::position::Placement;
use crate::scene::model::{AnimationKind, TextAnimation};
use crate::text::sanitize::{escape_drawtext_text, sanitize_typewriter_text};

/// Distance in pixels a `slide` entrance travels.
pub const SLIDE_OFFSET: f64 = 100.0;

/// Entrance and exit ramps of one overlay, clipped to `[0, slide_duration]`.
///
/// Always `0 <= fade_in_start <= fade_in_end <= fade_out_start <= fade_out_end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationWindow {
    /// Entrance ramp start.
    pub fade_in_start: f64,
    /// Entrance ramp end.
    pub fade_in_end: f64,
    /// Exit ramp start.
    pub fade_out_start: f64,
    /// Exit ramp end; equal to the slide duration.
    pub fade_out_end: f64,
}

impl AnimationWindow {
    /// Clip an animation of ramp length `duration` starting after `delay` to a slide lasting
    /// `slide_duration` seconds.
    pub fn new(duration: f64, delay: f64, slide_duration: f64) -> Self {
        let end = slide_duration.max(0.0);
        let ramp = duration.max(0.0);
        let fade_in_start = delay.clamp(0.0, end);
        let fade_in_end = (fade_in_start + ramp).min(end);
        let fade_out_start = (end - ramp).clamp(fade_in_end, end);
        Self {
            fade_in_start,
            fade_in_end,
            fade_out_start,
            fade_out_end: end,
        }
    }

    /// Whether the four boundaries are in order.
    pub fn is_ordered(&self) -> bool {
        0.0 <= self.fade_in_start
            && self.fade_in_start <= self.fade_in_end
            && self.fade_in_end <= self.fade_out_start
            && self.fade_out_start <= self.fade_out_end
    }

    /// Eased entrance progress: 0 before the ramp, 1 after it.
    pub fn fade_in(&self, ease: Ease) -> String {
        ease.expr(&progress_expr(self.fade_in_start, self.fade_in_end))
    }

    /// Eased exit level: 1 before the ramp, 0 after it.
    pub fn fade_out(&self, ease: Ease) -> String {
        format!(
            "(1-{})",
            ease.expr(&progress_expr(self.fade_out_start, self.fade_out_end))
        )
    }

    /// Full fade-in, hold, fade-out alpha curve.
    pub fn fade_alpha(&self, ease: Ease) -> String {
        format!(
            "if(lt(t,{fis}),0,if(lt(t,{fie}),{inp},if(lt(t,{fos}),1,if(lt(t,{foe}),{out},0))))",
            fis = fmt_num(self.fade_in_start),
            fie = fmt_num(self.fade_in_end),
            fos = fmt_num(self.fade_out_start),
            foe = fmt_num(self.fade_out_end),
            inp = self.fade_in(ease),
            out = self.fade_out(ease),
        )
    }
}

/// Linear `[0, 1]` progress between `a` and `b`; a step at `a` when the ramp is empty.
pub fn progress_expr(a: f64, b: f64) -> String {
    if b <= a {
        format!("gte(t,{})", fmt_num(a))
    } else {
        format!("clip((t-{})/{},0,1)", fmt_num(a), fmt_num(b - a))
    }
}

/// drawtext parameters contributed by a block's animation.
///
/// `x`, `y` and `font_size` replace the static values when set; `alpha` is appended after
/// `enable`. Expressions are unquoted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayAnimation {
    /// Clipped ramps, `None` for static text.
    pub window: Option<AnimationWindow>,
    /// `alpha` expression.
    pub alpha: Option<String>,
    /// Animated `x` expression.
    pub x: Option<String>,
    /// Animated `y` expression.
    pub y: Option<String>,
    /// Animated `fontsize` expression.
    pub font_size: Option<String>,
    /// Text goes through the typewriter sanitizer.
    pub typewriter: bool,
    /// Diagnostic for animation types compiled as static text.
    pub warning: Option<String>,
}

impl OverlayAnimation {
    /// Compile `animation` for a block resting at `placement` on a slide of
    /// `slide_duration` seconds.
    pub fn compile(
        block_id: &str,
        animation: &TextAnimation,
        placement: &Placement,
        font_size: u32,
        slide_duration: f64,
    ) -> Self {
        let window = AnimationWindow::new(animation.duration, animation.delay, slide_duration);
        let ease = animation.easing;

        match &animation.kind {
            AnimationKind::None => Self::default(),
            AnimationKind::Unknown(name) => Self {
                warning: Some(format!(
                    "text block '{block_id}': unknown animation type '{name}', drawing static text"
                )),
                ..Self::default()
            },
            AnimationKind::Fade => Self {
                window: Some(window),
                alpha: Some(window.fade_alpha(ease)),
                ..Self::default()
            },
            AnimationKind::Slide => {
                let entering = window.fade_in(ease);
                let shift = format!(
                    "{}{}*(1-{entering})",
                    if placement.slide_from.sign() < 0.0 { "-" } else { "+" },
                    fmt_num(SLIDE_OFFSET)
                );
                let (x, y) = if placement.slide_from.is_vertical() {
                    (None, Some(format!("{}{shift}", placement.y_expr())))
                } else {
                    (Some(format!("{}{shift}", placement.x_expr())), None)
                };
                Self {
                    window: Some(window),
                    alpha: Some(entering),
                    x,
                    y,
                    ..Self::default()
                }
            }
            AnimationKind::Scale => {
                let entering = window.fade_in(ease);
                Self {
                    window: Some(window),
                    font_size: Some(format!("max(1,{font_size}*{entering})")),
                    alpha: Some(entering),
                    ..Self::default()
                }
            }
            AnimationKind::Typewriter => Self {
                window: Some(window),
                alpha: Some(window.fade_in(ease)),
                typewriter: true,
                ..Self::default()
            },
        }
    }

    /// Escaped drawtext `text` value for `text`.
    pub fn text_value(&self, text: &str) -> String {
        if self.typewriter {
            sanitize_typewriter_text(text)
        } else {
            escape_drawtext_text(text)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/overlay.rs"]
mod tests;
