/// Easing curves used to map normalized animation progress.
///
/// Each curve exists twice: [`Ease::apply`] evaluates it in Rust, [`Ease::expr`] emits the
/// same curve in ffmpeg expression syntax so the encoder evaluates it per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in.
    #[serde(alias = "ease_in")]
    InQuad,
    /// Quadratic ease-out.
    #[serde(alias = "ease_out")]
    OutQuad,
    /// Quadratic ease-in/out.
    #[serde(alias = "ease_in_out")]
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Wrap the ffmpeg expression `p` (already clipped to `[0, 1]`) in this curve.
    pub fn expr(self, p: &str) -> String {
        match self {
            Self::Linear => p.to_owned(),
            Self::InQuad => format!("pow({p},2)"),
            Self::OutQuad => format!("(1-pow(1-{p},2))"),
            Self::InOutQuad => format!("if(lt({p},0.5),2*pow({p},2),1-pow(2-2*{p},2)/2)"),
            Self::InCubic => format!("pow({p},3)"),
            Self::OutCubic => format!("(1-pow(1-{p},3))"),
            Self::InOutCubic => format!("if(lt({p},0.5),4*pow({p},3),1-pow(2-2*{p},3)/2)"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
