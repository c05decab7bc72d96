use crate::foundation::format::fmt_num;
use crate::foundation::hash::Fnv1a64;

/// Pan/zoom motion style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KenBurnsStyle {
    /// Push in towards the center.
    #[default]
    ZoomIn,
    /// Pull out from the center.
    ZoomOut,
    /// Camera travels left.
    PanLeft,
    /// Camera travels right.
    PanRight,
    /// Camera travels up.
    PanUp,
    /// Camera travels down.
    PanDown,
    /// One of the concrete styles, chosen per slide from its index and duration.
    Random,
}

impl KenBurnsStyle {
    /// Every style except [`KenBurnsStyle::Random`], in selection order.
    pub const CONCRETE: [KenBurnsStyle; 6] = [
        KenBurnsStyle::ZoomIn,
        KenBurnsStyle::ZoomOut,
        KenBurnsStyle::PanLeft,
        KenBurnsStyle::PanRight,
        KenBurnsStyle::PanUp,
        KenBurnsStyle::PanDown,
    ];

    /// Resolve [`KenBurnsStyle::Random`] for a slide; concrete styles return themselves.
    ///
    /// The choice depends only on `(slide_index, duration)`, so recompiling a scene reproduces
    /// the same motion.
    pub fn resolve(self, slide_index: usize, duration: f64) -> KenBurnsStyle {
        if self != Self::Random {
            return self;
        }
        let mut h = Fnv1a64::new();
        h.write_u64(slide_index as u64);
        h.write_f64(duration);
        Self::CONCRETE[(h.finish() % Self::CONCRETE.len() as u64) as usize]
    }
}

/// Pan/zoom strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KenBurnsIntensity {
    /// Barely perceptible drift.
    Subtle,
    /// Noticeable motion.
    #[default]
    Moderate,
    /// Pronounced motion.
    Strong,
}

impl KenBurnsIntensity {
    /// Zoom increment per output frame.
    pub fn zoom_speed(self) -> f64 {
        match self {
            Self::Subtle => 0.0005,
            Self::Moderate => 0.001,
            Self::Strong => 0.002,
        }
    }

    /// Pan distance per output frame, as a fraction of the smaller canvas side.
    pub fn pan_speed(self) -> f64 {
        match self {
            Self::Subtle => 0.0005,
            Self::Moderate => 0.001,
            Self::Strong => 0.002,
        }
    }

    /// Fixed zoom held during pans, leaving room to travel.
    pub fn pan_zoom(self) -> f64 {
        match self {
            Self::Subtle => 1.1,
            Self::Moderate => 1.15,
            Self::Strong => 1.25,
        }
    }
}

/// Number of output frames for a slide: `round(duration * fps)`, at least one.
pub fn frame_count(duration: f64, fps: u32) -> u64 {
    let frames = (duration * f64::from(fps)).round();
    if frames.is_finite() && frames >= 1.0 {
        frames as u64
    } else {
        1
    }
}

/// Resolved pan/zoom parameters for one slide.
#[derive(Clone, Debug, PartialEq)]
pub struct KenBurnsMotion {
    /// Concrete style after resolving `random`.
    pub style: KenBurnsStyle,
    /// Output frames covered by the motion.
    pub frames: u64,
    /// zoompan `z` expression.
    pub zoom_expr: String,
    /// zoompan `x` expression.
    pub x_expr: String,
    /// zoompan `y` expression.
    pub y_expr: String,
    /// Output width; equals the canvas so nothing is letterboxed.
    pub width: u32,
    /// Output height.
    pub height: u32,
    /// Output frame rate.
    pub fps: u32,
}

impl KenBurnsMotion {
    /// Synthesize the motion for slide `slide_index` lasting `duration` seconds.
    pub fn synthesize(
        style: KenBurnsStyle,
        intensity: KenBurnsIntensity,
        slide_index: usize,
        duration: f64,
        fps: u32,
        width: u32,
        height: u32,
    ) -> Self {
        const CENTER_X: &str = "iw/2-(iw/zoom/2)";
        const CENTER_Y: &str = "ih/2-(ih/zoom/2)";

        let style = style.resolve(slide_index, duration);
        let frames = frame_count(duration, fps);

        let zs = fmt_num(intensity.zoom_speed());
        let zmax = fmt_num(1.0 + intensity.zoom_speed() * frames as f64);
        let pan_zoom = fmt_num(intensity.pan_zoom());
        let ps = fmt_num(f64::from(width.min(height)) * intensity.pan_speed());

        let (zoom_expr, x_expr, y_expr) = match style {
            // `Random` never survives `resolve`.
            KenBurnsStyle::ZoomIn | KenBurnsStyle::Random => (
                format!("min(1+{zs}*on,{zmax})"),
                CENTER_X.to_owned(),
                CENTER_Y.to_owned(),
            ),
            KenBurnsStyle::ZoomOut => (
                format!("max({zmax}-{zs}*on,1)"),
                CENTER_X.to_owned(),
                CENTER_Y.to_owned(),
            ),
            KenBurnsStyle::PanLeft => (
                pan_zoom,
                format!("max(iw-iw/zoom-{ps}*on,0)"),
                CENTER_Y.to_owned(),
            ),
            KenBurnsStyle::PanRight => (
                pan_zoom,
                format!("min({ps}*on,iw-iw/zoom)"),
                CENTER_Y.to_owned(),
            ),
            KenBurnsStyle::PanUp => (
                pan_zoom,
                CENTER_X.to_owned(),
                format!("max(ih-ih/zoom-{ps}*on,0)"),
            ),
            KenBurnsStyle::PanDown => (
                pan_zoom,
                CENTER_X.to_owned(),
                format!("min({ps}*on,ih-ih/zoom)"),
            ),
        };

        Self {
            style,
            frames,
            zoom_expr,
            x_expr,
            y_expr,
            width,
            height,
            fps,
        }
    }

    /// Render as a `zoompan` filter.
    ///
    /// `d=1` emits one frame per looped input frame and all motion is driven by the output
    /// frame number `on`, so the filter carries no state between frames.
    pub fn to_filter(&self) -> String {
        format!(
            "zoompan=z='{}':x='{}':y='{}':d=1:s={}x{}:fps={}",
            self.zoom_expr, self.x_expr, self.y_expr, self.width, self.height, self.fps
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/ken_burns.rs"]
mod tests;
