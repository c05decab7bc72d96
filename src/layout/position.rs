use crate::foundation::format::fmt_num;
use crate::scene::model::{Anchor, CustomPoint};

/// Distance in pixels between edge anchors and the canvas border.
pub const MARGIN: f64 = 20.0;

/// Side a sliding text block enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideFrom {
    /// Moves down into place.
    Above,
    /// Moves up into place.
    Below,
    /// Moves right into place.
    Left,
    /// Moves left into place.
    Right,
}

impl SlideFrom {
    /// Whether the motion is along the y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Above | Self::Below)
    }

    /// Sign of the starting offset relative to the resting position.
    pub fn sign(self) -> f64 {
        match self {
            Self::Above | Self::Left => -1.0,
            Self::Below | Self::Right => 1.0,
        }
    }
}

/// Resolved text placement on a `width x height` canvas.
///
/// `(x, y)` is the anchor point in pixels; the text box is shifted left/up by
/// `align_x * text_w` / `align_y * text_h` so the anchor lands on the matching box edge or
/// center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Anchor point x in pixels.
    pub x: f64,
    /// Anchor point y in pixels.
    pub y: f64,
    /// Fraction of the text width left of the anchor point (0, 0.5, 1).
    pub align_x: f64,
    /// Fraction of the text height above the anchor point (0, 0.5, 1).
    pub align_y: f64,
    /// Entrance side for slide animations.
    pub slide_from: SlideFrom,
}

impl Placement {
    /// Resolve `anchor` on the canvas.
    ///
    /// `Custom` uses `custom` when both coordinates are non-zero, otherwise it behaves like
    /// `Center`.
    pub fn resolve(anchor: Anchor, custom: Option<CustomPoint>, width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        let m = MARGIN;

        let at = |x: f64, y: f64, align_x: f64, align_y: f64, slide_from: SlideFrom| Self {
            x,
            y,
            align_x,
            align_y,
            slide_from,
        };

        match anchor {
            Anchor::TopLeft => at(m, m, 0.0, 0.0, SlideFrom::Above),
            Anchor::Top => at(w / 2.0, m, 0.5, 0.0, SlideFrom::Above),
            Anchor::TopRight => at(w - m, m, 1.0, 0.0, SlideFrom::Above),
            Anchor::Left => at(m, h / 2.0, 0.0, 0.5, SlideFrom::Left),
            Anchor::Center => at(w / 2.0, h / 2.0, 0.5, 0.5, SlideFrom::Below),
            Anchor::Right => at(w - m, h / 2.0, 1.0, 0.5, SlideFrom::Right),
            Anchor::BottomLeft => at(m, h - m, 0.0, 1.0, SlideFrom::Below),
            Anchor::Bottom => at(w / 2.0, h - m, 0.5, 1.0, SlideFrom::Below),
            Anchor::BottomRight => at(w - m, h - m, 1.0, 1.0, SlideFrom::Below),
            Anchor::Custom => match custom {
                Some(p) if p.x != 0.0 && p.y != 0.0 => at(p.x, p.y, 0.0, 0.0, SlideFrom::Below),
                _ => Self::resolve(Anchor::Center, None, width, height),
            },
        }
    }

    /// drawtext `x` expression for the resting position.
    pub fn x_expr(&self) -> String {
        aligned_expr(self.x, self.align_x, "text_w")
    }

    /// drawtext `y` expression for the resting position.
    pub fn y_expr(&self) -> String {
        aligned_expr(self.y, self.align_y, "text_h")
    }
}

fn aligned_expr(pos: f64, align: f64, extent: &str) -> String {
    let pos = fmt_num(pos);
    if align == 0.0 {
        pos
    } else if align == 0.5 {
        format!("{pos}-{extent}/2")
    } else if align == 1.0 {
        format!("{pos}-{extent}")
    } else {
        format!("{pos}-{extent}*{}", fmt_num(align))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
