use crate::animation::overlay::OverlayAnimation;
use crate::effects::ken_burns::KenBurnsMotion;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::foundation::format::fmt_num;
use crate::layout::position::Placement;
use crate::scene::model::{Slide, TextBlock, VideoConfig};
use crate::text::color::to_ffmpeg_color;
use crate::text::sanitize::escape_filter_value;

/// Filter chain for one slide, from its input pad to `[v{index}]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideChain {
    /// `[i:v]...[vi]`.
    pub filter: String,
    /// Pan/zoom applied to this slide, if any.
    pub motion: Option<KenBurnsMotion>,
    /// Non-fatal issues found while compiling overlays.
    pub warnings: Vec<String>,
}

/// Build the chain for slide `index` shown for `final_duration` seconds.
///
/// Order: cover-scale, crop, optional pan/zoom, pixel format, overlays (disabled blocks
/// skipped, later blocks drawn on top), trim to length.
pub fn build_slide_chain(
    index: usize,
    slide: &Slide,
    final_duration: f64,
    video: &VideoConfig,
) -> SlidecastResult<SlideChain> {
    let (w, h) = video.resolution();
    let mut filters = vec![
        format!("scale={w}:{h}:force_original_aspect_ratio=increase"),
        format!("crop={w}:{h}"),
    ];

    let motion = video.ken_burns.enabled.then(|| {
        KenBurnsMotion::synthesize(
            video.ken_burns.style,
            video.ken_burns.intensity,
            index,
            final_duration,
            video.framerate,
            w,
            h,
        )
    });
    if let Some(m) = &motion {
        filters.push(m.to_filter());
    }
    filters.push("setsar=1".to_owned());
    filters.push("format=yuv420p".to_owned());

    let mut warnings = Vec::new();
    for block in slide.text_blocks.iter().filter(|b| b.enabled) {
        let placement = Placement::resolve(block.position, block.custom_position, w, h);
        let (drawtext, warning) = drawtext_filter(block, &placement, final_duration)?;
        filters.push(drawtext);
        warnings.extend(warning.map(|w| format!("slide {index}: {w}")));
    }

    filters.push(format!("trim=duration={}", fmt_num(final_duration)));
    filters.push("setpts=PTS-STARTPTS".to_owned());

    Ok(SlideChain {
        filter: format!("[{index}:v]{}[v{index}]", filters.join(",")),
        motion,
        warnings,
    })
}

/// One `drawtext` filter for `block`, plus a warning when its animation compiles as static.
pub fn drawtext_filter(
    block: &TextBlock,
    placement: &Placement,
    slide_duration: f64,
) -> SlidecastResult<(String, Option<String>)> {
    let anim = OverlayAnimation::compile(
        &block.id,
        &block.animation,
        placement,
        block.font_size,
        slide_duration,
    );
    let color = |spec: &str, field: &str| {
        to_ffmpeg_color(spec).map_err(|e| {
            SlidecastError::validation(format!("text block '{}' {field}: {e}", block.id))
        })
    };

    let mut params = vec![
        format!("text={}", anim.text_value(&block.text)),
        format!(
            "fontsize={}",
            anim.font_size
                .as_deref()
                .map_or_else(|| block.font_size.to_string(), quote_expr)
        ),
        format!("fontcolor={}", color(&block.font_color, "font_color")?),
    ];
    if let Some(family) = block.font_family.as_deref().filter(|f| !f.trim().is_empty()) {
        let key = if is_font_file(family) { "fontfile" } else { "font" };
        params.push(format!("{key}={}", escape_filter_value(family)));
    }
    if block.font_style.has_outline() {
        params.push("borderw=2:bordercolor=black".to_owned());
    }
    if block.font_style.has_shadow() {
        params.push("shadowx=2:shadowy=2:shadowcolor=black@0.5".to_owned());
    }
    if let Some(bg) = &block.background_color {
        params.push(format!(
            "box=1:boxcolor={}:boxborderw=10",
            color(bg, "background_color")?
        ));
    }
    params.push(format!(
        "x={}",
        quote_expr(anim.x.as_deref().unwrap_or(&placement.x_expr()))
    ));
    params.push(format!(
        "y={}",
        quote_expr(anim.y.as_deref().unwrap_or(&placement.y_expr()))
    ));
    params.push(format!("enable='between(t,0,{})'", fmt_num(slide_duration)));
    if let Some(alpha) = &anim.alpha {
        params.push(format!("alpha={}", quote_expr(alpha)));
    }

    Ok((format!("drawtext={}", params.join(":")), anim.warning))
}

/// A font family naming a file on disk rather than a fontconfig pattern.
pub fn is_font_file(family: &str) -> bool {
    let lower = family.to_ascii_lowercase();
    family.contains(['/', '\\'])
        || [".ttf", ".otf", ".ttc"].iter().any(|ext| lower.ends_with(ext))
}

/// Single-quote expressions that contain graph-level separators.
fn quote_expr(expr: &str) -> String {
    if expr.contains(',') {
        format!("'{expr}'")
    } else {
        expr.to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/slide.rs"]
mod tests;
