use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::scene::model::{Anchor, SceneDescription, TextBlock, VideoConfig};
use crate::text::color::FfColor;

impl SceneDescription {
    /// Reject scenes that cannot compile into a well-formed command.
    ///
    /// Runs before any external process is started.
    pub fn validate(&self) -> SlidecastResult<()> {
        if self.slides.is_empty() {
            return Err(SlidecastError::validation("scene has no slides"));
        }
        if self.audio.path.as_os_str().is_empty() {
            return Err(SlidecastError::validation("audio path must be non-empty"));
        }
        self.video.validate()?;

        for (i, slide) in self.slides.iter().enumerate() {
            if slide.image_path.as_os_str().is_empty() {
                return Err(SlidecastError::validation(format!(
                    "slide {i} has an empty image path"
                )));
            }
            if !slide.duration.is_finite() || slide.duration <= 0.0 {
                return Err(SlidecastError::validation(format!(
                    "slide {i} duration must be a positive number of seconds (got {})",
                    slide.duration
                )));
            }
            for block in &slide.text_blocks {
                block
                    .validate()
                    .map_err(|e| SlidecastError::validation(format!("slide {i}: {e}")))?;
            }
        }

        Ok(())
    }
}

impl VideoConfig {
    /// Check output settings.
    pub fn validate(&self) -> SlidecastResult<()> {
        if self.framerate == 0 {
            return Err(SlidecastError::validation("framerate must be > 0"));
        }
        if !self.transition_duration.is_finite() || self.transition_duration < 0.0 {
            return Err(SlidecastError::validation(format!(
                "transition_duration must be >= 0 (got {})",
                self.transition_duration
            )));
        }
        let bitrate_ok = !self.bitrate.is_empty()
            && self
                .bitrate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.');
        if !bitrate_ok {
            return Err(SlidecastError::validation(format!(
                "bitrate '{}' is not a plain ffmpeg rate like '4M' or '2500k'",
                self.bitrate
            )));
        }
        Ok(())
    }
}

impl TextBlock {
    /// Check one overlay. Disabled blocks only need a usable custom position.
    ///
    /// Returns the bare reason; callers add slide context.
    fn validate(&self) -> Result<(), String> {
        let id = &self.id;
        if self.position == Anchor::Custom && self.custom_position.is_none() {
            return Err(format!(
                "text block '{id}' uses a custom position without coordinates"
            ));
        }
        if !self.enabled {
            return Ok(());
        }

        if self.font_size == 0 {
            return Err(format!("text block '{id}' font_size must be > 0"));
        }
        let anim = &self.animation;
        if !anim.duration.is_finite() || anim.duration < 0.0 {
            return Err(format!(
                "text block '{id}' animation duration must be >= 0 (got {})",
                anim.duration
            ));
        }
        if !anim.delay.is_finite() || anim.delay < 0.0 {
            return Err(format!(
                "text block '{id}' animation delay must be >= 0 (got {})",
                anim.delay
            ));
        }
        if let Some(p) = self.custom_position
            && !(p.x.is_finite() && p.y.is_finite())
        {
            return Err(format!("text block '{id}' custom position must be finite"));
        }

        FfColor::parse(&self.font_color)
            .map_err(|e| format!("text block '{id}' font_color: {e}"))?;
        if let Some(bg) = &self.background_color {
            FfColor::parse(bg).map_err(|e| format!("text block '{id}' background_color: {e}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/validate.rs"]
mod tests;
