use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::compile::command::{CompiledCommand, assemble_args};
use crate::compile::slide::build_slide_chain;
use crate::compile::timing::{ScaleMode, compute_timing};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::effects::transitions::sequence_slides;
use crate::encode::ffmpeg::{RenderOutcome, run_ffmpeg};
use crate::encode::probe::{DurationProbe, FfprobeDurationProbe};
use crate::foundation::error::SlidecastResult;
use crate::scene::model::SceneDescription;

/// Compiler and encoder settings that are not part of the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct CompilerOpts {
    /// Encoder executable.
    pub ffmpeg: PathBuf,
    /// Probe executable used by the default [`DurationProbe`].
    pub ffprobe: PathBuf,
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Kill the encoder after this long.
    pub timeout: Option<Duration>,
    /// How slide durations are stretched to the audio.
    pub scale_mode: ScaleMode,
    /// Fail instead of warning when the audio cannot be probed.
    pub strict_probe: bool,
    /// Audio bitrate passed to the encoder.
    pub audio_bitrate: String,
}

impl Default for CompilerOpts {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            overwrite: true,
            timeout: None,
            scale_mode: ScaleMode::ScreenTime,
            strict_probe: false,
            audio_bitrate: "192k".to_owned(),
        }
    }
}

/// Turns [`SceneDescription`]s into encoder commands and runs them.
///
/// Holds no per-scene state; one compiler can serve concurrent compilations.
pub struct SlideshowCompiler {
    opts: CompilerOpts,
    probe: Box<dyn DurationProbe>,
    diagnostics: Box<dyn Diagnostics>,
}

impl SlideshowCompiler {
    /// Compiler probing audio with `opts.ffprobe` and logging through `tracing`.
    pub fn new(opts: CompilerOpts) -> Self {
        let probe = FfprobeDurationProbe::new(opts.ffprobe.clone());
        Self {
            opts,
            probe: Box::new(probe),
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    /// Replace the audio duration probe.
    pub fn with_probe(mut self, probe: impl DurationProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Replace the diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// Current options.
    pub fn opts(&self) -> &CompilerOpts {
        &self.opts
    }

    /// Validate `scene`, probe its audio, and build the encoder command writing to `output`.
    #[tracing::instrument(skip_all, fields(slides = scene.slides.len(), output = %output.display()))]
    pub fn compile(
        &self,
        scene: &SceneDescription,
        output: &Path,
    ) -> SlidecastResult<CompiledCommand> {
        scene.validate()?;
        let mut warnings = Vec::new();
        let audio = match self.probe.probe_duration(&scene.audio.path) {
            Ok(secs) => Some(secs),
            Err(e) if !self.opts.strict_probe => {
                self.warn(&mut warnings, e.to_string());
                None
            }
            Err(e) => return Err(e),
        };
        self.build(scene, output, audio, warnings)
    }

    /// Like [`SlideshowCompiler::compile`] with a known audio duration; never runs the probe.
    #[tracing::instrument(skip_all, fields(slides = scene.slides.len(), output = %output.display()))]
    pub fn compile_with_audio_duration(
        &self,
        scene: &SceneDescription,
        output: &Path,
        audio_duration: Option<f64>,
    ) -> SlidecastResult<CompiledCommand> {
        scene.validate()?;
        self.build(scene, output, audio_duration, Vec::new())
    }

    /// Compile `scene` and run the encoder.
    #[tracing::instrument(skip_all, fields(output = %output.display()))]
    pub fn render(&self, scene: &SceneDescription, output: &Path) -> SlidecastResult<RenderOutcome> {
        let cmd = self.compile(scene, output)?;
        run_ffmpeg(&cmd, self.opts.overwrite, self.opts.timeout)
    }

    fn build(
        &self,
        scene: &SceneDescription,
        output: &Path,
        audio_duration: Option<f64>,
        mut warnings: Vec<String>,
    ) -> SlidecastResult<CompiledCommand> {
        let video = &scene.video;
        let td = video.effective_transition_duration();

        let timing = compute_timing(
            &scene.nominal_durations(),
            td,
            audio_duration,
            self.opts.scale_mode,
        );
        for w in &timing.warnings {
            self.warn(&mut warnings, w.clone());
        }
        tracing::debug!(
            overlap = timing.overlap,
            scale = ?timing.scale,
            "slide timing"
        );

        let mut chains = Vec::with_capacity(scene.slides.len());
        for (i, (slide, &duration)) in scene
            .slides
            .iter()
            .zip(&timing.final_durations)
            .enumerate()
        {
            let chain = build_slide_chain(i, slide, duration, video)?;
            for w in chain.warnings {
                self.warn(&mut warnings, w);
            }
            chains.push(chain.filter);
        }

        let sequence = sequence_slides(&timing.final_durations, video.transition_type, td);
        chains.push(sequence.filter);
        let filter_graph = chains.join(";");

        if let Some(ext) = output.extension().and_then(|e| e.to_str())
            && !ext.eq_ignore_ascii_case(video.output_format.extension())
        {
            self.warn(
                &mut warnings,
                format!(
                    "output extension '.{ext}' does not match output format '{}'",
                    video.output_format.extension()
                ),
            );
        }

        let args = assemble_args(
            scene,
            &timing.final_durations,
            &filter_graph,
            output,
            &self.opts,
        )?;
        tracing::debug!(
            total_duration = sequence.total_duration,
            args = args.len(),
            "compiled encoder command"
        );

        Ok(CompiledCommand {
            program: self.opts.ffmpeg.clone(),
            args,
            filter_graph,
            output_path: output.to_path_buf(),
            final_durations: timing.final_durations,
            transition_offsets: sequence.offsets,
            total_duration: sequence.total_duration,
            audio_duration,
            warnings,
        })
    }

    fn warn(&self, warnings: &mut Vec<String>, message: String) {
        self.diagnostics.warn(&message);
        warnings.push(message);
    }
}

impl Default for SlideshowCompiler {
    fn default() -> Self {
        Self::new(CompilerOpts::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
