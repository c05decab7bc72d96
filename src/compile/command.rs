use std::path::{Path, PathBuf};

use crate::compile::compiler::CompilerOpts;
use crate::effects::transitions::OUTPUT_LABEL;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::foundation::format::fmt_num;
use crate::scene::model::{OutputFormat, SceneDescription};

/// A fully assembled encoder invocation plus the timing it was built from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompiledCommand {
    /// Encoder executable.
    pub program: PathBuf,
    /// Arguments, passed to the encoder verbatim (no shell).
    pub args: Vec<String>,
    /// The `-filter_complex` program, also present in `args`.
    pub filter_graph: String,
    /// Target file.
    pub output_path: PathBuf,
    /// Rendered slide durations, in display order.
    pub final_durations: Vec<f64>,
    /// `xfade` offsets, empty for cuts.
    pub transition_offsets: Vec<f64>,
    /// Length of the chained video in seconds.
    pub total_duration: f64,
    /// Probed (or supplied) audio length, `None` when unknown.
    pub audio_duration: Option<f64>,
    /// Non-fatal issues found while compiling.
    pub warnings: Vec<String>,
}

impl CompiledCommand {
    /// The invocation as a single POSIX-shell-safe line, for logs and copy/paste.
    pub fn command_line(&self) -> String {
        std::iter::once(shell_quote(&self.program.to_string_lossy()))
            .chain(self.args.iter().map(|a| shell_quote(a)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote `arg` for a POSIX shell; plain words are left alone.
pub fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@+,%".contains(c));
    if plain {
        arg.to_owned()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Encoder arguments for `scene` rendered with `final_durations` through `filter_graph`.
pub fn assemble_args(
    scene: &SceneDescription,
    final_durations: &[f64],
    filter_graph: &str,
    output: &Path,
    opts: &CompilerOpts,
) -> SlidecastResult<Vec<String>> {
    let video = &scene.video;
    let fps = video.framerate.to_string();
    let mut args: Vec<String> = vec![
        (if opts.overwrite { "-y" } else { "-n" }).to_owned(),
        "-hide_banner".to_owned(),
    ];

    for (slide, duration) in scene.slides.iter().zip(final_durations) {
        args.extend([
            "-loop".to_owned(),
            "1".to_owned(),
            "-framerate".to_owned(),
            fps.clone(),
            "-t".to_owned(),
            fmt_num(*duration),
            "-i".to_owned(),
            utf8_path(&slide.image_path, "image")?,
        ]);
    }
    args.extend(["-i".to_owned(), utf8_path(&scene.audio.path, "audio")?]);
    args.extend([
        "-filter_complex".to_owned(),
        filter_graph.to_owned(),
        "-map".to_owned(),
        format!("[{OUTPUT_LABEL}]"),
        "-map".to_owned(),
        format!("{}:a", scene.slides.len()),
    ]);

    let (video_codec, audio_codec) = match video.output_format {
        OutputFormat::Mp4 | OutputFormat::Mov => ("libx264", "aac"),
        OutputFormat::Webm => ("libvpx-vp9", "libopus"),
    };
    args.extend(
        [
            "-c:v",
            video_codec,
            "-pix_fmt",
            "yuv420p",
            "-r",
            fps.as_str(),
            "-b:v",
            video.bitrate.as_str(),
            "-c:a",
            audio_codec,
            "-b:a",
            opts.audio_bitrate.as_str(),
        ]
        .map(str::to_owned),
    );
    if video.output_format != OutputFormat::Webm {
        args.extend(["-movflags".to_owned(), "+faststart".to_owned()]);
    }
    args.push("-shortest".to_owned());
    args.push(utf8_path(output, "output")?);
    Ok(args)
}

fn utf8_path(path: &Path, what: &str) -> SlidecastResult<String> {
    path.to_str().map(str::to_owned).ok_or_else(|| {
        SlidecastError::validation(format!(
            "{what} path '{}' is not valid UTF-8",
            path.display()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/command.rs"]
mod tests;
