use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "slidecast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ffmpeg command for a scene without running it.
    Compile(CompileArgs),
    /// Compile a scene and run ffmpeg (requires `ffmpeg` and `ffprobe` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input scene JSON. Relative media paths resolve against its directory.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output video path.
    #[arg(long)]
    out: PathBuf,

    /// ffmpeg executable.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,

    /// ffprobe executable.
    #[arg(long, default_value = "ffprobe")]
    ffprobe: PathBuf,

    /// How slide durations are stretched to the audio length.
    #[arg(long, value_enum, default_value_t = ScaleChoice::ScreenTime)]
    scale_mode: ScaleChoice,

    /// Fail when the audio duration cannot be probed instead of keeping nominal durations.
    #[arg(long)]
    strict_probe: bool,

    /// Refuse to replace an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Use this audio duration (seconds) instead of probing the audio file.
    #[arg(long)]
    audio_duration: Option<f64>,

    /// Print the compiled command as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Kill ffmpeg after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScaleChoice {
    ScreenTime,
    Exact,
}

impl From<ScaleChoice> for slidecast::ScaleMode {
    fn from(c: ScaleChoice) -> Self {
        match c {
            ScaleChoice::Exact => Self::Exact,
            ScaleChoice::ScreenTime => Self::ScreenTime,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slidecast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn compiler_opts(common: &CommonArgs, timeout: Option<Duration>) -> slidecast::CompilerOpts {
    slidecast::CompilerOpts {
        ffmpeg: common.ffmpeg.clone(),
        ffprobe: common.ffprobe.clone(),
        overwrite: !common.no_overwrite,
        timeout,
        scale_mode: common.scale_mode.into(),
        strict_probe: common.strict_probe,
        ..slidecast::CompilerOpts::default()
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<slidecast::SceneDescription> {
    let mut scene = slidecast::SceneDescription::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    for slide in &mut scene.slides {
        resolve_against(root, &mut slide.image_path);
    }
    resolve_against(root, &mut scene.audio.path);
    Ok(scene)
}

fn resolve_against(root: &Path, path: &mut PathBuf) {
    if path.is_relative() && !path.as_os_str().is_empty() {
        *path = root.join(&*path);
    }
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.common.in_path)?;
    let compiler = slidecast::SlideshowCompiler::new(compiler_opts(&args.common, None));

    let cmd = match args.audio_duration {
        Some(secs) => {
            compiler.compile_with_audio_duration(&scene, &args.common.out, Some(secs))?
        }
        None => compiler.compile(&scene, &args.common.out)?,
    };

    if args.json {
        let s = serde_json::to_string_pretty(&cmd).context("serialize compiled command")?;
        println!("{s}");
    } else {
        println!("{}", cmd.command_line());
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.common.in_path)?;
    let timeout = args.timeout_secs.map(Duration::from_secs);
    let compiler = slidecast::SlideshowCompiler::new(compiler_opts(&args.common, timeout));

    let outcome = compiler
        .render(&scene, &args.common.out)
        .with_context(|| format!("render '{}'", args.common.out.display()))?;

    eprintln!(
        "wrote {} ({}s, {} slides)",
        outcome.file_path.display(),
        slidecast::fmt_num(outcome.duration),
        outcome.slide_durations.len()
    );
    Ok(())
}
