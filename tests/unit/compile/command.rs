use super::*;
use crate::scene::model::{AudioTrack, Slide, VideoConfig};

fn scene(format: OutputFormat) -> SceneDescription {
    let slide = |path: &str| Slide {
        image_path: path.into(),
        duration: 5.0,
        text_blocks: Vec::new(),
    };
    SceneDescription {
        slides: vec![slide("a.jpg"), slide("b.jpg")],
        audio: AudioTrack {
            path: "voice.mp3".into(),
        },
        video: VideoConfig {
            output_format: format,
            ..VideoConfig::default()
        },
    }
}

#[test]
fn mp4_argument_order() {
    let args = assemble_args(
        &scene(OutputFormat::Mp4),
        &[4.5, 3.0],
        "G",
        Path::new("out/v.mp4"),
        &CompilerOpts::default(),
    )
    .unwrap();
    #[rustfmt::skip]
    let expected = [
        "-y", "-hide_banner",
        "-loop", "1", "-framerate", "30", "-t", "4.5", "-i", "a.jpg",
        "-loop", "1", "-framerate", "30", "-t", "3", "-i", "b.jpg",
        "-i", "voice.mp3",
        "-filter_complex", "G",
        "-map", "[vout]", "-map", "2:a",
        "-c:v", "libx264", "-pix_fmt", "yuv420p", "-r", "30", "-b:v", "4M",
        "-c:a", "aac", "-b:a", "192k",
        "-movflags", "+faststart",
        "-shortest", "out/v.mp4",
    ];
    assert_eq!(args, expected);
}

#[test]
fn webm_uses_vp9_and_opus() {
    let opts = CompilerOpts {
        overwrite: false,
        ..CompilerOpts::default()
    };
    let args = assemble_args(
        &scene(OutputFormat::Webm),
        &[5.0, 5.0],
        "G",
        Path::new("v.webm"),
        &opts,
    )
    .unwrap();
    assert_eq!(args[0], "-n");
    let codec = |flag: &str| {
        let i = args.iter().position(|a| a == flag).unwrap();
        args[i + 1].clone()
    };
    assert_eq!(codec("-c:v"), "libvpx-vp9");
    assert_eq!(codec("-c:a"), "libopus");
    assert!(!args.iter().any(|a| a == "-movflags"));
    assert_eq!(args.last().map(String::as_str), Some("v.webm"));
}

#[test]
fn shell_quoting() {
    assert_eq!(shell_quote("libx264"), "libx264");
    assert_eq!(shell_quote("out/v.mp4"), "out/v.mp4");
    assert_eq!(shell_quote("[vout]"), "'[vout]'");
    assert_eq!(shell_quote("it's here"), r"'it'\''s here'");
    assert_eq!(shell_quote(""), "''");
}

#[test]
fn command_line_quotes_graph() {
    let cmd = CompiledCommand {
        program: "ffmpeg".into(),
        args: vec!["-filter_complex".to_owned(), "[0:v]null[vout]".to_owned()],
        filter_graph: "[0:v]null[vout]".to_owned(),
        output_path: "v.mp4".into(),
        final_durations: vec![1.0],
        transition_offsets: Vec::new(),
        total_duration: 1.0,
        audio_duration: None,
        warnings: Vec::new(),
    };
    assert_eq!(cmd.command_line(), "ffmpeg -filter_complex '[0:v]null[vout]'");
}
