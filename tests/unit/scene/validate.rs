use super::*;
use crate::scene::model::{AudioTrack, CustomPoint, Slide};

fn block(text: &str) -> TextBlock {
    serde_json::from_value(serde_json::json!({ "id": "t0", "text": text })).unwrap()
}

fn basic_scene() -> SceneDescription {
    SceneDescription {
        slides: vec![
            Slide {
                image_path: "a.jpg".into(),
                duration: 5.0,
                text_blocks: vec![block("hello")],
            },
            Slide {
                image_path: "b.jpg".into(),
                duration: 3.0,
                text_blocks: Vec::new(),
            },
        ],
        audio: AudioTrack {
            path: "voice.mp3".into(),
        },
        video: VideoConfig::default(),
    }
}

fn reason(scene: &SceneDescription) -> String {
    match scene.validate() {
        Err(SlidecastError::Validation(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn basic_scene_is_valid() {
    basic_scene().validate().unwrap();
}

#[test]
fn rejects_empty_slide_list() {
    let mut scene = basic_scene();
    scene.slides.clear();
    assert!(reason(&scene).contains("no slides"));
}

#[test]
fn rejects_bad_durations() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut scene = basic_scene();
        scene.slides[1].duration = bad;
        assert!(reason(&scene).contains("slide 1 duration"), "{bad}");
    }
}

#[test]
fn rejects_empty_paths() {
    let mut scene = basic_scene();
    scene.slides[0].image_path = "".into();
    assert!(reason(&scene).contains("empty image path"));

    let mut scene = basic_scene();
    scene.audio.path = "".into();
    assert!(reason(&scene).contains("audio path"));
}

#[test]
fn custom_anchor_requires_coordinates_even_when_disabled() {
    let mut scene = basic_scene();
    scene.slides[0].text_blocks[0].position = Anchor::Custom;
    scene.slides[0].text_blocks[0].enabled = false;
    let msg = reason(&scene);
    assert!(msg.starts_with("slide 0:"), "{msg}");
    assert!(msg.contains("custom position"), "{msg}");

    scene.slides[0].text_blocks[0].custom_position = Some(CustomPoint { x: 10.0, y: 10.0 });
    scene.validate().unwrap();
}

#[test]
fn rejects_bad_enabled_blocks() {
    let mut scene = basic_scene();
    scene.slides[0].text_blocks[0].font_size = 0;
    assert!(reason(&scene).contains("font_size"));

    let mut scene = basic_scene();
    scene.slides[0].text_blocks[0].animation.delay = -0.5;
    assert!(reason(&scene).contains("delay"));

    let mut scene = basic_scene();
    scene.slides[0].text_blocks[0].animation.duration = f64::NAN;
    assert!(reason(&scene).contains("animation duration"));

    let mut scene = basic_scene();
    scene.slides[0].text_blocks[0].font_color = "white;drawbox".to_owned();
    assert!(reason(&scene).contains("font_color"));

    let mut scene = basic_scene();
    scene.slides[0].text_blocks[0].background_color = Some("#12".to_owned());
    assert!(reason(&scene).contains("background_color"));
}

#[test]
fn disabled_blocks_skip_style_checks() {
    let mut scene = basic_scene();
    let b = &mut scene.slides[0].text_blocks[0];
    b.enabled = false;
    b.font_size = 0;
    b.font_color = "???".to_owned();
    scene.validate().unwrap();
}

#[test]
fn rejects_bad_video_settings() {
    let mut scene = basic_scene();
    scene.video.framerate = 0;
    assert!(reason(&scene).contains("framerate"));

    let mut scene = basic_scene();
    scene.video.transition_duration = -1.0;
    assert!(reason(&scene).contains("transition_duration"));

    for bad in ["", "4M -vf x", "4M;"] {
        let mut scene = basic_scene();
        scene.video.bitrate = bad.to_owned();
        assert!(reason(&scene).contains("bitrate"), "{bad:?}");
    }

    let mut scene = basic_scene();
    scene.video.bitrate = "2.5M".to_owned();
    scene.validate().unwrap();
}
