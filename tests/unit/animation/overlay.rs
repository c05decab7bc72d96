use super::*;
use crate::scene::model::Anchor;

fn anim(kind: AnimationKind, duration: f64, delay: f64) -> TextAnimation {
    TextAnimation {
        kind,
        duration,
        delay,
        easing: Ease::Linear,
    }
}

fn placement(anchor: Anchor) -> Placement {
    Placement::resolve(anchor, None, 1280, 720)
}

#[test]
fn window_fits_inside_slide() {
    let w = AnimationWindow::new(1.0, 0.5, 4.0);
    assert_eq!(
        (w.fade_in_start, w.fade_in_end, w.fade_out_start, w.fade_out_end),
        (0.5, 1.5, 3.0, 4.0)
    );
    assert!(w.is_ordered());
}

#[test]
fn long_ramps_and_delays_are_clipped() {
    let w = AnimationWindow::new(3.0, 0.0, 4.0);
    assert_eq!((w.fade_in_end, w.fade_out_start), (3.0, 3.0));

    let w = AnimationWindow::new(2.0, 5.0, 4.0);
    assert_eq!(
        (w.fade_in_start, w.fade_in_end, w.fade_out_start, w.fade_out_end),
        (4.0, 4.0, 4.0, 4.0)
    );

    let w = AnimationWindow::new(1.0, 0.0, 0.5);
    assert_eq!((w.fade_in_end, w.fade_out_start), (0.5, 0.5));
}

#[test]
fn window_is_ordered_for_any_timing() {
    let values = [0.0, 0.1, 0.5, 1.0, 2.5, 4.0, 10.0];
    for &duration in &values {
        for &delay in &values {
            for &slide in &[0.2, 1.0, 4.615385, 12.0] {
                let w = AnimationWindow::new(duration, delay, slide);
                assert!(w.is_ordered(), "{duration} {delay} {slide}: {w:?}");
                assert_eq!(w.fade_out_end, slide);
            }
        }
    }
}

#[test]
fn degenerate_ramp_is_a_step() {
    assert_eq!(progress_expr(2.0, 2.0), "gte(t,2)");
    assert_eq!(progress_expr(0.5, 1.75), "clip((t-0.5)/1.25,0,1)");
}

#[test]
fn fade_alpha_has_both_ramps() {
    let w = AnimationWindow::new(1.0, 0.5, 4.0);
    assert_eq!(
        w.fade_alpha(Ease::Linear),
        "if(lt(t,0.5),0,if(lt(t,1.5),clip((t-0.5)/1,0,1),\
         if(lt(t,3),1,if(lt(t,4),(1-clip((t-3)/1,0,1)),0))))"
    );
}

#[test]
fn easing_wraps_progress() {
    let w = AnimationWindow::new(2.0, 0.0, 6.0);
    assert_eq!(w.fade_in(Ease::InQuad), "pow(clip((t-0)/2,0,1),2)");
}

#[test]
fn static_kinds_add_nothing() {
    let p = placement(Anchor::Center);
    let none = OverlayAnimation::compile("a", &anim(AnimationKind::None, 1.0, 0.0), &p, 48, 5.0);
    assert_eq!(none, OverlayAnimation::default());

    let unknown = OverlayAnimation::compile(
        "title",
        &anim(AnimationKind::Unknown("bounce".into()), 1.0, 0.0),
        &p,
        48,
        5.0,
    );
    assert!(unknown.alpha.is_none() && unknown.x.is_none() && unknown.y.is_none());
    let warning = unknown.warning.unwrap();
    assert!(warning.contains("title") && warning.contains("bounce"), "{warning}");
}

#[test]
fn slide_moves_along_anchor_axis() {
    let up = OverlayAnimation::compile(
        "a",
        &anim(AnimationKind::Slide, 1.0, 0.0),
        &placement(Anchor::Bottom),
        48,
        5.0,
    );
    assert_eq!(up.x, None);
    assert_eq!(
        up.y.as_deref(),
        Some("700-text_h+100*(1-clip((t-0)/1,0,1))")
    );
    assert_eq!(up.alpha.as_deref(), Some("clip((t-0)/1,0,1)"));

    let from_left = OverlayAnimation::compile(
        "a",
        &anim(AnimationKind::Slide, 1.0, 0.0),
        &placement(Anchor::Left),
        48,
        5.0,
    );
    assert_eq!(from_left.y, None);
    assert_eq!(
        from_left.x.as_deref(),
        Some("20-100*(1-clip((t-0)/1,0,1))")
    );

    let from_top = OverlayAnimation::compile(
        "a",
        &anim(AnimationKind::Slide, 0.5, 1.0),
        &placement(Anchor::TopLeft),
        48,
        5.0,
    );
    assert_eq!(
        from_top.y.as_deref(),
        Some("20-100*(1-clip((t-1)/0.5,0,1))")
    );
}

#[test]
fn scale_grows_font_size() {
    let a = OverlayAnimation::compile(
        "a",
        &anim(AnimationKind::Scale, 1.0, 0.0),
        &placement(Anchor::Center),
        64,
        5.0,
    );
    assert_eq!(
        a.font_size.as_deref(),
        Some("max(1,64*clip((t-0)/1,0,1))")
    );
    assert!(a.alpha.is_some());
}

#[test]
fn typewriter_fades_in_and_swaps_punctuation() {
    let a = OverlayAnimation::compile(
        "a",
        &anim(AnimationKind::Typewriter, 1.0, 0.0),
        &placement(Anchor::Center),
        48,
        5.0,
    );
    assert!(a.typewriter);
    assert_eq!(a.alpha.as_deref(), Some("clip((t-0)/1,0,1)"));
    let text = a.text_value("it's 5:00");
    assert!(!text.contains('\'') && !text.contains(':'), "{text}");

    let plain = OverlayAnimation::default();
    assert_eq!(plain.text_value("a:b"), escape_drawtext_text("a:b"));
}
