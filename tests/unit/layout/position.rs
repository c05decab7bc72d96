use super::*;

#[test]
fn standard_anchors_on_720p() {
    let cases = [
        (Anchor::TopLeft, "20", "20"),
        (Anchor::Top, "640-text_w/2", "20"),
        (Anchor::TopRight, "1260-text_w", "20"),
        (Anchor::Left, "20", "360-text_h/2"),
        (Anchor::Center, "640-text_w/2", "360-text_h/2"),
        (Anchor::Right, "1260-text_w", "360-text_h/2"),
        (Anchor::BottomLeft, "20", "700-text_h"),
        (Anchor::Bottom, "640-text_w/2", "700-text_h"),
        (Anchor::BottomRight, "1260-text_w", "700-text_h"),
    ];
    for (anchor, x, y) in cases {
        let p = Placement::resolve(anchor, None, 1280, 720);
        assert_eq!(p.x_expr(), x, "{anchor:?}");
        assert_eq!(p.y_expr(), y, "{anchor:?}");
    }
}

#[test]
fn every_anchor_is_total_and_deterministic() {
    let custom = Some(CustomPoint { x: 100.0, y: 50.0 });
    for anchor in Anchor::STANDARD.into_iter().chain([Anchor::Custom]) {
        let a = Placement::resolve(anchor, custom, 854, 480);
        let b = Placement::resolve(anchor, custom, 854, 480);
        assert_eq!(a, b);
        assert!(!a.x_expr().is_empty());
        assert!(!a.y_expr().is_empty());
    }
}

#[test]
fn odd_canvas_sizes_keep_fractions() {
    let p = Placement::resolve(Anchor::Center, None, 855, 481);
    assert_eq!(p.x_expr(), "427.5-text_w/2");
    assert_eq!(p.y_expr(), "240.5-text_h/2");
}

#[test]
fn custom_uses_literal_coordinates() {
    let p = Placement::resolve(
        Anchor::Custom,
        Some(CustomPoint { x: 100.0, y: 250.5 }),
        1920,
        1080,
    );
    assert_eq!((p.x, p.y), (100.0, 250.5));
    assert_eq!(p.x_expr(), "100");
    assert_eq!(p.y_expr(), "250.5");
    assert_eq!(p.slide_from, SlideFrom::Below);
}

#[test]
fn custom_without_usable_coordinates_falls_back_to_center() {
    let center = Placement::resolve(Anchor::Center, None, 1920, 1080);
    for custom in [
        None,
        Some(CustomPoint { x: 0.0, y: 300.0 }),
        Some(CustomPoint { x: 300.0, y: 0.0 }),
    ] {
        assert_eq!(
            Placement::resolve(Anchor::Custom, custom, 1920, 1080),
            center
        );
    }
}

#[test]
fn slide_sides_follow_anchor() {
    let from = |a| Placement::resolve(a, None, 1280, 720).slide_from;
    assert_eq!(from(Anchor::Top), SlideFrom::Above);
    assert_eq!(from(Anchor::TopRight), SlideFrom::Above);
    assert_eq!(from(Anchor::Bottom), SlideFrom::Below);
    assert_eq!(from(Anchor::BottomLeft), SlideFrom::Below);
    assert_eq!(from(Anchor::Left), SlideFrom::Left);
    assert_eq!(from(Anchor::Right), SlideFrom::Right);
    assert_eq!(from(Anchor::Center), SlideFrom::Below);
    assert!(SlideFrom::Above.is_vertical());
    assert!(!SlideFrom::Left.is_vertical());
    assert_eq!(SlideFrom::Above.sign(), -1.0);
    assert_eq!(SlideFrom::Right.sign(), 1.0);
}
