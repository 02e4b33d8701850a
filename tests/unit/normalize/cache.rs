use super::*;
use crate::foundation::core::BoundingBox;
use crate::scene::model::{Style, Target};

fn frame() -> Frame {
    Frame::new(1920, 1080).unwrap()
}

#[test]
fn keys_by_id_and_skips_non_zoom_effects() {
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(0, 0, 192, 108))
            .with_id("intro"),
        DisplayEffect {
            id: None,
            window: EffectWindow::seconds(1.0, 2.0),
            target: Target { bounds: None },
            style: Style::default(),
        },
        DisplayEffect::zoom(EffectWindow::seconds(2.0, 3.0), BoundingBox::new(10, 10, 20, 20)),
    ];
    let set = NormalizedEffects::build(&effects, frame());
    assert_eq!(set.len(), 2);
    assert_eq!(set.frame(), Some(frame()));
    assert!(set.get("intro").is_some());
    let anon = set.get("effect-2").unwrap();
    assert_eq!(anon.index, 2);
    assert!(set.skipped().is_empty());
}

#[test]
fn invalid_boxes_are_skipped_not_fatal() {
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(-5, 0, 10, 10))
            .with_id("bad"),
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(5, 0, 10, 10))
            .with_id("good"),
    ];
    let set = NormalizedEffects::build(&effects, frame());
    assert_eq!(set.len(), 1);
    assert_eq!(set.entries()[0].id, "good");
    assert_eq!(set.skipped().len(), 1);
    assert_eq!(set.skipped()[0].id, "bad");
    assert!(set.skipped()[0].reason.contains("input error"));
}

#[test]
fn manual_scale_overrides_and_is_clamped() {
    let b = BoundingBox::new(0, 0, 1920, 1080);
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), b)
            .with_id("auto"),
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), b)
            .with_id("manual")
            .with_scale(1.8),
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), b)
            .with_id("huge")
            .with_scale(10.0),
    ];
    let set = NormalizedEffects::build(&effects, frame());
    assert_eq!(set.get("auto").unwrap().target_scale, 1.0);
    assert_eq!(set.get("manual").unwrap().target_scale, 1.8);
    assert_eq!(set.get("huge").unwrap().target_scale, 2.5);
}

#[test]
fn rebuild_is_idempotent() {
    let effects = vec![DisplayEffect::zoom(
        EffectWindow::seconds(0.0, 1.0),
        BoundingBox::new(640, 320, 240, 48),
    )];
    assert_eq!(
        NormalizedEffects::build(&effects, frame()),
        NormalizedEffects::build(&effects, frame())
    );
}

#[test]
fn duplicate_ids_keep_the_first_effect() {
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 4.0), BoundingBox::new(0, 0, 96, 54))
            .with_id("x"),
        DisplayEffect::zoom(EffectWindow::seconds(1.0, 4.0), BoundingBox::new(0, 0, 960, 540))
            .with_id("x"),
        // Collides with the fallback key of the next anonymous effect.
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(0, 0, 10, 10))
            .with_id("effect-3"),
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(0, 0, 10, 10)),
    ];
    let set = NormalizedEffects::build(&effects, frame());

    assert_eq!(set.len(), 2);
    assert_eq!(set.get("x").unwrap().index, 0);
    assert_eq!(set.get("effect-3").unwrap().index, 2);
    let skipped: Vec<&str> = set.skipped().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(skipped, vec!["x", "effect-3"]);
    assert_eq!(set.skipped()[0].reason, "duplicate effect id 'x'");
}
