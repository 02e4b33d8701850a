use super::*;
use crate::foundation::core::EffectWindow;
use crate::scene::model::{Style, Target, ZoomStyle};
use serde_json::json;

fn frame() -> Frame {
    Frame::new(1920, 1080).unwrap()
}

#[test]
fn wire_format_is_exact() {
    let i = ZoomInstruction::new(1500, 2000, frame(), BoundingBox::new(640, 320, 240, 48));
    let v = serde_json::to_value(i).unwrap();
    assert_eq!(
        v,
        json!({
            "effect": "zoom",
            "startTimeMs": 1500,
            "durationMs": 2000,
            "frame": { "width": 1920, "height": 1080 },
            "boundingBox": { "x": 640, "y": 320, "width": 240, "height": 48 }
        })
    );
}

#[test]
fn generate_filters_and_copies_original_box() {
    let b = BoundingBox::new(640, 320, 240, 48);
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(1.5, 3.5), b),
        DisplayEffect {
            id: None,
            window: EffectWindow::seconds(0.0, 1.0),
            target: Target { bounds: Some(b) },
            style: Style {
                zoom: ZoomStyle {
                    enabled: false,
                    scale: None,
                },
            },
        },
        DisplayEffect {
            id: None,
            window: EffectWindow::seconds(0.0, 1.0),
            target: Target { bounds: None },
            style: Style {
                zoom: ZoomStyle {
                    enabled: true,
                    scale: Some(2.0),
                },
            },
        },
        DisplayEffect::zoom(EffectWindow::millis(4000, 1250), b).with_scale(2.2),
    ];

    let candidates = generate(&effects, frame());
    assert_eq!(
        candidates.iter().map(|c| c.index).collect::<Vec<_>>(),
        vec![0, 3]
    );
    assert_eq!(candidates[1].id, "effect-3");
    let out: Vec<ZoomInstruction> = candidates
        .into_iter()
        .map(|c| c.instruction.unwrap())
        .collect();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].start_time_ms(), 1500);
    assert_eq!(out[0].duration_ms(), 2000);
    assert_eq!(out[0].bounding_box(), b);
    assert_eq!(out[0].effect(), EffectKind::Zoom);
    assert_eq!(out[1].start_time_ms(), 4000);
    assert_eq!(out[1].duration_ms(), 1250);
    assert_eq!(out[1].frame(), frame());
}

#[test]
fn generated_instructions_are_pure() {
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(0.25, 0.75), BoundingBox::new(1, 1, 2, 2))
            .with_scale(2.4),
    ];
    for c in generate(&effects, frame()) {
        let v = serde_json::to_value(c.instruction.unwrap()).unwrap();
        let report = crate::schema::purity::check_purity(&v);
        assert!(report.clean, "{:?}", report.violations);
    }
}

#[test]
fn unusable_window_fails_only_its_own_effect() {
    let effects = vec![
        DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(1, 1, 2, 2)),
        DisplayEffect::zoom(EffectWindow::seconds(-0.5, 1.0), BoundingBox::new(1, 1, 2, 2))
            .with_id("early"),
        DisplayEffect::zoom(EffectWindow::seconds(2.0, 3.0), BoundingBox::new(1, 1, 2, 2)),
    ];
    let candidates = generate(&effects, frame());
    assert_eq!(candidates.len(), 3);

    assert_eq!(candidates[0].instruction.as_ref().unwrap().start_time_ms(), 0);
    assert_eq!(candidates[2].instruction.as_ref().unwrap().start_time_ms(), 2000);

    assert_eq!(candidates[1].id, "early");
    let err = candidates[1].instruction.as_ref().unwrap_err();
    assert!(matches!(err, ZoomfxError::Input(_)));
    assert!(err.to_string().contains("effect 'early'"));
}

#[test]
fn from_json_checked_reports_purity_before_parsing() {
    let dirty = json!({
        "effect": "zoom",
        "startTimeMs": 0,
        "durationMs": 10,
        "frame": { "width": 10, "height": 10 },
        "boundingBox": { "x": 0, "y": 0, "width": 1, "height": 1 },
        "scale": 1.5
    });
    match ZoomInstruction::from_json_checked(&dirty) {
        Err(ZoomfxError::Purity { violations }) => assert_eq!(violations, vec!["$.scale"]),
        other => panic!("expected purity error, got {other:?}"),
    }

    let mut clean = dirty.clone();
    clean.as_object_mut().unwrap().remove("scale");
    let parsed = ZoomInstruction::from_json_checked(&clean).unwrap();
    assert_eq!(parsed.duration_ms(), 10);

    let mut wrong_kind = clean;
    wrong_kind["effect"] = json!("blur");
    match ZoomInstruction::from_json_checked(&wrong_kind) {
        Err(ZoomfxError::Validation(msg)) => assert!(msg.starts_with("$.effect:"), "{msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn from_json_checked_names_unrepresentable_fields() {
    let bad = json!({
        "effect": "zoom",
        "startTimeMs": 0,
        "durationMs": -5,
        "frame": { "width": -1, "height": 1080 },
        "boundingBox": { "x": 0, "y": 0, "width": 1, "height": 1 }
    });
    match ZoomInstruction::from_json_checked(&bad) {
        Err(ZoomfxError::Validation(msg)) => {
            assert!(msg.contains("$.durationMs: durationMs must be > 0, got -5"), "{msg}");
            assert!(msg.contains("$.frame.width: frame width must be > 0, got -1"), "{msg}");
            assert!(!msg.contains("$.frame.height"), "{msg}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
