use super::*;
use crate::scene::model::DisplayEffect;

fn frame() -> Frame {
    Frame::new(1920, 1080).unwrap()
}

fn fields(report: &ValidationReport) -> Vec<&str> {
    report.errors.iter().map(|e| e.field.as_str()).collect()
}

#[test]
fn valid_instruction_passes() {
    let i = ZoomInstruction::new(0, 1000, frame(), BoundingBox::new(640, 320, 240, 48));
    let report = validate(&i);
    assert!(report.valid, "{:?}", report.errors);
    assert!(report.errors.is_empty());
}

#[test]
fn negative_x_names_the_field() {
    let i = ZoomInstruction::new(0, 1000, frame(), BoundingBox::new(-5, 10, 100, 100));
    let report = validate(&i);
    assert!(!report.valid);
    assert_eq!(fields(&report), vec!["$.boundingBox.x"]);
    assert!(report.errors[0].message.contains("outside frame"));
}

#[test]
fn overflowing_edges_name_size_fields() {
    let i = ZoomInstruction::new(0, 1000, frame(), BoundingBox::new(1900, 1000, 40, 100));
    let report = validate(&i);
    assert_eq!(
        fields(&report),
        vec!["$.boundingBox.width", "$.boundingBox.height"]
    );
}

#[test]
fn zero_duration_unknown_frame_and_empty_box_all_reported() {
    let i = ZoomInstruction::new(
        0,
        0,
        Frame {
            width: 0,
            height: 0,
        },
        BoundingBox::new(0, 0, 0, -1),
    );
    let report = validate(&i);
    assert!(!report.valid);
    assert_eq!(
        fields(&report),
        vec![
            "$.durationMs",
            "$.frame.width",
            "$.frame.height",
            "$.boundingBox.width",
            "$.boundingBox.height",
        ]
    );
}

#[test]
fn timeline_reports_duplicates_windows_and_boxes() {
    let timeline = Timeline {
        frame: frame(),
        effects: vec![
            DisplayEffect::zoom(EffectWindow::seconds(0.0, 1.0), BoundingBox::new(0, 0, 10, 10))
                .with_id("a"),
            DisplayEffect::zoom(EffectWindow::seconds(2.0, 2.0), BoundingBox::new(0, 0, 10, 10))
                .with_id("a"),
            DisplayEffect::zoom(EffectWindow::millis(0, 10), BoundingBox::new(1915, 0, 10, 10))
                .with_scale(f64::NAN),
        ],
    };
    let report = validate_timeline(&timeline);
    assert!(!report.valid);
    assert_eq!(
        fields(&report),
        vec![
            "$.effects[1].id",
            "$.effects[1].end",
            "$.effects[2].target.bounds.width",
            "$.effects[2].style.zoom.scale",
        ]
    );
}

#[test]
fn json_values_outside_the_typed_range_name_their_field() {
    let v = serde_json::json!({
        "effect": "zoom",
        "startTimeMs": 0,
        "durationMs": -5,
        "frame": { "width": -1, "height": 5_000_000_000u64 },
        "boundingBox": { "x": -5, "y": "0", "width": 10, "height": 10 }
    });
    let report = validate_json(&v);
    assert!(!report.valid);
    assert_eq!(
        fields(&report),
        vec![
            "$.durationMs",
            "$.frame.width",
            "$.frame.height",
            "$.boundingBox.y"
        ]
    );
    assert_eq!(report.errors[2].message, "height 5000000000 is out of range");
}

#[test]
fn well_shaped_json_falls_through_to_field_validation() {
    let v = serde_json::json!({
        "effect": "zoom",
        "startTimeMs": 0,
        "durationMs": 0,
        "frame": { "width": 1920, "height": 1080 },
        "boundingBox": { "x": -5, "y": 0, "width": 10, "height": 10 }
    });
    let report = validate_json(&v);
    assert_eq!(fields(&report), vec!["$.durationMs", "$.boundingBox.x"]);

    let not_an_object = validate_json(&serde_json::json!("zoom"));
    assert_eq!(fields(&not_an_object), vec!["$"]);
}
