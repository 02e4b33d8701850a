use super::*;

#[test]
fn frame_new_rejects_unknown_dimensions() {
    assert!(Frame::new(1920, 1080).is_ok());
    assert!(Frame::new(0, 1080).is_err());
    assert!(Frame::new(1920, 0).is_err());
}

#[test]
fn bounding_box_fits_in_frame_edges() {
    let frame = Frame::new(100, 50).unwrap();
    assert!(BoundingBox::new(0, 0, 100, 50).fits_in(frame));
    assert!(BoundingBox::new(90, 40, 10, 10).fits_in(frame));
    assert!(!BoundingBox::new(91, 40, 10, 10).fits_in(frame));
    assert!(!BoundingBox::new(-1, 0, 10, 10).fits_in(frame));
    assert!(!BoundingBox::new(0, 0, 0, 10).fits_in(frame));
}

#[test]
fn ensure_fits_reports_input_errors() {
    let frame = Frame {
        width: 100,
        height: 50,
    };
    let err = BoundingBox::new(0, 0, 10, -3).ensure_fits(frame).unwrap_err();
    assert!(matches!(err, ZoomfxError::Input(_)));

    let unknown = Frame {
        width: 0,
        height: 0,
    };
    let err = BoundingBox::new(0, 0, 10, 10)
        .ensure_fits(unknown)
        .unwrap_err();
    assert!(err.to_string().contains("frame dimensions"));
}

#[test]
fn window_contains_is_inclusive() {
    let w = EffectWindow::seconds(1.0, 2.0);
    assert!(!w.contains(0.999));
    assert!(w.contains(1.0));
    assert!(w.contains(2.0));
    assert!(!w.contains(2.001));
}

#[test]
fn window_deserializes_both_domains() {
    let secs: EffectWindow = serde_json::from_str(r#"{"start": 1.5, "end": 3}"#).unwrap();
    assert_eq!(secs, EffectWindow::seconds(1.5, 3.0));

    let ms: EffectWindow =
        serde_json::from_str(r#"{"startTimeMs": 1500, "durationMs": 250}"#).unwrap();
    assert_eq!(ms, EffectWindow::millis(1500, 250));
    assert_eq!(ms.start_s(), 1.5);
    assert_eq!(ms.end_s(), 1.75);
}

#[test]
fn window_to_millis_rounds_seconds_and_keeps_native_ms() {
    assert_eq!(
        EffectWindow::seconds(1.2346, 2.0).to_millis().unwrap(),
        (1235, 765)
    );
    assert_eq!(
        EffectWindow::millis(7, 3).to_millis().unwrap(),
        (7, 3)
    );
    assert!(EffectWindow::seconds(-1.0, 2.0).to_millis().is_err());
    assert!(EffectWindow::seconds(f64::NAN, 2.0).to_millis().is_err());
    assert_eq!(
        EffectWindow::seconds(2.0, 1.0).to_millis().unwrap(),
        (2000, 0)
    );
}
