use super::*;

#[test]
fn paths_render_fields_keys_and_indices() {
    let path = [
        PathElem::Index(2),
        PathElem::Field("boundingBox"),
        PathElem::Key("depth".to_owned()),
    ];
    assert_eq!(format_path(&path), "$[2].boundingBox.depth");
    assert_eq!(format_path(&[]), "$");
}

#[test]
fn field_error_display_includes_path() {
    let e = FieldError::at(&[PathElem::Field("durationMs")], "must be > 0");
    assert_eq!(e.to_string(), "$.durationMs: must be > 0");
    let joined = join_errors(&[e.clone(), e]);
    assert_eq!(joined, "$.durationMs: must be > 0; $.durationMs: must be > 0");
}
