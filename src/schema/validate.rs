use crate::export::instruction::ZoomInstruction;
use crate::foundation::core::{BoundingBox, EffectWindow, Frame};
use crate::scene::timeline::Timeline;
use crate::schema::path::{FieldError, PathElem};
use serde::Deserialize as _;
use serde_json::Value;
use std::collections::HashSet;

/// Outcome of field-level validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    /// `true` when no errors were found.
    pub valid: bool,
    /// One entry per rejected field.
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check an export instruction before it may be submitted to a renderer.
///
/// Enforces known frame dimensions, a positive box size, a box fully inside the frame and a
/// positive duration. Every failing field gets its own entry.
pub fn validate(instruction: &ZoomInstruction) -> ValidationReport {
    let mut errors = Vec::new();

    if instruction.duration_ms() == 0 {
        errors.push(FieldError::at(
            &[PathElem::Field("durationMs")],
            "durationMs must be > 0",
        ));
    }
    let mut path = Vec::new();
    check_frame(instruction.frame(), &mut path, &mut errors);
    check_box(
        instruction.bounding_box(),
        instruction.frame(),
        &mut vec![PathElem::Field("boundingBox")],
        &mut errors,
    );

    ValidationReport::from_errors(errors)
}

/// Validate an instruction given as raw JSON.
///
/// Values the typed instruction cannot hold (negative or fractional integers, missing fields,
/// a wrong `effect`) are reported against their field first; a well-shaped instruction is then
/// parsed and checked with [`validate`]. Purity is not checked here.
pub fn validate_json(value: &Value) -> ValidationReport {
    let errors = check_wire_shape(value);
    if !errors.is_empty() {
        return ValidationReport::from_errors(errors);
    }
    match ZoomInstruction::deserialize(value) {
        Ok(instruction) => validate(&instruction),
        Err(e) => ValidationReport::from_errors(vec![FieldError::at(&[], e.to_string())]),
    }
}

/// Field findings for JSON values that cannot be represented by [`ZoomInstruction`].
///
/// Zero durations and zero frame sizes are representable and left to [`validate`].
pub(crate) fn check_wire_shape(value: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let Some(obj) = value.as_object() else {
        errors.push(FieldError::at(&[], "instruction must be a JSON object"));
        return errors;
    };

    match obj.get("effect") {
        Some(Value::String(kind)) if kind == "zoom" => {}
        Some(other) => errors.push(FieldError::at(
            &[PathElem::Field("effect")],
            format!("effect must be \"zoom\", got {other}"),
        )),
        None => errors.push(FieldError::at(
            &[PathElem::Field("effect")],
            "effect is required",
        )),
    }

    let mut path = Vec::new();
    check_int(obj, &mut path, "startTimeMs", IntKind::Millis, &mut errors);
    check_int(obj, &mut path, "durationMs", IntKind::Millis, &mut errors);

    for (field, names, kind) in [
        ("frame", &["width", "height"][..], IntKind::FrameDim),
        ("boundingBox", &["x", "y", "width", "height"][..], IntKind::Pixel),
    ] {
        path.push(PathElem::Field(field));
        match obj.get(field) {
            Some(Value::Object(nested)) => {
                for &name in names {
                    check_int(nested, &mut path, name, kind, &mut errors);
                }
            }
            Some(other) => errors.push(FieldError::at(
                &path,
                format!("{field} must be an object, got {other}"),
            )),
            None => errors.push(FieldError::at(&path, format!("{field} is required"))),
        }
        path.pop();
    }

    errors
}

#[derive(Clone, Copy)]
enum IntKind {
    /// Non-negative, fits `u64`.
    Millis,
    /// Non-negative, fits `u32`.
    FrameDim,
    /// Signed, fits `i64`.
    Pixel,
}

fn check_int(
    obj: &serde_json::Map<String, Value>,
    path: &mut Vec<PathElem>,
    name: &'static str,
    kind: IntKind,
    errors: &mut Vec<FieldError>,
) {
    path.push(PathElem::Field(name));
    let message = match obj.get(name) {
        None => Some(format!("{name} is required")),
        Some(v) => match (kind, v.as_u64(), v.as_i64()) {
            (IntKind::Millis, Some(_), _) => None,
            (IntKind::FrameDim, Some(n), _) if u32::try_from(n).is_ok() => None,
            (IntKind::FrameDim, Some(n), _) => Some(format!("{name} {n} is out of range")),
            (IntKind::Pixel, _, Some(_)) => None,
            (IntKind::Pixel, Some(n), None) => Some(format!("{name} {n} is out of range")),
            (IntKind::Millis, None, Some(n)) if name == "durationMs" => {
                Some(format!("durationMs must be > 0, got {n}"))
            }
            (IntKind::Millis, None, Some(n)) => Some(format!("{name} must be >= 0, got {n}")),
            (IntKind::FrameDim, None, Some(n)) => {
                Some(format!("frame {name} must be > 0, got {n}"))
            }
            _ => Some(format!("{name} must be an integer, got {v}")),
        },
    };
    if let Some(message) = message {
        errors.push(FieldError::at(path, message));
    }
    path.pop();
}

fn check_frame(frame: Frame, path: &mut Vec<PathElem>, errors: &mut Vec<FieldError>) {
    path.push(PathElem::Field("frame"));
    for (name, v) in [("width", frame.width), ("height", frame.height)] {
        if v == 0 {
            path.push(PathElem::Field(name));
            errors.push(FieldError::at(
                path,
                format!("frame {name} must be > 0 (frame dimensions unknown)"),
            ));
            path.pop();
        }
    }
    path.pop();
}

fn check_box(
    bbox: BoundingBox,
    frame: Frame,
    path: &mut Vec<PathElem>,
    errors: &mut Vec<FieldError>,
) {
    let mut at = |field: &'static str, message: String| {
        path.push(PathElem::Field(field));
        errors.push(FieldError::at(path, message));
        path.pop();
    };

    if bbox.width <= 0 {
        at("width", format!("width must be > 0, got {}", bbox.width));
    }
    if bbox.height <= 0 {
        at("height", format!("height must be > 0, got {}", bbox.height));
    }
    if bbox.x < 0 {
        at("x", format!("x must be >= 0, got {} (outside frame)", bbox.x));
    }
    if bbox.y < 0 {
        at("y", format!("y must be >= 0, got {} (outside frame)", bbox.y));
    }
    // Right/bottom edges can only be judged against a known frame.
    if frame.width > 0 && bbox.width > 0 {
        let right = bbox.x.saturating_add(bbox.width);
        if right > i64::from(frame.width) {
            at(
                "width",
                format!(
                    "x + width = {right} exceeds frame width {} (outside frame)",
                    frame.width
                ),
            );
        }
    }
    if frame.height > 0 && bbox.height > 0 {
        let bottom = bbox.y.saturating_add(bbox.height);
        if bottom > i64::from(frame.height) {
            at(
                "height",
                format!(
                    "y + height = {bottom} exceeds frame height {} (outside frame)",
                    frame.height
                ),
            );
        }
    }
}

fn check_window(window: EffectWindow, path: &mut Vec<PathElem>, errors: &mut Vec<FieldError>) {
    match window {
        EffectWindow::Seconds { start, end } => {
            if !start.is_finite() || start < 0.0 {
                path.push(PathElem::Field("start"));
                errors.push(FieldError::at(path, "start must be finite and >= 0"));
                path.pop();
            }
            if !end.is_finite() || end <= start {
                path.push(PathElem::Field("end"));
                errors.push(FieldError::at(path, "end must be finite and > start"));
                path.pop();
            }
        }
        EffectWindow::Millis { duration_ms, .. } => {
            if duration_ms == 0 {
                path.push(PathElem::Field("durationMs"));
                errors.push(FieldError::at(path, "durationMs must be > 0"));
                path.pop();
            }
        }
    }
}

/// Check a timeline document: known frame, unique effect ids, sane windows, zoom boxes inside
/// the frame and finite manual scales.
pub(crate) fn validate_timeline(timeline: &Timeline) -> ValidationReport {
    let mut errors = Vec::new();
    let mut path = Vec::new();
    check_frame(timeline.frame, &mut path, &mut errors);

    let mut seen = HashSet::<String>::new();
    for (i, effect) in timeline.effects.iter().enumerate() {
        let mut path = vec![PathElem::Field("effects"), PathElem::Index(i)];
        let key = effect.key(i);
        if !seen.insert(key.clone()) {
            path.push(PathElem::Field("id"));
            errors.push(FieldError::at(&path, format!("duplicate effect id '{key}'")));
            path.pop();
        }

        check_window(effect.window, &mut path, &mut errors);

        if let Some(bbox) = effect.zoom_bounds() {
            path.extend([PathElem::Field("target"), PathElem::Field("bounds")]);
            check_box(bbox, timeline.frame, &mut path, &mut errors);
            path.truncate(2);
        }

        if let Some(scale) = effect.style.zoom.scale {
            if !scale.is_finite() || scale <= 0.0 {
                path.extend([
                    PathElem::Field("style"),
                    PathElem::Field("zoom"),
                    PathElem::Field("scale"),
                ]);
                errors.push(FieldError::at(&path, "scale must be finite and > 0"));
            }
        }
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
