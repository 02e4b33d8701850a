use crate::export::instruction::ZoomInstruction;
use crate::foundation::error::ZoomfxResult;
use crate::schema::path::{PathElem, format_path};

const INSTRUCTION_KEYS: [&str; 5] = ["effect", "startTimeMs", "durationMs", "frame", "boundingBox"];
const FRAME_KEYS: [&str; 2] = ["width", "height"];
const BOUNDING_BOX_KEYS: [&str; 4] = ["x", "y", "width", "height"];

/// Outcome of the allow-list check on an export instruction.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PurityReport {
    /// `true` when no field outside the wire contract is present.
    pub clean: bool,
    /// JSON paths of every disallowed field, ordered by key within each object (the
    /// iteration order of `serde_json::Map`), not by position in the source text.
    pub violations: Vec<String>,
}

/// Compare the keys of a JSON instruction against the wire contract.
///
/// Top-level keys must be within `{effect, startTimeMs, durationMs, frame, boundingBox}`,
/// `frame` keys within `{width, height}` and `boundingBox` keys within `{x, y, width, height}`.
/// Nothing is stripped; the caller decides what to do with a dirty report.
pub fn check_purity(value: &serde_json::Value) -> PurityReport {
    let mut violations = Vec::new();
    let Some(obj) = value.as_object() else {
        return PurityReport {
            clean: false,
            violations: vec![format_path(&[])],
        };
    };

    for (key, v) in obj {
        if !INSTRUCTION_KEYS.contains(&key.as_str()) {
            violations.push(format_path(&[PathElem::Key(key.clone())]));
            continue;
        }
        let (field, allowed): (&'static str, &[&str]) = match key.as_str() {
            "frame" => ("frame", &FRAME_KEYS[..]),
            "boundingBox" => ("boundingBox", &BOUNDING_BOX_KEYS[..]),
            _ => continue,
        };
        let Some(nested) = v.as_object() else {
            continue;
        };
        for nested_key in nested.keys() {
            if !allowed.contains(&nested_key.as_str()) {
                violations.push(format_path(&[
                    PathElem::Field(field),
                    PathElem::Key(nested_key.clone()),
                ]));
            }
        }
    }

    PurityReport {
        clean: violations.is_empty(),
        violations,
    }
}

/// Serialize a typed instruction and run [`check_purity`] on the result.
///
/// The type leaves no room for derived fields; this guards the serialized boundary.
pub fn check_instruction_purity(instruction: &ZoomInstruction) -> ZoomfxResult<PurityReport> {
    let value = serde_json::to_value(instruction)?;
    Ok(check_purity(&value))
}

#[cfg(test)]
#[path = "../../tests/unit/schema/purity.rs"]
mod tests;
