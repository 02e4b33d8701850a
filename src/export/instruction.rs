use crate::foundation::core::{BoundingBox, Frame};
use crate::foundation::error::{ZoomfxError, ZoomfxResult};
use crate::scene::model::DisplayEffect;
use crate::schema::path::join_errors;
use serde::{Deserialize, Serialize};

/// Effect discriminator on the export wire. Only zoom exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// `"zoom"`.
    #[default]
    Zoom,
}

/// Backend-authoritative description of one zoom effect.
///
/// Carries time, frame and the original bounding box and nothing else: there is no field a
/// preview-derived scale, anchor, easing or ratio could be written into. Fields are read-only
/// once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ZoomInstruction {
    effect: EffectKind,
    start_time_ms: u64,
    duration_ms: u64,
    frame: Frame,
    bounding_box: BoundingBox,
}

impl ZoomInstruction {
    /// Assemble an instruction from raw facts. No checks are made here; run
    /// [`crate::validate`] before handing it to a renderer.
    pub fn new(
        start_time_ms: u64,
        duration_ms: u64,
        frame: Frame,
        bounding_box: BoundingBox,
    ) -> Self {
        Self {
            effect: EffectKind::Zoom,
            start_time_ms,
            duration_ms,
            frame,
            bounding_box,
        }
    }

    /// Effect discriminator, always [`EffectKind::Zoom`].
    pub fn effect(&self) -> EffectKind {
        self.effect
    }

    /// Window start in milliseconds.
    pub fn start_time_ms(&self) -> u64 {
        self.start_time_ms
    }

    /// Window length in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Frame the bounding box is relative to.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Original, unmodified focus box.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Parse an instruction from untrusted JSON.
    ///
    /// The allow-list check runs first, so a leaked derived field is reported as a
    /// [`ZoomfxError::Purity`] naming every offending path rather than as a parse error. Values
    /// the typed fields cannot hold (a negative `durationMs`, a missing `frame`) are reported as
    /// a [`ZoomfxError::Validation`] naming the field.
    pub fn from_json_checked(value: &serde_json::Value) -> ZoomfxResult<Self> {
        let report = crate::schema::purity::check_purity(value);
        if !report.clean {
            return Err(ZoomfxError::purity(report.violations));
        }
        let shape = crate::schema::validate::check_wire_shape(value);
        if !shape.is_empty() {
            return Err(ZoomfxError::validation(join_errors(&shape)));
        }
        Ok(Self::deserialize(value)?)
    }
}

/// Instruction built for one exportable effect, or why it could not be built.
#[derive(Debug)]
pub struct ExportCandidate {
    /// Position of the effect in the source list.
    pub index: usize,
    /// Effect identity (explicit id or `effect-<index>`).
    pub id: String,
    /// The instruction, or the input error that prevented it.
    pub instruction: ZoomfxResult<ZoomInstruction>,
}

/// Build one instruction per effect that zooms and has a bounding box.
///
/// Boxes are copied verbatim; normalization results never enter the instruction. Seconds-based
/// windows are rounded to whole milliseconds, millisecond windows pass through unchanged. A
/// window that cannot be expressed in milliseconds fails that candidate only.
#[tracing::instrument(skip(effects), fields(n_effects = effects.len()))]
pub fn generate(effects: &[DisplayEffect], frame: Frame) -> Vec<ExportCandidate> {
    let mut out = Vec::new();
    for (index, effect) in effects.iter().enumerate() {
        let Some(bounding_box) = effect.zoom_bounds() else {
            continue;
        };
        let id = effect.key(index);
        let instruction = match effect.window.to_millis() {
            Ok((start_time_ms, duration_ms)) => Ok(ZoomInstruction::new(
                start_time_ms,
                duration_ms,
                frame,
                bounding_box,
            )),
            Err(ZoomfxError::Input(msg)) => {
                Err(ZoomfxError::input(format!("effect '{id}': {msg}")))
            }
            Err(other) => Err(other),
        };
        out.push(ExportCandidate {
            index,
            id,
            instruction,
        });
    }
    tracing::debug!(candidates = out.len(), "generated zoom instructions");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/instruction.rs"]
mod tests;
