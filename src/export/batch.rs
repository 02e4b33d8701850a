use crate::export::instruction::ZoomInstruction;
use crate::foundation::core::{BoundingBox, Frame};
use crate::foundation::error::{ZoomfxError, ZoomfxResult};
use serde::{Deserialize, Serialize};

/// One effect inside a [`ZoomBatch`]; the frame lives on the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BatchEffect {
    /// Window start in milliseconds.
    pub start_time_ms: u64,
    /// Window length in milliseconds.
    pub duration_ms: u64,
    /// Original focus box.
    pub bounding_box: BoundingBox,
}

/// Submission envelope grouping instructions that share a source video and frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ZoomBatch {
    /// Path of the recording the renderer should read.
    pub input_video_path: String,
    /// Frame shared by every effect.
    pub frame: Frame,
    /// Effects in submission order.
    pub effects: Vec<BatchEffect>,
}

impl ZoomBatch {
    /// Group instructions under one envelope.
    ///
    /// Fails when the list is empty or the instructions disagree on the frame.
    pub fn from_instructions(
        input_video_path: impl Into<String>,
        instructions: &[ZoomInstruction],
    ) -> ZoomfxResult<Self> {
        let Some(first) = instructions.first() else {
            return Err(ZoomfxError::validation("batch must contain at least one effect"));
        };
        let frame = first.frame();
        if let Some((i, other)) = instructions
            .iter()
            .enumerate()
            .find(|(_, ins)| ins.frame() != frame)
        {
            return Err(ZoomfxError::validation(format!(
                "$[{i}].frame: {}x{} differs from batch frame {}x{}",
                other.frame().width,
                other.frame().height,
                frame.width,
                frame.height
            )));
        }

        Ok(Self {
            input_video_path: input_video_path.into(),
            frame,
            effects: instructions
                .iter()
                .map(|ins| BatchEffect {
                    start_time_ms: ins.start_time_ms(),
                    duration_ms: ins.duration_ms(),
                    bounding_box: ins.bounding_box(),
                })
                .collect(),
        })
    }

    /// Expand back into standalone instructions.
    pub fn instructions(&self) -> Vec<ZoomInstruction> {
        self.effects
            .iter()
            .map(|e| {
                ZoomInstruction::new(e.start_time_ms, e.duration_ms, self.frame, e.bounding_box)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/batch.rs"]
mod tests;
