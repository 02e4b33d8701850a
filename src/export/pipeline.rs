use crate::export::instruction::{ExportCandidate, ZoomInstruction, generate};
use crate::foundation::core::Frame;
use crate::foundation::error::{ZoomfxError, ZoomfxResult};
use crate::scene::model::DisplayEffect;
use crate::schema::path::join_errors;
use crate::schema::purity::check_instruction_purity;
use crate::schema::validate::validate;

/// An effect whose instruction was held back from the renderer.
#[derive(Debug)]
pub struct RejectedEffect {
    /// Position of the effect in the source list.
    pub index: usize,
    /// Effect identity.
    pub id: String,
    /// Why the instruction was rejected.
    pub error: ZoomfxError,
}

/// Outcome of [`prepare_export`]: instructions safe to submit, and everything held back.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Valid, pure instructions in timeline order.
    pub ready: Vec<ZoomInstruction>,
    /// Effects whose instruction failed generation, validation or the purity check.
    pub rejected: Vec<RejectedEffect>,
}

impl ExportReport {
    /// Return `true` when every exportable effect produced an instruction.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Produce renderer-ready instructions, holding back the ones that fail.
///
/// Runs [`generate`], then field validation and the purity check on every instruction. An
/// unknown frame fails up front as an input error, since no instruction could be valid. Past
/// that, a failing instruction is rejected on its own: purity violations as
/// [`ZoomfxError::Purity`], field findings as one [`ZoomfxError::Validation`]. Rejected
/// instructions never appear in [`ExportReport::ready`].
#[tracing::instrument(skip(effects), fields(n_effects = effects.len()))]
pub fn prepare_export(effects: &[DisplayEffect], frame: Frame) -> ZoomfxResult<ExportReport> {
    frame.ensure_known()?;

    let mut report = ExportReport::default();
    for ExportCandidate {
        index,
        id,
        instruction,
    } in generate(effects, frame)
    {
        match instruction.and_then(|i| check(&i).map(|()| i)) {
            Ok(instruction) => report.ready.push(instruction),
            Err(error) => {
                tracing::warn!(effect = %id, error = %error, "instruction rejected");
                report.rejected.push(RejectedEffect { index, id, error });
            }
        }
    }

    tracing::info!(
        ready = report.ready.len(),
        rejected = report.rejected.len(),
        "export prepared"
    );
    Ok(report)
}

fn check(instruction: &ZoomInstruction) -> ZoomfxResult<()> {
    let purity = check_instruction_purity(instruction)?;
    if !purity.clean {
        return Err(ZoomfxError::purity(purity.violations));
    }
    let validation = validate(instruction);
    if !validation.valid {
        return Err(ZoomfxError::validation(join_errors(&validation.errors)));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
