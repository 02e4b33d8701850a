use crate::animation::ease::Ease;
use crate::animation::progress::Ramp;
use crate::eval::select::TieBreak;
use crate::foundation::error::{ZoomfxError, ZoomfxResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options for [`crate::PreviewEngine`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineOpts {
    /// Fraction of each window spent zooming in.
    pub ease_in_frac: f64,
    /// Fraction of each window spent zooming out.
    pub ease_out_frac: f64,
    /// Curve for both ramps.
    pub ease: Ease,
    /// How overlapping effects with the same start are ordered.
    pub tie_break: TieBreak,
}

impl Default for EngineOpts {
    fn default() -> Self {
        let ramp = Ramp::default();
        Self {
            ease_in_frac: ramp.ease_in_frac,
            ease_out_frac: ramp.ease_out_frac,
            ease: ramp.ease,
            tie_break: TieBreak::default(),
        }
    }
}

impl EngineOpts {
    /// Phase layout described by these options.
    pub fn ramp(&self) -> Ramp {
        Ramp {
            ease_in_frac: self.ease_in_frac,
            ease_out_frac: self.ease_out_frac,
            ease: self.ease,
        }
    }

    /// Reject fractions outside `(0, 1]` or summing past 1.
    pub fn validate(&self) -> ZoomfxResult<()> {
        self.ramp().validate()
    }

    /// Load options from a JSON file; missing keys keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> ZoomfxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ZoomfxError::input(format!("open engine options '{}': {e}", path.display()))
        })?;
        let opts: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ZoomfxError::serde(format!("parse engine options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
