use crate::animation::ease::Ease;
use crate::foundation::core::EffectWindow;
use crate::foundation::error::{ZoomfxError, ZoomfxResult};

/// Phase layout of a zoom window: ramp in, hold at full zoom, ramp out.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Ramp {
    /// Fraction of the window spent ramping in, in `(0, 1]`.
    pub ease_in_frac: f64,
    /// Fraction of the window spent ramping out, in `(0, 1]`.
    pub ease_out_frac: f64,
    /// Curve used by both ramps.
    pub ease: Ease,
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            ease_in_frac: 0.25,
            ease_out_frac: 0.25,
            ease: Ease::InOutCubic,
        }
    }
}

impl Ramp {
    /// Check that both fractions are in `(0, 1]` and that the ramps do not overlap.
    pub fn validate(&self) -> ZoomfxResult<()> {
        for (name, v) in [
            ("ease_in_frac", self.ease_in_frac),
            ("ease_out_frac", self.ease_out_frac),
        ] {
            if !v.is_finite() || v <= 0.0 || v > 1.0 {
                return Err(ZoomfxError::validation(format!(
                    "{name} must be in (0, 1], got {v}"
                )));
            }
        }
        if self.ease_in_frac + self.ease_out_frac > 1.0 {
            return Err(ZoomfxError::validation(
                "ease_in_frac + ease_out_frac must be <= 1",
            ));
        }
        Ok(())
    }

    /// Eased progress in `[0, 1]` of playback time `t` (seconds) within `window`.
    pub fn progress(&self, t: f64, window: EffectWindow) -> ZoomfxResult<f64> {
        self.progress_between(t, window.start_s(), window.end_s())
    }

    /// Eased progress in `[0, 1]` of `t` within `[start, end]`.
    ///
    /// Progress is exactly 0 at and beyond both boundaries, rises through the ramp-in phase,
    /// holds at 1 and falls symmetrically through the ramp-out phase.
    pub fn progress_between(&self, t: f64, start: f64, end: f64) -> ZoomfxResult<f64> {
        let d = end - start;
        if !d.is_finite() || d <= 0.0 {
            return Err(ZoomfxError::timing(format!(
                "effect duration must be > 0, got window [{start}, {end}]"
            )));
        }
        if !t.is_finite() {
            return Err(ZoomfxError::timing(format!(
                "playback time must be finite, got {t}"
            )));
        }

        let u = (t - start) / d;
        let p = if u <= 0.0 || u >= 1.0 {
            0.0
        } else if u < self.ease_in_frac {
            self.ease.apply(u / self.ease_in_frac)
        } else if u > 1.0 - self.ease_out_frac {
            self.ease.apply((1.0 - u) / self.ease_out_frac)
        } else {
            1.0
        };
        Ok(p)
    }
}

/// Cubic-eased progress of `t` within `[start, end]` using the given ramp fractions.
pub fn progress(
    t: f64,
    start: f64,
    end: f64,
    ease_in_frac: f64,
    ease_out_frac: f64,
) -> ZoomfxResult<f64> {
    Ramp {
        ease_in_frac,
        ease_out_frac,
        ease: Ease::InOutCubic,
    }
    .progress_between(t, start, end)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
