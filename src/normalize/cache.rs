use std::collections::HashSet;

use crate::eval::select::Timed;
use crate::foundation::core::{EffectWindow, Frame};
use crate::normalize::bounds::{NormalizedBounds, clamp_scale, normalize};
use crate::scene::model::DisplayEffect;

/// A zoom effect with its derived preview geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEffect {
    /// Effect identity (explicit id or `effect-<index>`).
    pub id: String,
    /// Position in the source effect list.
    pub index: usize,
    /// Active window.
    pub window: EffectWindow,
    /// Derived geometry.
    pub bounds: NormalizedBounds,
    /// Scale reached at full progress: the manual override when set, else the auto scale.
    pub target_scale: f64,
}

impl Timed for NormalizedEffect {
    fn window(&self) -> EffectWindow {
        self.window
    }
}

/// An effect left out of the preview because its geometry could not be normalized.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SkippedEffect {
    /// Effect identity.
    pub id: String,
    /// Why normalization failed.
    pub reason: String,
}

/// Normalized geometry for every zoom effect of a timeline, keyed by effect identity.
///
/// Built in one pass from an effect list and a frame and never patched: when either input
/// changes the whole set is rebuilt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedEffects {
    frame: Option<Frame>,
    entries: Vec<NormalizedEffect>,
    skipped: Vec<SkippedEffect>,
}

impl NormalizedEffects {
    /// Normalize every effect that zooms and has a bounding box.
    ///
    /// Effects whose box cannot be normalized are recorded in [`Self::skipped`] and left out;
    /// they never stop the rest of the timeline from previewing. Identities are unique: a zoom
    /// effect reusing the id of an earlier one is skipped too.
    #[tracing::instrument(skip(effects), fields(n_effects = effects.len()))]
    pub fn build(effects: &[DisplayEffect], frame: Frame) -> Self {
        let mut entries = Vec::with_capacity(effects.len());
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for (index, effect) in effects.iter().enumerate() {
            let Some(bbox) = effect.zoom_bounds() else {
                continue;
            };
            let id = effect.key(index);
            if !seen.insert(id.clone()) {
                tracing::warn!(effect = %id, "skipping effect: duplicate effect id");
                skipped.push(SkippedEffect {
                    reason: format!("duplicate effect id '{id}'"),
                    id,
                });
                continue;
            }
            match normalize(bbox, frame) {
                Ok(bounds) => {
                    let target_scale = effect
                        .style
                        .zoom
                        .scale
                        .map(clamp_scale)
                        .unwrap_or(bounds.end_scale);
                    entries.push(NormalizedEffect {
                        id,
                        index,
                        window: effect.window,
                        bounds,
                        target_scale,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        effect = %id,
                        error = %e,
                        "skipping effect: cannot normalize bounds"
                    );
                    skipped.push(SkippedEffect {
                        id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            normalized = entries.len(),
            skipped = skipped.len(),
            "normalized effect set rebuilt"
        );
        Self {
            frame: Some(frame),
            entries,
            skipped,
        }
    }

    /// Frame the set was built against.
    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    /// Normalized effects in declaration order.
    pub fn entries(&self) -> &[NormalizedEffect] {
        &self.entries
    }

    /// Effects that could not be normalized.
    pub fn skipped(&self) -> &[SkippedEffect] {
        &self.skipped
    }

    /// Look up a normalized effect by identity.
    pub fn get(&self, id: &str) -> Option<&NormalizedEffect> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of normalized effects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no effect could be normalized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/cache.rs"]
mod tests;
