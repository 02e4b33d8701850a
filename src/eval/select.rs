use crate::foundation::core::EffectWindow;
use crate::scene::model::DisplayEffect;

/// Anything that occupies a window on the playback timeline.
pub trait Timed {
    /// Window during which the item is active.
    fn window(&self) -> EffectWindow;
}

impl Timed for DisplayEffect {
    fn window(&self) -> EffectWindow {
        self.window
    }
}

/// Secondary ordering key when overlapping effects share the same start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The effect declared earlier in the timeline wins.
    #[default]
    FirstDeclared,
    /// The effect declared later in the timeline wins.
    LastDeclared,
}

/// Effects whose window contains `t` (inclusive on both ends), in declaration order.
pub fn active_effects<T: Timed>(effects: &[T], t: f64) -> Vec<&T> {
    effects.iter().filter(|e| e.window().contains(t)).collect()
}

/// Pick the single effect to apply among `active`.
///
/// The latest start wins; equal starts are settled by `tie` using the order of `active`.
/// Returns `None` only for an empty list.
pub fn resolve<'a, T: Timed>(active: &[&'a T], tie: TieBreak) -> Option<&'a T> {
    let mut best: Option<&'a T> = None;
    for &candidate in active {
        let Some(current) = best else {
            best = Some(candidate);
            continue;
        };
        let (a, b) = (candidate.window().start_s(), current.window().start_s());
        if a > b || (a == b && tie == TieBreak::LastDeclared) {
            best = Some(candidate);
        }
    }
    best
}

/// Effect to apply at time `t`: [`active_effects`] followed by [`resolve`].
pub fn select_active<T: Timed>(effects: &[T], t: f64, tie: TieBreak) -> Option<&T> {
    resolve(&active_effects(effects, t), tie)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/select.rs"]
mod tests;
