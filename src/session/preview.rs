use crate::eval::select::{active_effects, resolve};
use crate::foundation::core::Frame;
use crate::foundation::error::{ZoomfxError, ZoomfxResult};
use crate::normalize::cache::{NormalizedEffect, NormalizedEffects};
use crate::scene::model::DisplayEffect;
use crate::scene::timeline::Timeline;
use crate::session::opts::EngineOpts;
use crate::transform::zoom::{ZoomTransform, synthesize};

/// Per-frame entry point driven by the host's playback clock.
///
/// The host calls this once per displayed frame while media plays, at whatever cadence its
/// scheduler provides, and applies the returned transform to the video layer.
pub trait OnTick {
    /// Transform to apply at `current_time_s` seconds of playback.
    fn on_tick(&mut self, current_time_s: f64) -> ZoomTransform;
}

/// Result of evaluating one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    /// Playback time in seconds.
    #[serde(rename = "time")]
    pub time_s: f64,
    /// Identity of the applied effect, if any.
    pub effect: Option<String>,
    /// Eased progress of the applied effect, 0 when none applies.
    pub progress: f64,
    /// Transform to apply.
    pub transform: ZoomTransform,
}

/// Live zoom preview over a timeline.
///
/// Owns the normalized effect set; replacing the effects or the frame rebuilds it in full
/// before the next tick is answered.
#[derive(Clone, Debug)]
pub struct PreviewEngine {
    timeline: Timeline,
    opts: EngineOpts,
    viewport: Option<(f64, f64)>,
    normalized: NormalizedEffects,
}

impl PreviewEngine {
    /// Create an engine and normalize every effect of `timeline`.
    pub fn new(timeline: Timeline, opts: EngineOpts) -> ZoomfxResult<Self> {
        opts.validate()?;
        let normalized = NormalizedEffects::build(&timeline.effects, timeline.frame);
        Ok(Self {
            timeline,
            opts,
            viewport: None,
            normalized,
        })
    }

    /// Replace the effect list and re-normalize.
    pub fn set_effects(&mut self, effects: Vec<DisplayEffect>) {
        self.timeline.effects = effects;
        self.renormalize();
    }

    /// Replace the recording frame and re-normalize.
    pub fn set_frame(&mut self, frame: Frame) {
        self.timeline.frame = frame;
        self.renormalize();
    }

    /// Set the size the video is displayed at, in pixels.
    ///
    /// Anchors are unit-interval, so only the pixel pivot of the transform depends on this.
    /// Until set, the recording frame size is used.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> ZoomfxResult<()> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ZoomfxError::input(format!(
                "viewport must be finite and > 0, got {width}x{height}"
            )));
        }
        self.viewport = Some((width, height));
        Ok(())
    }

    /// Timeline currently previewed.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Options in effect.
    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    /// Current normalized effect set.
    pub fn normalized(&self) -> &NormalizedEffects {
        &self.normalized
    }

    fn renormalize(&mut self) {
        tracing::debug!("effects or frame changed, re-normalizing");
        self.normalized = NormalizedEffects::build(&self.timeline.effects, self.timeline.frame);
    }

    fn viewport_size(&self) -> (f64, f64) {
        self.viewport.unwrap_or((
            f64::from(self.timeline.frame.width),
            f64::from(self.timeline.frame.height),
        ))
    }

    /// Evaluate the engine at `t` seconds.
    ///
    /// An effect whose progress cannot be computed is dropped for this tick and the remaining
    /// active effects are resolved again; with nothing left the identity transform is returned.
    pub fn evaluate(&self, t: f64) -> Tick {
        let ramp = self.opts.ramp();
        let mut active = active_effects(self.normalized.entries(), t);

        while let Some(effect) = resolve(&active, self.opts.tie_break) {
            match ramp.progress(t, effect.window) {
                Ok(progress) => {
                    return Tick {
                        time_s: t,
                        effect: Some(effect.id.clone()),
                        progress,
                        transform: self.synthesize_for(effect, progress),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        effect = %effect.id,
                        error = %e,
                        "skipping effect for this tick"
                    );
                    active.retain(|candidate| !std::ptr::eq(*candidate, effect));
                }
            }
        }

        Tick {
            time_s: t,
            effect: None,
            progress: 0.0,
            transform: ZoomTransform::IDENTITY,
        }
    }

    fn synthesize_for(&self, effect: &NormalizedEffect, progress: f64) -> ZoomTransform {
        let (vw, vh) = self.viewport_size();
        synthesize(
            progress,
            effect.bounds.anchor_x * vw,
            effect.bounds.anchor_y * vh,
            effect.target_scale,
        )
    }

    /// Transform to apply at `t` seconds.
    pub fn transform_at(&self, t: f64) -> ZoomTransform {
        self.evaluate(t).transform
    }

    /// Evaluate a batch of ticks, e.g. every frame of a clip at a fixed rate.
    pub fn sample(&self, times: impl IntoIterator<Item = f64>) -> Vec<Tick> {
        times.into_iter().map(|t| self.evaluate(t)).collect()
    }
}

impl OnTick for PreviewEngine {
    fn on_tick(&mut self, current_time_s: f64) -> ZoomTransform {
        self.transform_at(current_time_s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/preview.rs"]
mod tests;
