use crate::foundation::core::{BoundingBox, EffectWindow};
use serde::{Deserialize, Serialize};

/// A zoom-capable effect on the playback timeline.
///
/// Created upstream and read-only here. Bounds are in the pixel space of the timeline's
/// [`crate::Frame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayEffect {
    /// Stable identity used to key derived preview state. Assigned from position when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the effect is active.
    #[serde(flatten)]
    pub window: EffectWindow,
    /// What the effect points at.
    #[serde(default)]
    pub target: Target,
    /// How the effect is presented.
    #[serde(default)]
    pub style: Style,
}

/// Region an effect focuses on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Focus box in frame pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
}

/// Presentation options of an effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Zoom presentation.
    #[serde(default)]
    pub zoom: ZoomStyle,
}

/// Zoom presentation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomStyle {
    /// Whether the effect zooms at all.
    #[serde(default)]
    pub enabled: bool,
    /// Manual target scale replacing the auto scale; clamped to `[1.0, 2.5]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl DisplayEffect {
    /// Zoom effect over `bounds` active during `window`.
    pub fn zoom(window: EffectWindow, bounds: BoundingBox) -> Self {
        Self {
            id: None,
            window,
            target: Target {
                bounds: Some(bounds),
            },
            style: Style {
                zoom: ZoomStyle {
                    enabled: true,
                    scale: None,
                },
            },
        }
    }

    /// Set an explicit identity.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a manual target scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.style.zoom.scale = Some(scale);
        self
    }

    /// Focus box when the effect zooms and has one.
    pub fn zoom_bounds(&self) -> Option<BoundingBox> {
        if !self.style.zoom.enabled {
            return None;
        }
        self.target.bounds
    }

    /// Identity of the effect at position `index` of its timeline.
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("effect-{index}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
