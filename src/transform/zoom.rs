//! Zoom transform synthesis.

use crate::foundation::core::{Affine, Point, Vec2};

/// 2D transform applied to the video layer as `translate(tx, ty) scale(s)`.
///
/// Translation is in viewport pixels, scale is a unitless multiplier.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomTransform {
    /// Uniform scale.
    pub scale: f64,
    /// Horizontal translation applied after scaling.
    pub translate_x: f64,
    /// Vertical translation applied after scaling.
    pub translate_y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    /// No zoom. Emitted explicitly when nothing is active so the host never drops the
    /// transform between frames.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Return `true` for the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Equivalent kurbo affine (`translate * scale`).
    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.translate_x, self.translate_y)) * Affine::scale(self.scale)
    }

    /// Map a viewport point through the transform.
    pub fn apply(&self, p: Point) -> Point {
        self.to_affine() * p
    }

    /// CSS transform string, e.g. `translate(-12.5px, -4px) scale(1.25)`.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Zoom towards `target_scale` by eased `progress`, keeping `(center_x, center_y)` fixed.
///
/// Scale interpolates linearly in progress; the easing lives in `progress` itself.
pub fn synthesize(progress: f64, center_x: f64, center_y: f64, target_scale: f64) -> ZoomTransform {
    let scale = 1.0 + (target_scale - 1.0) * progress;
    ZoomTransform {
        scale,
        translate_x: -center_x * (scale - 1.0),
        translate_y: -center_y * (scale - 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/zoom.rs"]
mod tests;
