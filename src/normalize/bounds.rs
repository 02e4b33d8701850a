use crate::foundation::core::{BoundingBox, Frame};
use crate::foundation::error::ZoomfxResult;

/// Lower bound of every zoom scale.
pub const MIN_SCALE: f64 = 1.0;
/// Upper bound of every zoom scale.
pub const MAX_SCALE: f64 = 2.5;

/// Preview-only geometry derived from a bounding box and its frame.
///
/// Never exported: instructions carry the original box, not these values.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBounds {
    /// Box center, x (frame pixels).
    pub center_x: f64,
    /// Box center, y (frame pixels).
    pub center_y: f64,
    /// Box center as a fraction of frame width, in `[0, 1]`.
    pub anchor_x: f64,
    /// Box center as a fraction of frame height, in `[0, 1]`.
    pub anchor_y: f64,
    /// Scale chosen by [`auto_scale`].
    pub auto_scale: f64,
    /// Scale at rest, always `1.0`.
    pub start_scale: f64,
    /// Scale at full zoom, equal to `auto_scale`.
    pub end_scale: f64,
    /// Box area over frame area.
    pub area_ratio: f64,
    /// Box width over frame width.
    pub width_ratio: f64,
    /// Box height over frame height.
    pub height_ratio: f64,
    /// Larger of the width and height ratios.
    pub dominant_ratio: f64,
    /// Larger of the area and dominant ratios.
    pub effective_ratio: f64,
}

/// Map a pixel box in `frame` to its anchor point, size ratios and auto scale.
///
/// Fails with an input error when the frame is unknown or the box is empty or leaves the frame.
pub fn normalize(bounds: BoundingBox, frame: Frame) -> ZoomfxResult<NormalizedBounds> {
    bounds.ensure_fits(frame)?;

    let fw = f64::from(frame.width);
    let fh = f64::from(frame.height);
    let center = bounds.to_rect().center();

    let width_ratio = bounds.width as f64 / fw;
    let height_ratio = bounds.height as f64 / fh;
    let area_ratio = (bounds.width as f64 * bounds.height as f64) / frame.area();
    let dominant_ratio = width_ratio.max(height_ratio);
    // Area alone under-zooms wide-but-short and tall-but-narrow boxes.
    let effective_ratio = area_ratio.max(dominant_ratio);
    let scale = auto_scale(effective_ratio);

    Ok(NormalizedBounds {
        center_x: center.x,
        center_y: center.y,
        anchor_x: center.x / fw,
        anchor_y: center.y / fh,
        auto_scale: scale,
        start_scale: MIN_SCALE,
        end_scale: scale,
        area_ratio,
        width_ratio,
        height_ratio,
        dominant_ratio,
        effective_ratio,
    })
}

/// Zoom multiplier for a box occupying `effective_ratio` of the frame.
///
/// Piecewise linear and non-increasing: tiny subjects get up to 2x, subjects covering half
/// the frame or more get none. Always within `[MIN_SCALE, MAX_SCALE]`.
pub fn auto_scale(effective_ratio: f64) -> f64 {
    let r = effective_ratio;
    let scale = if r < 0.01 {
        1.5 + (0.01 - r) / 0.01 * 0.5
    } else if r < 0.1 {
        1.2 + (0.1 - r) / 0.09 * 0.3
    } else if r < 0.5 {
        1.0 + (0.5 - r) / 0.4 * 0.2
    } else {
        1.0
    };
    clamp_scale(scale)
}

/// Clamp `scale` into `[MIN_SCALE, MAX_SCALE]`; NaN maps to `MIN_SCALE`.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/bounds.rs"]
mod tests;
