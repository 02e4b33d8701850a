use crate::foundation::error::{ZoomfxError, ZoomfxResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Authoritative video resolution at the time a bounding box was captured.
///
/// A zero dimension means "unknown" and is rejected by normalization and export validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Frame {
    /// Create a validated frame with both dimensions `> 0`.
    pub fn new(width: u32, height: u32) -> ZoomfxResult<Self> {
        let frame = Self { width, height };
        frame.ensure_known()?;
        Ok(frame)
    }

    /// Return `true` when both dimensions are known (`> 0`).
    pub fn is_known(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn ensure_known(self) -> ZoomfxResult<()> {
        if !self.is_known() {
            return Err(ZoomfxError::input(format!(
                "frame dimensions must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Frame area in square pixels.
    pub fn area(self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }
}

/// Pixel-space box with a top-left origin, relative to a [`Frame`].
///
/// Fields are signed so that malformed boxes (e.g. `x: -5`) survive parsing and can be
/// reported field by field instead of failing deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Left edge in pixels.
    pub x: i64,
    /// Top edge in pixels.
    pub y: i64,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
}

impl BoundingBox {
    /// Construct a box from its top-left corner and size.
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Return `true` when the box has a positive size and lies fully inside `frame`.
    pub fn fits_in(self, frame: Frame) -> bool {
        self.width > 0
            && self.height > 0
            && self.x >= 0
            && self.y >= 0
            && self.x.saturating_add(self.width) <= i64::from(frame.width)
            && self.y.saturating_add(self.height) <= i64::from(frame.height)
    }

    pub(crate) fn ensure_fits(self, frame: Frame) -> ZoomfxResult<()> {
        frame.ensure_known()?;
        if self.width <= 0 || self.height <= 0 {
            return Err(ZoomfxError::input(format!(
                "bounding box size must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.fits_in(frame) {
            return Err(ZoomfxError::input(format!(
                "bounding box {{x:{}, y:{}, width:{}, height:{}}} is outside frame {}x{}",
                self.x, self.y, self.width, self.height, frame.width, frame.height
            )));
        }
        Ok(())
    }

    /// Box as a floating-point rect in the same pixel space.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y as f64,
            self.x.saturating_add(self.width) as f64,
            self.y.saturating_add(self.height) as f64,
        )
    }
}

/// Time window of an effect.
///
/// Accepts either the playback-domain shape `{start, end}` (seconds) or the export-domain shape
/// `{startTimeMs, durationMs}`. The millisecond shape is kept as-is so export reproduces its
/// native values exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EffectWindow {
    /// Playback-domain window in seconds, `end > start`.
    Seconds {
        /// Window start in seconds.
        start: f64,
        /// Window end in seconds.
        end: f64,
    },
    /// Export-domain window in milliseconds, `duration_ms > 0`.
    Millis {
        /// Window start in milliseconds.
        #[serde(rename = "startTimeMs")]
        start_time_ms: u64,
        /// Window length in milliseconds.
        #[serde(rename = "durationMs")]
        duration_ms: u64,
    },
}

impl EffectWindow {
    /// Playback-domain window.
    pub fn seconds(start: f64, end: f64) -> Self {
        Self::Seconds { start, end }
    }

    /// Export-domain window.
    pub fn millis(start_time_ms: u64, duration_ms: u64) -> Self {
        Self::Millis {
            start_time_ms,
            duration_ms,
        }
    }

    /// Window start in seconds.
    pub fn start_s(self) -> f64 {
        match self {
            Self::Seconds { start, .. } => start,
            Self::Millis { start_time_ms, .. } => start_time_ms as f64 / 1000.0,
        }
    }

    /// Window end in seconds.
    pub fn end_s(self) -> f64 {
        match self {
            Self::Seconds { end, .. } => end,
            Self::Millis {
                start_time_ms,
                duration_ms,
            } => (start_time_ms as f64 + duration_ms as f64) / 1000.0,
        }
    }

    /// Return `true` when `t` lies in `[start, end]`, inclusive on both ends.
    pub fn contains(self, t: f64) -> bool {
        self.start_s() <= t && t <= self.end_s()
    }

    /// Export-domain `(startTimeMs, durationMs)`.
    ///
    /// Seconds are rounded to the nearest millisecond. Negative or non-finite values are
    /// rejected; a zero duration is returned as-is and left to instruction validation.
    pub fn to_millis(self) -> ZoomfxResult<(u64, u64)> {
        match self {
            Self::Millis {
                start_time_ms,
                duration_ms,
            } => Ok((start_time_ms, duration_ms)),
            Self::Seconds { start, end } => {
                if !start.is_finite() || !end.is_finite() {
                    return Err(ZoomfxError::input("effect window must be finite"));
                }
                if start < 0.0 {
                    return Err(ZoomfxError::input(format!(
                        "effect window start must be >= 0, got {start}"
                    )));
                }
                let start_ms = (start * 1000.0).round();
                let duration_ms = ((end - start) * 1000.0).round().max(0.0);
                Ok((start_ms as u64, duration_ms as u64))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
