use crate::foundation::error::{ZoomError, ZoomResult};

/// Horizontal pan keeping the zoom centered (ffmpeg zoompan `x`).
pub const CENTER_X_EXPR: &str = "iw/2-(iw/zoom/2)";
/// Vertical pan keeping the zoom centered (ffmpeg zoompan `y`).
pub const CENTER_Y_EXPR: &str = "ih/2-(ih/zoom/2)";
/// Upscale applied before zoompan so sub-pixel zoom steps do not jitter.
pub const PRESCALE_FILTER: &str = "scale=-2:10*ih";

/// Zoom level of one segment, from `1 / initial_crop` down to `1`.
///
/// Rendered with [`std::fmt::Display`] as an ffmpeg zoompan expression over the encoder's
/// per-segment variables `on` (output frame index) and `duration` (output frames in the
/// segment).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomExpr {
    factor: f64,
}

impl ZoomExpr {
    /// Build the zoom-out expression for a segment that starts cropped to `initial_crop`.
    ///
    /// `initial_crop` must be in `(0, 1]`.
    pub fn new(initial_crop: f64) -> ZoomResult<Self> {
        validate_crop(initial_crop)?;
        Ok(Self {
            factor: 1.0 / initial_crop,
        })
    }

    /// Zoom factor at the start of the segment.
    pub fn factor(self) -> f64 {
        self.factor
    }

    /// Evaluate the zoom level at segment progress `u = on / duration`.
    pub fn at(self, u: f64) -> f64 {
        self.factor - u * (self.factor - 1.0)
    }
}

impl std::fmt::Display for ZoomExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}-on/duration*{:.6}", self.factor, self.factor - 1.0)
    }
}

pub(crate) fn validate_crop(initial_crop: f64) -> ZoomResult<()> {
    if !(initial_crop > 0.0 && initial_crop <= 1.0) {
        return Err(ZoomError::usage(format!(
            "initial crop must be in (0, 1], got {initial_crop}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/zoom.rs"]
mod tests;
