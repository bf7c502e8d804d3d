use crate::foundation::error::{ZoomError, ZoomResult};

/// Output frame rate in whole frames per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(pub u32);

impl Fps {
    /// Frame rate used by the zoom renderer unless configured otherwise.
    pub const DEFAULT: Self = Self(25);

    /// Create a validated frame rate.
    pub fn new(fps: u32) -> ZoomResult<Self> {
        if fps == 0 {
            return Err(ZoomError::usage("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Convert whole seconds to a frame count.
    pub fn secs_to_frames(self, secs: u64) -> u64 {
        u64::from(self.0) * secs
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Encoded video dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl OutputSize {
    /// Create a validated output size.
    ///
    /// Both sides must be non-zero and even (yuv420p chroma subsampling).
    pub fn new(width: u32, height: u32) -> ZoomResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub(crate) fn validate(self) -> ZoomResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ZoomError::usage("output width/height must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ZoomError::usage(
                "output width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

impl std::fmt::Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
