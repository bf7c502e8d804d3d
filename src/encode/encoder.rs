use std::path::{Path, PathBuf};

use crate::encode::zoom::ZoomExpr;
use crate::foundation::core::{Fps, OutputSize};
use crate::foundation::error::ZoomResult;

/// Everything the encoder needs to turn one still frame into one zoom segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentJob {
    /// 0-based segment index.
    pub index: usize,
    /// Source still frame.
    pub input: PathBuf,
    /// Segment video to write.
    pub output: PathBuf,
    /// Zoom level expression evaluated per output frame.
    pub zoom: ZoomExpr,
    /// Output frames in this segment. May be 0.
    pub duration_frames: u64,
    /// Output frame rate.
    pub fps: Fps,
    /// Output resolution.
    pub size: OutputSize,
}

/// External encoder used by the segment sequencer.
///
/// Implementations must be usable from several worker threads at once when parallel
/// rendering is enabled; each call touches only its own output file.
pub trait SegmentEncoder: Send + Sync {
    /// Render one zoom segment from a still frame.
    fn render_segment(&self, job: &SegmentJob) -> ZoomResult<()>;

    /// Stream-copy the segments listed in `manifest` into `out`, in manifest order.
    fn concat(&self, manifest: &Path, out: &Path) -> ZoomResult<()>;
}
