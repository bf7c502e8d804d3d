//! infinizoom turns a directory of progressively outcropped stills into an "infinite zoom"
//! video.
//!
//! - [`Timeline::plan`] spreads the video duration across frames with an [`EasingMode`]
//! - [`render_infinite_zoom`] renders one zoom segment per frame through a
//!   [`SegmentEncoder`] and concatenates them in frame order
//! - [`downsize`] prepares the next outpainting input: the frame shrunk onto a transparent
//!   canvas of its original size, with randomly faded borders
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing curves.
pub mod animation;
/// Frame preparation for outpainting.
pub mod assets;
/// External encoder seam.
pub mod encode;
/// Zoom render runs.
pub mod render;
/// Segment timing.
pub mod timeline;

pub use crate::foundation::core::{Fps, OutputSize};
pub use crate::foundation::error::{RunStage, ZoomError, ZoomResult};

pub use crate::animation::ease::EasingMode;
pub use crate::assets::decode::{SourceFormat, convert_source_to_png, load_image, write_png};
pub use crate::assets::downsize::{
    DownsizeOpts, DownsizeOutcome, Region, apply_edge_fade, downsize, downsize_with_rng,
    downsized_path, shrink_onto_canvas,
};
pub use crate::encode::encoder::{SegmentEncoder, SegmentJob};
pub use crate::encode::ffmpeg::{FfmpegEncoder, is_ffmpeg_available, is_ffmpeg_on_path};
pub use crate::encode::zoom::ZoomExpr;
pub use crate::render::sequencer::{
    MANIFEST_FILE_NAME, RenderReport, RenderThreading, Segment, ZoomOpts, collect_frames,
    render_infinite_zoom, segment_file_name, write_manifest,
};
pub use crate::timeline::plan::{SegmentPlan, Timeline};
