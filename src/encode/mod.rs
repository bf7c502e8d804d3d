//! External encoder seam.
//!
//! Zoom segments and the final concatenation are produced by an external tool; the
//! sequencer only talks to it through [`encoder::SegmentEncoder`].

/// Encoder trait and per-segment job description.
pub mod encoder;
/// `ffmpeg`-backed encoder (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Zoom level expression for zoompan.
pub mod zoom;
