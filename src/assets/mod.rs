//! Frame preparation for outpainting.

/// Extension-based decoding and PNG conversion.
pub mod decode;
/// Shrink-to-canvas and edge fade.
pub mod downsize;
