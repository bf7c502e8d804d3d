//! Zoom render runs: per-frame segments, manifest, concatenation.

/// Run state machine and segment manifest.
pub mod sequencer;
