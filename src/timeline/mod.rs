/// Keyframe and segment duration planning.
pub mod plan;
