use crate::animation::ease::EasingMode;
use crate::foundation::core::Fps;
use crate::foundation::error::{ZoomError, ZoomResult};

/// Timing of one zoom segment, derived from the eased keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentPlan {
    /// 0-based segment index (same as the source frame index).
    pub index: usize,
    /// Keyframe of the previous segment, in whole seconds.
    pub start_secs: u64,
    /// Length of this segment in whole seconds. May be 0.
    pub duration_secs: u64,
    /// Length of this segment in output frames (`fps * duration_secs`).
    pub duration_frames: u64,
}

/// Per-run timing plan: one keyframe and one segment per input frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    /// Output frame rate used to convert seconds to frames.
    pub fps: Fps,
    /// Cumulative end time of each segment, in whole seconds.
    pub keyframes: Vec<u64>,
    /// Segment timings in frame order.
    pub segments: Vec<SegmentPlan>,
}

impl Timeline {
    /// Plan segment durations for `frame_count` frames spread over `duration_secs`.
    ///
    /// Keyframe `i` is `floor(duration_secs * ease((i + 1) / frame_count))`. Eased
    /// progress is clamped to `[0, 1]` and keyframes never decrease, so overshooting or
    /// bouncing curves cannot produce negative segment lengths. Zero-length segments are
    /// kept as-is.
    pub fn plan(
        duration_secs: u64,
        frame_count: usize,
        easing: EasingMode,
        fps: Fps,
    ) -> ZoomResult<Self> {
        if frame_count == 0 {
            return Err(ZoomError::usage(
                "cannot plan a timeline without frames (frame count is 0)",
            ));
        }
        if fps.0 == 0 {
            return Err(ZoomError::usage("fps must be > 0"));
        }

        let keyframes = keyframes(duration_secs, frame_count, easing);

        let mut segments = Vec::with_capacity(frame_count);
        let mut prev = 0u64;
        for (index, &kf) in keyframes.iter().enumerate() {
            let duration_secs = kf - prev;
            segments.push(SegmentPlan {
                index,
                start_secs: prev,
                duration_secs,
                duration_frames: fps.secs_to_frames(duration_secs),
            });
            prev = kf;
        }

        Ok(Self {
            fps,
            keyframes,
            segments,
        })
    }

    /// Number of planned segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` when no segments are planned.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final keyframe in seconds (0 for an empty timeline).
    pub fn total_secs(&self) -> u64 {
        self.keyframes.last().copied().unwrap_or(0)
    }

    /// Total output frames across every segment.
    pub fn total_frames(&self) -> u64 {
        self.fps.secs_to_frames(self.total_secs())
    }
}

// Absorbs float noise such as `0.7 * 10.0 = 6.999...` before flooring.
const FLOOR_EPSILON: f64 = 1e-9;

fn keyframes(duration_secs: u64, frame_count: usize, easing: EasingMode) -> Vec<u64> {
    let total = duration_secs as f64;
    let mut out = Vec::with_capacity(frame_count);
    let mut floor = 0u64;
    for i in 0..frame_count {
        let p = (i + 1) as f64 / frame_count as f64;
        let eased = easing.apply(p).clamp(0.0, 1.0);
        let kf = ((total * eased + FLOOR_EPSILON).floor() as u64).min(duration_secs);
        floor = floor.max(kf);
        out.push(floor);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/plan.rs"]
mod tests;
