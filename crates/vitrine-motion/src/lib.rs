//! vitrine-motion: declarative animation definitions and their playback.
//!
//! A [`MotionSpec`] describes what a demo animates: per-property keyframe
//! tracks plus options (duration, easing, delay or per-target stagger, loop
//! count, direction). A [`Timeline`] sequences several specs, optionally
//! overlapping them with negative offsets. The [`MotionRunner`] owns active
//! playbacks and answers per-target property samples each frame.
//!
//! All easing-curve evaluation and eased value blending is handed to the
//! `keyframe` crate; this crate only schedules (target resolution, delays,
//! iteration/direction time mapping, segment sequencing).

mod easing;
mod runner;
mod spec;
mod timeline;

pub use easing::Easing;
pub use runner::{MotionRunner, Playable, PlaybackKey};
pub use spec::{
    Delay, Direction, LoopCount, MotionSpec, Property, PropertyTrack, Stagger, StaggerOrigin,
    TrackKey,
};
pub use timeline::{ScheduledSegment, SegmentOffset, Timeline};

/// Linear blend between two scalars, delegated to the easing engine.
///
/// Demos use this to mix derived geometry (e.g. morph vertices) from an
/// already-eased progress value.
pub fn blend(from: f32, to: f32, t: f32) -> f32 {
    keyframe::ease(keyframe::functions::Linear, from, to, t.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(2.0, 8.0, 0.0), 2.0);
        assert_eq!(blend(2.0, 8.0, 1.0), 8.0);
        assert!((blend(2.0, 8.0, 0.5) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_blend_clamps_time() {
        assert_eq!(blend(0.0, 1.0, -0.5), 0.0);
        assert_eq!(blend(0.0, 1.0, 1.5), 1.0);
    }
}
