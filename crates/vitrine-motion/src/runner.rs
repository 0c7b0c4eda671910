//! Playback of motion definitions.
//!
//! The runner owns every active playback, keyed by a caller-chosen id (the
//! gallery uses the card's preview region id). Starting a key that is already
//! playing restarts it from zero, which is what makes play actions safe to
//! invoke repeatedly.

use std::collections::HashMap;

use crate::spec::{MotionSpec, Property};
use crate::timeline::{ScheduledSegment, Timeline, sample_schedule};

/// Identifies one playback slot in the runner.
pub type PlaybackKey = u64;

/// Anything that can be started: a single spec or a sequenced timeline.
#[derive(Debug, Clone)]
pub enum Playable {
    Spec(MotionSpec),
    Timeline(Timeline),
}

impl From<MotionSpec> for Playable {
    fn from(spec: MotionSpec) -> Self {
        Self::Spec(spec)
    }
}

impl From<Timeline> for Playable {
    fn from(timeline: Timeline) -> Self {
        Self::Timeline(timeline)
    }
}

struct ActivePlayback {
    schedule: Vec<ScheduledSegment>,
    target_count: usize,
    elapsed_ms: f32,
    /// Wrap the clock at this span (looping timelines).
    loop_span_ms: Option<f32>,
}

/// Central owner of active playbacks.
#[derive(Default)]
pub struct MotionRunner {
    active: HashMap<PlaybackKey, ActivePlayback>,
}

impl MotionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a playback for `key` against `target_count` targets.
    ///
    /// With no targets to animate this is a silent no-op: nothing is
    /// scheduled and an already-running playback for the key is left alone.
    pub fn start(&mut self, key: PlaybackKey, playable: impl Into<Playable>, target_count: usize) {
        if target_count == 0 {
            tracing::debug!(key, "motion start skipped: no targets resolved");
            return;
        }
        let (schedule, looped) = match playable.into() {
            Playable::Spec(spec) => (
                vec![ScheduledSegment {
                    start_ms: 0.0,
                    spec,
                }],
                false,
            ),
            Playable::Timeline(timeline) => {
                (timeline.schedule(target_count), timeline.is_looped())
            }
        };
        if schedule.is_empty() {
            tracing::debug!(key, "motion start skipped: empty timeline");
            return;
        }
        let loop_span_ms = looped
            .then(|| Timeline::schedule_span_ms(&schedule, target_count))
            .filter(|span| *span > 0.0);
        self.active.insert(
            key,
            ActivePlayback {
                schedule,
                target_count,
                elapsed_ms: 0.0,
                loop_span_ms,
            },
        );
    }

    /// Drop the playback for `key`, if any.
    pub fn stop(&mut self, key: PlaybackKey) {
        self.active.remove(&key);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Advance every active playback by `dt_ms`.
    pub fn update(&mut self, dt_ms: f32) {
        for playback in self.active.values_mut() {
            playback.elapsed_ms += dt_ms.max(0.0);
        }
    }

    /// Current value of `property` for target `index` under `key`.
    pub fn value(&self, key: PlaybackKey, index: usize, property: Property) -> Option<f32> {
        let playback = self.active.get(&key)?;
        let t_ms = match playback.loop_span_ms {
            Some(span) => playback.elapsed_ms % span,
            None => playback.elapsed_ms,
        };
        sample_schedule(
            &playback.schedule,
            property,
            index,
            playback.target_count,
            t_ms,
        )
    }

    /// Like [`value`](Self::value) but with a fallback for unstarted or
    /// missing tracks.
    pub fn value_or(&self, key: PlaybackKey, index: usize, property: Property, default: f32) -> f32 {
        self.value(key, index, property).unwrap_or(default)
    }

    pub fn is_active(&self, key: PlaybackKey) -> bool {
        self.active.contains_key(&key)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    fn slide() -> MotionSpec {
        MotionSpec::new(100.0)
            .track(Property::TranslateX, &[0.0, 10.0])
            .easing(Easing::Linear)
    }

    #[test]
    fn test_start_update_sample() {
        let mut runner = MotionRunner::new();
        runner.start(1, slide(), 1);
        runner.update(50.0);
        let v = runner.value(1, 0, Property::TranslateX).unwrap();
        assert!((v - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut runner = MotionRunner::new();
        runner.start(1, slide(), 1);
        runner.update(90.0);
        runner.start(1, slide(), 1);
        let v = runner.value(1, 0, Property::TranslateX).unwrap();
        assert!(v.abs() < 1e-3);
    }

    #[test]
    fn test_zero_targets_is_a_no_op() {
        let mut runner = MotionRunner::new();
        runner.start(1, slide(), 0);
        assert!(!runner.is_active(1));
        assert_eq!(runner.active_count(), 0);
    }

    #[test]
    fn test_zero_targets_leaves_existing_playback() {
        let mut runner = MotionRunner::new();
        runner.start(1, slide(), 1);
        runner.update(30.0);
        runner.start(1, slide(), 0);
        let v = runner.value(1, 0, Property::TranslateX).unwrap();
        assert!((v - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_stop_removes_playback() {
        let mut runner = MotionRunner::new();
        runner.start(1, slide(), 1);
        runner.stop(1);
        assert_eq!(runner.value(1, 0, Property::TranslateX), None);
    }

    #[test]
    fn test_value_or_falls_back() {
        let runner = MotionRunner::new();
        assert_eq!(runner.value_or(9, 0, Property::Opacity, 0.25), 0.25);
    }

    #[test]
    fn test_looping_timeline_wraps_clock() {
        let timeline = Timeline::new().then(slide()).looped();
        let mut runner = MotionRunner::new();
        runner.start(3, timeline, 1);
        // One full span (100ms) plus half: same as 50ms in.
        runner.update(150.0);
        let v = runner.value(3, 0, Property::TranslateX).unwrap();
        assert!((v - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_timeline_playback() {
        let timeline = Timeline::new()
            .then(slide())
            .with_offset(-50.0, {
                MotionSpec::new(100.0)
                    .track(Property::Opacity, &[0.0, 1.0])
                    .easing(Easing::Linear)
            });
        let mut runner = MotionRunner::new();
        runner.start(2, timeline, 1);
        runner.update(75.0);
        // Slide at 75ms...
        let x = runner.value(2, 0, Property::TranslateX).unwrap();
        assert!((x - 7.5).abs() < 1e-3);
        // ...while the overlapping fade is 25ms in.
        let o = runner.value(2, 0, Property::Opacity).unwrap();
        assert!((o - 0.25).abs() < 1e-3);
    }
}
