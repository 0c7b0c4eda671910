//! Ordered sequences of motion segments with overlap support.

use crate::spec::{MotionSpec, Property};

/// Where a segment starts relative to the timeline built so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentOffset {
    /// Start when the previous segment ends (the default chaining rule).
    After,
    /// Start relative to the previous segment's end; negative values overlap.
    FromPrev(f32),
    /// Absolute start time from the timeline origin.
    At(f32),
}

/// A segment with its start time resolved against a concrete target count.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledSegment {
    pub start_ms: f32,
    pub spec: MotionSpec,
}

/// A declarative sequence of motion specs.
///
/// Segment start times depend on the target count (staggered delays stretch
/// a segment's span), so a timeline is scheduled when playback starts.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<(SegmentOffset, MotionSpec)>,
    looped: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeat the whole sequence once its last segment has finished.
    pub fn looped(mut self) -> Self {
        self.looped = true;
        self
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Append a segment starting when the previous one ends.
    pub fn then(mut self, spec: MotionSpec) -> Self {
        self.segments.push((SegmentOffset::After, spec));
        self
    }

    /// Append a segment offset from the previous segment's end.
    /// Negative offsets start it before the previous segment finishes.
    pub fn with_offset(mut self, offset_ms: f32, spec: MotionSpec) -> Self {
        self.segments.push((SegmentOffset::FromPrev(offset_ms), spec));
        self
    }

    /// Append a segment at an absolute time from the timeline origin.
    pub fn at(mut self, start_ms: f32, spec: MotionSpec) -> Self {
        self.segments.push((SegmentOffset::At(start_ms), spec));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve segment start times for a concrete target count.
    pub fn schedule(&self, count: usize) -> Vec<ScheduledSegment> {
        let mut scheduled = Vec::with_capacity(self.segments.len());
        let mut cursor = 0.0f32;
        for (offset, spec) in &self.segments {
            let start = match offset {
                SegmentOffset::After => cursor,
                SegmentOffset::FromPrev(ms) => (cursor + ms).max(0.0),
                SegmentOffset::At(ms) => ms.max(0.0),
            };
            cursor = start + spec.span_ms(count);
            scheduled.push(ScheduledSegment {
                start_ms: start,
                spec: spec.clone(),
            });
        }
        scheduled
    }

    /// Total span of a resolved schedule: the latest segment end.
    pub fn schedule_span_ms(schedule: &[ScheduledSegment], count: usize) -> f32 {
        schedule
            .iter()
            .map(|seg| seg.start_ms + seg.spec.span_ms(count))
            .fold(0.0, f32::max)
    }
}

/// Sample a scheduled segment list: the latest-starting segment that yields a
/// value wins, so later segments override earlier ones they overlap.
pub(crate) fn sample_schedule(
    schedule: &[ScheduledSegment],
    property: Property,
    index: usize,
    count: usize,
    t_ms: f32,
) -> Option<f32> {
    schedule
        .iter()
        .rev()
        .filter(|seg| t_ms >= seg.start_ms)
        .find_map(|seg| seg.spec.sample(property, index, count, t_ms - seg.start_ms))
}
