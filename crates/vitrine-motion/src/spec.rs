//! Motion definitions: properties, keyframe tracks and playback options.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Animatable scalar property of a demo target.
///
/// Targets interpret these when painting; the runner only schedules values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    TranslateX,
    TranslateY,
    ScaleX,
    ScaleY,
    /// Rotation in degrees.
    Rotate,
    Opacity,
    /// Dash phase for stroked paths (draw-on effects).
    DashOffset,
    /// Free-form progress scalar, for targets that derive their own geometry.
    Progress,
}

/// A single keyframe: property value at a normalized track offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackKey {
    /// Position within the iteration, 0.0..=1.0.
    pub offset: f32,
    pub value: f32,
    /// Easing of the segment arriving at this key; falls back to the spec default.
    pub easing: Option<Easing>,
}

/// Sequence of keyframes for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTrack {
    pub property: Property,
    pub keys: Vec<TrackKey>,
}

impl PropertyTrack {
    /// Track from a plain value list, keys spaced uniformly across 0..=1.
    pub fn from_values(property: Property, values: &[f32]) -> Self {
        let n = values.len();
        let keys = values
            .iter()
            .enumerate()
            .map(|(i, v)| TrackKey {
                offset: if n <= 1 { 0.0 } else { i as f32 / (n - 1) as f32 },
                value: *v,
                easing: None,
            })
            .collect();
        Self { property, keys }
    }

    pub fn with_keys(property: Property, keys: Vec<TrackKey>) -> Self {
        Self { property, keys }
    }

    /// Sample the track at iteration progress `p` (0..=1).
    pub fn sample(&self, p: f32, default_easing: Easing) -> Option<f32> {
        let first = self.keys.first()?;
        if self.keys.len() == 1 || p <= first.offset {
            return Some(first.value);
        }
        let last = self.keys.last()?;
        if p >= last.offset {
            return Some(last.value);
        }
        for pair in self.keys.windows(2) {
            let (k0, k1) = (&pair[0], &pair[1]);
            if p >= k0.offset && p <= k1.offset {
                let span = (k1.offset - k0.offset).max(1e-6);
                let u = (p - k0.offset) / span;
                let easing = k1.easing.unwrap_or(default_easing);
                return Some(easing.apply(k0.value, k1.value, u));
            }
        }
        Some(last.value)
    }
}

/// Reference point a stagger measures distances from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerOrigin {
    #[default]
    First,
    Last,
    Center,
    Index(usize),
}

/// Per-target delay spread over an ordered or grid-shaped target collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    /// Delay step in milliseconds per unit of distance from the origin.
    pub each_ms: f32,
    pub from: StaggerOrigin,
    /// Treat targets as a `[cols, rows]` grid and measure euclidean distance.
    pub grid: Option<[u32; 2]>,
}

impl Stagger {
    pub fn new(each_ms: f32) -> Self {
        Self {
            each_ms,
            from: StaggerOrigin::First,
            grid: None,
        }
    }

    pub fn from_origin(mut self, from: StaggerOrigin) -> Self {
        self.from = from;
        self
    }

    pub fn on_grid(mut self, cols: u32, rows: u32) -> Self {
        self.grid = Some([cols, rows]);
        self
    }

    /// Delay in milliseconds for target `index` out of `count`.
    pub fn delay_for(&self, index: usize, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let dist = match self.grid {
            Some([cols, _rows]) if cols > 0 => {
                let col = (index as u32 % cols) as f32;
                let row = (index as u32 / cols) as f32;
                let (ref_col, ref_row) = match self.from {
                    StaggerOrigin::First => (0.0, 0.0),
                    StaggerOrigin::Last => {
                        let last = (count - 1) as u32;
                        ((last % cols) as f32, (last / cols) as f32)
                    }
                    StaggerOrigin::Center => {
                        let last = (count - 1) as u32;
                        let rows = (last / cols) as f32;
                        ((cols - 1) as f32 / 2.0, rows / 2.0)
                    }
                    StaggerOrigin::Index(i) => {
                        let i = (i.min(count - 1)) as u32;
                        ((i % cols) as f32, (i / cols) as f32)
                    }
                };
                let dc = col - ref_col;
                let dr = row - ref_row;
                (dc * dc + dr * dr).sqrt()
            }
            _ => {
                let i = index as f32;
                match self.from {
                    StaggerOrigin::First => i,
                    StaggerOrigin::Last => (count - 1) as f32 - i,
                    StaggerOrigin::Center => (i - (count - 1) as f32 / 2.0).abs(),
                    StaggerOrigin::Index(k) => (i - k.min(count - 1) as f32).abs(),
                }
            }
        };
        self.each_ms * dist
    }

    /// Largest delay any target in the collection receives.
    pub fn max_delay(&self, count: usize) -> f32 {
        (0..count)
            .map(|i| self.delay_for(i, count))
            .fold(0.0, f32::max)
    }
}

/// Delay before a spec starts, fixed or staggered per target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Delay {
    Fixed(f32),
    Stagger(Stagger),
}

impl Default for Delay {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl Delay {
    pub fn for_target(&self, index: usize, count: usize) -> f32 {
        match self {
            Delay::Fixed(ms) => *ms,
            Delay::Stagger(s) => s.delay_for(index, count),
        }
    }

    fn max_delay(&self, count: usize) -> f32 {
        match self {
            Delay::Fixed(ms) => *ms,
            Delay::Stagger(s) => s.max_delay(count),
        }
    }
}

/// How many iterations a spec plays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoopCount {
    Count { count: f32 },
    Infinite,
}

impl Default for LoopCount {
    fn default() -> Self {
        Self::Count { count: 1.0 }
    }
}

impl LoopCount {
    pub fn once() -> Self {
        Self::Count { count: 1.0 }
    }

    fn is_finished(&self, iteration: f32) -> bool {
        match self {
            Self::Infinite => false,
            Self::Count { count } => iteration >= *count,
        }
    }

    fn last_iteration(&self) -> f32 {
        match self {
            Self::Infinite => 0.0,
            Self::Count { count } => (count.ceil() - 1.0).max(0.0),
        }
    }
}

/// Playback direction across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Normal,
    /// Alternate between forward and backward per iteration.
    Alternate,
}

impl Direction {
    fn is_reversed(&self, iteration: u32) -> bool {
        match self {
            Self::Normal => false,
            Self::Alternate => iteration % 2 == 1,
        }
    }
}

/// A complete declarative animation invocation: tracks plus options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionSpec {
    pub tracks: Vec<PropertyTrack>,
    pub duration_ms: f32,
    pub easing: Easing,
    pub delay: Delay,
    pub iterations: LoopCount,
    pub direction: Direction,
}

impl MotionSpec {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Add a uniform-spaced track from a value list.
    pub fn track(mut self, property: Property, values: &[f32]) -> Self {
        self.tracks.push(PropertyTrack::from_values(property, values));
        self
    }

    /// Add a track with explicit keyframes.
    pub fn keys(mut self, track: PropertyTrack) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay_ms(mut self, ms: f32) -> Self {
        self.delay = Delay::Fixed(ms);
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.delay = Delay::Stagger(stagger);
        self
    }

    pub fn looped(mut self) -> Self {
        self.iterations = LoopCount::Infinite;
        self
    }

    pub fn iterations(mut self, count: f32) -> Self {
        self.iterations = LoopCount::Count { count };
        self
    }

    pub fn alternate(mut self) -> Self {
        self.direction = Direction::Alternate;
        self
    }

    /// Time from segment start until the slowest target has finished one
    /// full run (finite iterations; infinite specs count a single pass).
    pub fn span_ms(&self, count: usize) -> f32 {
        let iters = match self.iterations {
            LoopCount::Infinite => 1.0,
            LoopCount::Count { count } => count.max(1.0),
        };
        self.delay.max_delay(count) + self.duration_ms * iters
    }

    /// Sample `property` for target `index` of `count` at `t_ms` since start.
    ///
    /// Returns `None` while the target's delay has not elapsed or when the
    /// spec has no track for the property; finished finite specs hold their
    /// final value.
    pub fn sample(&self, property: Property, index: usize, count: usize, t_ms: f32) -> Option<f32> {
        let track = self.tracks.iter().find(|t| t.property == property)?;
        let local = t_ms - self.delay.for_target(index, count);
        if local < 0.0 {
            return None;
        }
        let duration = self.duration_ms.max(1e-3);
        let raw_iteration = (local / duration).floor();
        let (iteration, progress) = if self.iterations.is_finished(raw_iteration) {
            (self.iterations.last_iteration(), 1.0)
        } else {
            (raw_iteration, (local % duration) / duration)
        };
        let progress = if self.direction.is_reversed(iteration as u32) {
            1.0 - progress
        } else {
            progress
        };
        track.sample(progress, self.easing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_track_offsets() {
        let track = PropertyTrack::from_values(Property::Opacity, &[0.0, 0.5, 1.0]);
        assert_eq!(track.keys[0].offset, 0.0);
        assert_eq!(track.keys[1].offset, 0.5);
        assert_eq!(track.keys[2].offset, 1.0);
    }

    #[test]
    fn test_track_sample_linear() {
        let track = PropertyTrack::from_values(Property::TranslateX, &[0.0, 10.0]);
        let v = track.sample(0.5, Easing::Linear).unwrap();
        assert!((v - 5.0).abs() < 1e-4);
        assert_eq!(track.sample(0.0, Easing::Linear), Some(0.0));
        assert_eq!(track.sample(1.0, Easing::Linear), Some(10.0));
    }

    #[test]
    fn test_stagger_linear_origins() {
        let s = Stagger::new(100.0);
        assert_eq!(s.delay_for(0, 6), 0.0);
        assert_eq!(s.delay_for(3, 6), 300.0);

        let s = Stagger::new(100.0).from_origin(StaggerOrigin::Last);
        assert_eq!(s.delay_for(5, 6), 0.0);
        assert_eq!(s.delay_for(0, 6), 500.0);

        let s = Stagger::new(100.0).from_origin(StaggerOrigin::Center);
        assert_eq!(s.delay_for(0, 5), 200.0);
        assert_eq!(s.delay_for(2, 5), 0.0);

        let s = Stagger::new(100.0).from_origin(StaggerOrigin::Index(1));
        assert_eq!(s.delay_for(0, 4), 100.0);
        assert_eq!(s.delay_for(3, 4), 200.0);
    }

    #[test]
    fn test_stagger_grid_center() {
        // 3x3 grid, center cell is index 4.
        let s = Stagger::new(10.0)
            .from_origin(StaggerOrigin::Center)
            .on_grid(3, 3);
        assert_eq!(s.delay_for(4, 9), 0.0);
        assert!((s.delay_for(0, 9) - 10.0 * 2.0_f32.sqrt()).abs() < 1e-3);
        assert_eq!(s.delay_for(5, 9), 10.0);
    }

    #[test]
    fn test_sample_none_before_delay() {
        let spec = MotionSpec::new(100.0)
            .track(Property::Opacity, &[0.0, 1.0])
            .delay_ms(50.0);
        assert_eq!(spec.sample(Property::Opacity, 0, 1, 10.0), None);
        assert!(spec.sample(Property::Opacity, 0, 1, 60.0).is_some());
    }

    #[test]
    fn test_sample_missing_track_is_none() {
        let spec = MotionSpec::new(100.0).track(Property::Opacity, &[0.0, 1.0]);
        assert_eq!(spec.sample(Property::Rotate, 0, 1, 50.0), None);
    }

    #[test]
    fn test_finite_spec_holds_final_value() {
        let spec = MotionSpec::new(100.0)
            .track(Property::TranslateX, &[0.0, 10.0])
            .easing(Easing::Linear);
        let v = spec.sample(Property::TranslateX, 0, 1, 500.0).unwrap();
        assert!((v - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_alternate_reverses_odd_iterations() {
        let spec = MotionSpec::new(100.0)
            .track(Property::TranslateX, &[0.0, 10.0])
            .easing(Easing::Linear)
            .looped()
            .alternate();
        // First iteration, a quarter in: forward.
        let fwd = spec.sample(Property::TranslateX, 0, 1, 25.0).unwrap();
        assert!((fwd - 2.5).abs() < 1e-3);
        // Second iteration, same phase: reversed.
        let rev = spec.sample(Property::TranslateX, 0, 1, 125.0).unwrap();
        assert!((rev - 7.5).abs() < 1e-3);
    }

    #[test]
    fn test_staggered_targets_start_apart() {
        let spec = MotionSpec::new(100.0)
            .track(Property::Opacity, &[0.0, 1.0])
            .stagger(Stagger::new(120.0));
        assert!(spec.sample(Property::Opacity, 0, 6, 10.0).is_some());
        assert_eq!(spec.sample(Property::Opacity, 1, 6, 10.0), None);
        assert!(spec.sample(Property::Opacity, 1, 6, 130.0).is_some());
    }

    #[test]
    fn test_span_includes_stagger_tail() {
        let spec = MotionSpec::new(100.0)
            .track(Property::Opacity, &[0.0, 1.0])
            .stagger(Stagger::new(50.0));
        assert!((spec.span_ms(4) - 250.0).abs() < 1e-3);
    }
}
