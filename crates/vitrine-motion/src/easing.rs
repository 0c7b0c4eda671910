//! Named easing curves, evaluated by the `keyframe` crate.

use keyframe::functions;
use serde::{Deserialize, Serialize};

/// Easing curve selection for a track segment or a whole spec.
///
/// Evaluation (curve shape and eased blending between the two endpoint
/// values) is performed by `keyframe`; this enum only names the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    In,
    Out,
    InOut,
    InQuad,
    #[default]
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
}

impl Easing {
    /// Eased blend from `from` to `to` at normalized time `t` (clamped to 0..=1).
    pub fn apply(&self, from: f32, to: f32, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => keyframe::ease(functions::Linear, from, to, t),
            Easing::In => keyframe::ease(functions::EaseIn, from, to, t),
            Easing::Out => keyframe::ease(functions::EaseOut, from, to, t),
            Easing::InOut => keyframe::ease(functions::EaseInOut, from, to, t),
            Easing::InQuad => keyframe::ease(functions::EaseInQuad, from, to, t),
            Easing::OutQuad => keyframe::ease(functions::EaseOutQuad, from, to, t),
            Easing::InOutQuad => keyframe::ease(functions::EaseInOutQuad, from, to, t),
            Easing::InCubic => keyframe::ease(functions::EaseInCubic, from, to, t),
            Easing::OutCubic => keyframe::ease(functions::EaseOutCubic, from, to, t),
            Easing::InOutCubic => keyframe::ease(functions::EaseInOutCubic, from, to, t),
            Easing::InQuart => keyframe::ease(functions::EaseInQuart, from, to, t),
            Easing::OutQuart => keyframe::ease(functions::EaseOutQuart, from, to, t),
            Easing::InOutQuart => keyframe::ease(functions::EaseInOutQuart, from, to, t),
            Easing::InQuint => keyframe::ease(functions::EaseInQuint, from, to, t),
            Easing::OutQuint => keyframe::ease(functions::EaseOutQuint, from, to, t),
            Easing::InOutQuint => keyframe::ease(functions::EaseInOutQuint, from, to, t),
        }
    }
}
