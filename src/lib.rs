//! Vitrine: an animated demo-gallery toolkit.
//!
//! Facade over the workspace crates. Applications usually want
//! [`gallery`] (catalogue, cards, triggers) and [`motion`] (declarative
//! animation definitions); the `vitrine` binary in `crates/vitrine-app`
//! shows the full wiring.

pub use vitrine_gallery as gallery;
pub use vitrine_motion as motion;

pub use vitrine_gallery::{Card, Catalogue, Category, Demo, DemoUnit, TriggerConfig, TriggerController};
pub use vitrine_motion::{Easing, MotionRunner, MotionSpec, Property, Stagger, Timeline};
