//! Sequenced segments, including overlap via negative offsets.

use vitrine_core::{Brush, Color, Painter, Rect, RoundedRect, Transform2D};
use vitrine_gallery::{Category, Demo, DemoUnit, PropertySampler};
use vitrine_motion::{Easing, MotionSpec, Playable, Property, Timeline};

pub fn category() -> Category {
    Category::new(
        "Timelines & choreographies",
        "timelines",
        vec![
            Demo::new(
                "corner-march",
                "Corner march",
                "Four chained slides, each overlapping the last",
                Box::new(CornerMarch),
            )
            .tag("timeline"),
            Demo::new(
                "pulse-chain",
                "Pulse chain",
                "Scale up, then settle and breathe in sequence",
                Box::new(PulseChain),
            )
            .tag("timeline"),
        ],
    )
}

struct CornerMarch;

impl DemoUnit for CornerMarch {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        let leg = |property: Property, from: f32, to: f32| {
            MotionSpec::new(450.0)
                .track(property, &[from, to])
                .easing(Easing::InOutQuad)
        };
        Timeline::new()
            .then(leg(Property::TranslateX, 0.0, 44.0))
            .with_offset(-120.0, leg(Property::TranslateY, 0.0, 26.0))
            .with_offset(-120.0, leg(Property::TranslateX, 44.0, 0.0))
            .with_offset(-120.0, leg(Property::TranslateY, 26.0, 0.0))
            .looped()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let dx = values.value_or(0, Property::TranslateX, 0.0);
        let dy = values.value_or(0, Property::TranslateY, 0.0);
        let size = 30.0;
        let [cx, cy] = bounds.center();
        let rect = Rect {
            x: cx - 22.0 - size * 0.5 + dx,
            y: cy - 13.0 - size * 0.5 + dy,
            w: size,
            h: size,
        };
        painter.rounded_rect(
            RoundedRect::uniform(rect, 7.0),
            Brush::Solid(Color::rgba(0xf5, 0x9e, 0x0b, 255)),
            20,
        );
    }
}

struct PulseChain;

impl DemoUnit for PulseChain {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        let grow = MotionSpec::new(420.0)
            .track(Property::ScaleX, &[0.55, 1.15])
            .track(Property::ScaleY, &[0.55, 1.15])
            .track(Property::Opacity, &[0.4, 1.0])
            .easing(Easing::OutCubic);
        let settle = MotionSpec::new(700.0)
            .track(Property::ScaleX, &[1.15, 0.95, 1.0])
            .track(Property::ScaleY, &[1.15, 0.95, 1.0])
            .easing(Easing::InOutQuad);
        let rest = MotionSpec::new(500.0)
            .track(Property::Opacity, &[1.0, 0.4])
            .easing(Easing::InOutQuad);
        Timeline::new()
            .then(grow)
            .with_offset(-100.0, settle)
            .then(rest)
            .looped()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let sx = values.value_or(0, Property::ScaleX, 0.55);
        let sy = values.value_or(0, Property::ScaleY, 0.55);
        let opacity = values.value_or(0, Property::Opacity, 0.4);
        let [cx, cy] = bounds.center();

        painter.push_transform(Transform2D::scale_about(sx, sy, cx, cy));
        painter.circle(
            [cx, cy],
            24.0,
            Brush::Solid(Color::rgba(0xec, 0x48, 0x99, 255).with_opacity(opacity)),
            20,
        );
        painter.pop_transform();
    }
}
