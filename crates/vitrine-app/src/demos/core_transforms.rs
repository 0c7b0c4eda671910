//! Translate / rotate / scale / opacity basics.

use vitrine_core::{Brush, Color, Painter, Rect, RoundedRect, Transform2D};
use vitrine_gallery::{Category, Demo, DemoUnit, PropertySampler};
use vitrine_motion::{Easing, MotionSpec, Playable, Property};

pub fn category() -> Category {
    Category::new(
        "Core transforms",
        "core-transforms",
        vec![
            Demo::new(
                "slide-fade",
                "Slide & fade",
                "TranslateX with an opacity ramp",
                Box::new(SlideFade),
            )
            .tag("transform")
            .tag("opacity"),
            Demo::new(
                "spin-scale",
                "Spin & scale",
                "Continuous rotation with a scale pulse",
                Box::new(SpinScale),
            )
            .tag("transform"),
        ],
    )
}

struct SlideFade;

impl DemoUnit for SlideFade {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        MotionSpec::new(900.0)
            .track(Property::TranslateX, &[-46.0, 46.0])
            .track(Property::Opacity, &[0.35, 1.0])
            .easing(Easing::InOutQuad)
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let dx = values.value_or(0, Property::TranslateX, -46.0);
        let opacity = values.value_or(0, Property::Opacity, 0.35);
        let size = 36.0;
        let [cx, cy] = bounds.center();
        let rect = Rect {
            x: cx - size * 0.5 + dx,
            y: cy - size * 0.5,
            w: size,
            h: size,
        };
        painter.rounded_rect(
            RoundedRect::uniform(rect, 8.0),
            Brush::Solid(Color::rgba(0x63, 0x66, 0xf1, 255).with_opacity(opacity)),
            20,
        );
    }
}

struct SpinScale;

impl DemoUnit for SpinScale {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        MotionSpec::new(1600.0)
            .track(Property::Rotate, &[0.0, 360.0])
            .track(Property::ScaleX, &[0.6, 1.0, 0.6])
            .track(Property::ScaleY, &[0.6, 1.0, 0.6])
            .easing(Easing::InOutQuad)
            .looped()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let angle = values.value_or(0, Property::Rotate, 0.0).to_radians();
        let sx = values.value_or(0, Property::ScaleX, 0.6);
        let sy = values.value_or(0, Property::ScaleY, 0.6);
        let size = 40.0;
        let [cx, cy] = bounds.center();

        painter.push_transform(
            Transform2D::rotate_about(angle, cx, cy).concat(Transform2D::scale_about(
                sx, sy, cx, cy,
            )),
        );
        painter.rounded_rect(
            RoundedRect::uniform(
                Rect {
                    x: cx - size * 0.5,
                    y: cy - size * 0.5,
                    w: size,
                    h: size,
                },
                10.0,
            ),
            Brush::Solid(Color::rgba(0x0e, 0xa5, 0xe9, 255)),
            20,
        );
        painter.pop_transform();
    }
}
