//! Stroke draw-on effects via animated dash offsets.

use vitrine_core::{Color, Painter, Path, PathCmd, Rect, Stroke, Transform2D};
use vitrine_gallery::{Category, Demo, DemoUnit, PropertySampler};
use vitrine_motion::{Easing, MotionSpec, Playable, Property};

pub fn category() -> Category {
    Category::new(
        "SVG line drawing",
        "svg-line-drawing",
        vec![
            Demo::new(
                "zigzag-trace",
                "Zigzag trace",
                "A polyline drawing itself on",
                Box::new(ZigzagTrace),
            )
            .tag("stroke"),
            Demo::new(
                "ring-draw",
                "Ring draw",
                "A circle outline sweeping closed",
                Box::new(RingDraw),
            )
            .tag("stroke"),
        ],
    )
}

/// Polyline in local coordinates, centered around the origin.
const ZIGZAG: [[f32; 2]; 7] = [
    [-66.0, 18.0],
    [-44.0, -18.0],
    [-22.0, 18.0],
    [0.0, -18.0],
    [22.0, 18.0],
    [44.0, -18.0],
    [66.0, 18.0],
];

fn polyline_length(points: &[[f32; 2]]) -> f32 {
    points
        .windows(2)
        .map(|pair| {
            let dx = pair[1][0] - pair[0][0];
            let dy = pair[1][1] - pair[0][1];
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}

struct ZigzagTrace;

impl DemoUnit for ZigzagTrace {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        let length = polyline_length(&ZIGZAG);
        MotionSpec::new(1500.0)
            .track(Property::DashOffset, &[length, 0.0])
            .easing(Easing::InOutCubic)
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let length = polyline_length(&ZIGZAG);
        let offset = values.value_or(0, Property::DashOffset, length);
        let [cx, cy] = bounds.center();

        painter.push_transform(Transform2D::translate(cx, cy));
        painter.stroke_path(
            Path::polyline(&ZIGZAG),
            Stroke::dashed(3.0, vec![length, length], offset),
            Color::rgba(0x5b, 0x21, 0xb6, 255),
            20,
        );
        painter.pop_transform();
    }
}

struct RingDraw;

const RING_RADIUS: f32 = 30.0;

// Control-point factor approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_75;

fn ring_path() -> Path {
    let r = RING_RADIUS;
    let k = r * KAPPA;
    Path {
        cmds: vec![
            PathCmd::MoveTo([0.0, -r]),
            PathCmd::CubicTo([k, -r], [r, -k], [r, 0.0]),
            PathCmd::CubicTo([r, k], [k, r], [0.0, r]),
            PathCmd::CubicTo([-k, r], [-r, k], [-r, 0.0]),
            PathCmd::CubicTo([-r, -k], [-k, -r], [0.0, -r]),
            PathCmd::Close,
        ],
        fill_rule: vitrine_core::FillRule::NonZero,
    }
}

impl DemoUnit for RingDraw {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        let circumference = 2.0 * std::f32::consts::PI * RING_RADIUS;
        MotionSpec::new(1400.0)
            .track(Property::DashOffset, &[circumference, 0.0])
            .easing(Easing::OutCubic)
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let circumference = 2.0 * std::f32::consts::PI * RING_RADIUS;
        let offset = values.value_or(0, Property::DashOffset, circumference);
        let [cx, cy] = bounds.center();

        painter.push_transform(Transform2D::translate(cx, cy));
        painter.stroke_path(
            ring_path(),
            Stroke::dashed(3.0, vec![circumference, circumference], offset),
            Color::rgba(0x63, 0x66, 0xf1, 255),
            20,
        );
        painter.pop_transform();
    }
}
