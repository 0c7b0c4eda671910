//! Shape morphs driven by an eased progress scalar.
//!
//! The playback animates a single `Progress` value; vertices and fill color
//! are mixed from it when painting, so every frame stays a pure function of
//! the sampled value.

use vitrine_core::{Color, Painter, Path, Rect, Transform2D};
use vitrine_gallery::{Category, Demo, DemoUnit, PropertySampler};
use vitrine_motion::{Easing, MotionSpec, Playable, Property, blend};

pub fn category() -> Category {
    Category::new(
        "SVG morphing",
        "svg-morphing",
        vec![
            Demo::new(
                "blob-morph",
                "Blob morph",
                "Diamond relaxing into an octagon",
                Box::new(BlobMorph),
            )
            .tag("morph"),
            Demo::new(
                "star-pulse",
                "Star pulse",
                "A star folding into a pentagon and back",
                Box::new(StarPulse),
            )
            .tag("morph"),
        ],
    )
}

fn morph_points(from: &[[f32; 2]], to: &[[f32; 2]], t: f32) -> Vec<[f32; 2]> {
    from.iter()
        .zip(to)
        .map(|(a, b)| [blend(a[0], b[0], t), blend(a[1], b[1], t)])
        .collect()
}

fn morph_color(from: [u8; 3], to: [u8; 3], t: f32) -> Color {
    let mix = |a: u8, b: u8| blend(a as f32, b as f32, t).round().clamp(0.0, 255.0) as u8;
    Color::rgba(mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2]), 255)
}

fn octagon(r: f32) -> Vec<[f32; 2]> {
    (0..8)
        .map(|i| {
            let a = (i as f32 / 8.0) * std::f32::consts::TAU - std::f32::consts::FRAC_PI_2;
            [r * a.cos(), r * a.sin()]
        })
        .collect()
}

/// Diamond expressed over eight vertices so it can morph into the octagon.
fn diamond(r: f32) -> Vec<[f32; 2]> {
    let corners = [[0.0, -r], [r, 0.0], [0.0, r], [-r, 0.0]];
    let mut points = Vec::with_capacity(8);
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        points.push(a);
        points.push([(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5]);
    }
    points
}

struct BlobMorph;

impl DemoUnit for BlobMorph {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        MotionSpec::new(1600.0)
            .track(Property::Progress, &[0.0, 1.0])
            .easing(Easing::InOutQuad)
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let t = values.value_or(0, Property::Progress, 0.0);
        let [cx, cy] = bounds.center();
        let points = morph_points(&diamond(34.0), &octagon(34.0), t);
        let color = morph_color([0x63, 0x66, 0xf1], [0xec, 0x48, 0x99], t);

        painter.push_transform(Transform2D::translate(cx, cy));
        painter.fill_path(Path::polygon(&points), color, 20);
        painter.pop_transform();
    }
}

fn star(outer: f32, inner: f32) -> Vec<[f32; 2]> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = (i as f32 / 10.0) * std::f32::consts::TAU - std::f32::consts::FRAC_PI_2;
            [r * a.cos(), r * a.sin()]
        })
        .collect()
}

struct StarPulse;

impl DemoUnit for StarPulse {
    fn target_count(&self) -> usize {
        1
    }

    fn play(&self) -> Playable {
        MotionSpec::new(1300.0)
            .track(Property::Progress, &[0.0, 1.0])
            .track(Property::Rotate, &[0.0, 36.0])
            .easing(Easing::InOutCubic)
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let t = values.value_or(0, Property::Progress, 0.0);
        let angle = values.value_or(0, Property::Rotate, 0.0).to_radians();
        let [cx, cy] = bounds.center();
        // Pentagon as ten points: inner radius pulled out to the outer ring.
        let points = morph_points(&star(36.0, 15.0), &star(36.0, 30.0), t);
        let color = morph_color([0xf5, 0x9e, 0x0b], [0x0e, 0xa5, 0xe9], t);

        painter.push_transform(Transform2D::rotate_about(angle, cx, cy));
        painter.push_transform(Transform2D::translate(cx, cy));
        painter.fill_path(Path::polygon(&points), color, 20);
        painter.pop_transform();
        painter.pop_transform();
    }
}
