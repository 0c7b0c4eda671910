//! The demo catalogue: one module per category.

use vitrine_gallery::{Catalogue, CatalogueError, Category};

pub mod core_transforms;
pub mod line_drawing;
pub mod morphing;
pub mod staggered;
pub mod timelines;

/// Assemble the full catalogue in display order.
pub fn catalogue() -> Result<Catalogue, CatalogueError> {
    Catalogue::new(vec![
        core_transforms::category(),
        staggered::category(),
        timelines::category(),
        line_drawing::category(),
        morphing::category(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_builds() {
        let catalogue = catalogue().expect("catalogue invariants hold");
        assert_eq!(catalogue.categories().len(), 5);
        assert!(catalogue.demo_count() >= 10);
    }

    #[test]
    fn test_every_category_slug_has_badge_colors() {
        // Every shipped category should resolve to a non-default badge pair.
        let catalogue = catalogue().unwrap();
        let default = vitrine_gallery::badge_colors("unknown-x");
        for category in catalogue.categories() {
            let colors = vitrine_gallery::badge_colors(&category.slug);
            assert_ne!(colors, default, "missing colors for {}", category.slug);
        }
    }

    #[test]
    fn test_every_demo_has_targets_and_tracks() {
        let catalogue = catalogue().unwrap();
        for flat in catalogue.flatten() {
            assert!(flat.demo.unit.target_count() > 0, "{}", flat.demo.id);
        }
    }

    fn sample_all_properties(unit: &dyn vitrine_gallery::DemoUnit) {
        use vitrine_core::{Painter, Rect, Viewport};
        let mut painter = Painter::begin_frame(Viewport {
            width: 320,
            height: 160,
        });
        let bounds = Rect {
            x: 0.0,
            y: 0.0,
            w: 320.0,
            h: 160.0,
        };
        // Paint once with no playback (resting state)...
        let empty = |_: usize, _: vitrine_motion::Property| None::<f32>;
        unit.paint(&mut painter, bounds, &empty);
        // ...and once mid-playback.
        let mut runner = vitrine_motion::MotionRunner::new();
        runner.start(1, unit.play(), unit.target_count());
        runner.update(300.0);
        let sampler =
            |index: usize, property: vitrine_motion::Property| runner.value(1, index, property);
        unit.paint(&mut painter, bounds, &sampler);
    }

    #[test]
    fn test_every_demo_paints_without_panicking() {
        let catalogue = catalogue().unwrap();
        for flat in catalogue.flatten() {
            sample_all_properties(flat.demo.unit.as_ref());
        }
    }
}
