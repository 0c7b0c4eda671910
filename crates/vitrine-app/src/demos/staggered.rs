//! Stagger-delay spreads over rows and grids.

use vitrine_core::{Brush, Color, Painter, Rect, RoundedRect};
use vitrine_gallery::{Category, Demo, DemoUnit, PropertySampler};
use vitrine_motion::{Easing, MotionSpec, Playable, Property, Stagger, StaggerOrigin};

pub fn category() -> Category {
    Category::new(
        "Staggered",
        "staggered",
        vec![
            Demo::new(
                "row-reveal",
                "Row reveal",
                "List cascade staggered from the first item",
                Box::new(RowReveal),
            )
            .tag("stagger"),
            Demo::new(
                "grid-wave",
                "Grid wave",
                "Grid-aware stagger rippling from the center",
                Box::new(GridWave),
            )
            .tag("stagger")
            .tag("grid"),
        ],
    )
}

struct RowReveal;

const ROW_ITEMS: usize = 6;

impl DemoUnit for RowReveal {
    fn target_count(&self) -> usize {
        ROW_ITEMS
    }

    fn play(&self) -> Playable {
        MotionSpec::new(800.0)
            .track(Property::TranslateY, &[12.0, 0.0])
            .track(Property::Opacity, &[0.0, 1.0])
            .easing(Easing::OutQuad)
            .stagger(Stagger::new(120.0))
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let size = 28.0;
        let gap = 8.0;
        let total = ROW_ITEMS as f32 * size + (ROW_ITEMS as f32 - 1.0) * gap;
        let [cx, cy] = bounds.center();
        let x0 = cx - total * 0.5;
        for i in 0..ROW_ITEMS {
            let dy = values.value_or(i, Property::TranslateY, 12.0);
            let opacity = values.value_or(i, Property::Opacity, 0.0);
            let rect = Rect {
                x: x0 + i as f32 * (size + gap),
                y: cy - size * 0.5 + dy,
                w: size,
                h: size,
            };
            painter.rounded_rect(
                RoundedRect::uniform(rect, 6.0),
                Brush::Solid(Color::rgba(0x33, 0x41, 0x55, 255).with_opacity(opacity)),
                20,
            );
        }
    }
}

struct GridWave;

const GRID_COLS: u32 = 6;
const GRID_ROWS: u32 = 4;

impl DemoUnit for GridWave {
    fn target_count(&self) -> usize {
        (GRID_COLS * GRID_ROWS) as usize
    }

    fn play(&self) -> Playable {
        MotionSpec::new(800.0)
            .track(Property::TranslateY, &[10.0, 0.0])
            .track(Property::Opacity, &[0.0, 1.0])
            .easing(Easing::OutQuad)
            .stagger(
                Stagger::new(60.0)
                    .from_origin(StaggerOrigin::Center)
                    .on_grid(GRID_COLS, GRID_ROWS),
            )
            .looped()
            .alternate()
            .into()
    }

    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler) {
        let cell = 16.0;
        let gap = 6.0;
        let grid_w = GRID_COLS as f32 * cell + (GRID_COLS as f32 - 1.0) * gap;
        let grid_h = GRID_ROWS as f32 * cell + (GRID_ROWS as f32 - 1.0) * gap;
        let [cx, cy] = bounds.center();
        let x0 = cx - grid_w * 0.5;
        let y0 = cy - grid_h * 0.5;
        for i in 0..self.target_count() {
            let col = i as u32 % GRID_COLS;
            let row = i as u32 / GRID_COLS;
            let dy = values.value_or(i, Property::TranslateY, 10.0);
            let opacity = values.value_or(i, Property::Opacity, 0.0);
            let rect = Rect {
                x: x0 + col as f32 * (cell + gap),
                y: y0 + row as f32 * (cell + gap) + dy,
                w: cell,
                h: cell,
            };
            painter.rounded_rect(
                RoundedRect::uniform(rect, 4.0),
                Brush::Solid(Color::rgba(0x0e, 0xa5, 0xe9, 255).with_opacity(opacity)),
                20,
            );
        }
    }
}
