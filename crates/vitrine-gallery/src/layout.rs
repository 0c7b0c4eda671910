//! Responsive card grid: as many fixed-minimum-width columns as fit.

use vitrine_core::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub min_card_width: f32,
    pub card_height: f32,
    pub gap: f32,
    pub margin_x: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            min_card_width: 320.0,
            card_height: 236.0,
            gap: 24.0,
            margin_x: 20.0,
        }
    }
}

impl GridLayout {
    /// Card bounds for `count` cards in a viewport of `width`, flowing
    /// row-major from `origin_y`.
    pub fn layout(&self, width: f32, origin_y: f32, count: usize) -> Vec<Rect> {
        let avail = (width - self.margin_x * 2.0).max(self.min_card_width);
        let cols = (((avail + self.gap) / (self.min_card_width + self.gap)).floor() as usize).max(1);
        let card_w = (avail - self.gap * (cols as f32 - 1.0)) / cols as f32;

        (0..count)
            .map(|i| {
                let col = i % cols;
                let row = i / cols;
                Rect {
                    x: self.margin_x + col as f32 * (card_w + self.gap),
                    y: origin_y + row as f32 * (self.card_height + self.gap),
                    w: card_w,
                    h: self.card_height,
                }
            })
            .collect()
    }

    /// Total content height for `count` cards at `width`.
    pub fn content_height(&self, width: f32, count: usize) -> f32 {
        let rects = self.layout(width, 0.0, count);
        rects
            .last()
            .map(|r| r.y + r.h + self.gap)
            .unwrap_or(0.0)
    }
}
