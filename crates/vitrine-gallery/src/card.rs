//! The presentation card: styled shell around a demo's preview region.
//!
//! A card is a pure function of its inputs: it records chrome into the
//! painter, reserves a preview region for the caller's content and reports
//! the preview geometry back. It holds no state and knows nothing about
//! triggers or playback.

use vitrine_core::{
    Brush, Color, FontStore, Painter, Rect, RegionId, RoundedRect, Stroke, TextRun,
};

/// Background/text color pair for a category badge, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub background: &'static str,
    pub text: &'static str,
}

/// Static category color table. Unknown slugs fall back to the neutral pair.
const CATEGORY_COLORS: &[(&str, BadgeColors)] = &[
    (
        "core-transforms",
        BadgeColors {
            background: "#dbeafe",
            text: "#1e40af",
        },
    ),
    (
        "staggered",
        BadgeColors {
            background: "#dcfce7",
            text: "#166534",
        },
    ),
    (
        "timelines",
        BadgeColors {
            background: "#fef3c7",
            text: "#92400e",
        },
    ),
    (
        "svg-line-drawing",
        BadgeColors {
            background: "#e0e7ff",
            text: "#5b21b6",
        },
    ),
    (
        "svg-morphing",
        BadgeColors {
            background: "#fce7f3",
            text: "#be185d",
        },
    ),
];

const DEFAULT_BADGE: BadgeColors = BadgeColors {
    background: "#f3f4f6",
    text: "#374151",
};

/// Resolve badge colors for a category slug; total, never fails.
pub fn badge_colors(slug: &str) -> BadgeColors {
    CATEGORY_COLORS
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, colors)| *colors)
        .unwrap_or(DEFAULT_BADGE)
}

/// Badge label transform: a literal " & " collapses to a single space.
pub fn display_label(category: &str) -> String {
    category.replace(" & ", " ")
}

const CARD_RADIUS: f32 = 16.0;
const CARD_PADDING: f32 = 16.0;
const PREVIEW_RADIUS: f32 = 12.0;
const PREVIEW_MIN_HEIGHT: f32 = 120.0;
const TITLE_SIZE: f32 = 16.0;
const DESCRIPTION_SIZE: f32 = 14.0;
const BADGE_TEXT_SIZE: f32 = 11.0;
const BADGE_HEIGHT: f32 = 20.0;
const LINE_ADVANCE: f32 = 22.0;

/// Inputs for one card render.
pub struct Card<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub category_slug: Option<&'a str>,
    /// Hit-region id attached to the preview area.
    pub preview_region: RegionId,
}

/// Geometry the card reports back to its caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    /// Preview area hosting the caller's content. Clip to this when painting.
    pub preview: Rect,
}

impl Card<'_> {
    /// Record the card chrome into `painter` over `bounds` and reserve the
    /// preview region. Content is the caller's business.
    pub fn paint(&self, painter: &mut Painter, fonts: &FontStore, bounds: Rect) -> CardLayout {
        let z = 10;

        // Soft drop shadow stand-in, then surface and border.
        let shadow = Rect {
            y: bounds.y + 2.0,
            ..bounds
        };
        painter.rounded_rect(
            RoundedRect::uniform(shadow, CARD_RADIUS),
            Brush::Solid(Color::from_srgba(0, 0, 0, 0.06)),
            z - 1,
        );
        painter.rounded_rect(
            RoundedRect::uniform(bounds, CARD_RADIUS),
            Brush::Solid(Color::rgba(255, 255, 255, 255)),
            z,
        );
        painter.stroke_rounded_rect(
            RoundedRect::uniform(bounds, CARD_RADIUS),
            Stroke::new(1.0),
            Brush::Solid(Color::rgba(0xe5, 0xe7, 0xeb, 255)),
            z + 1,
        );

        let left = bounds.x + CARD_PADDING;
        let mut cursor_y = bounds.y + CARD_PADDING;

        painter.text(
            TextRun {
                text: self.title.to_string(),
                pos: [left, cursor_y],
                size: TITLE_SIZE,
                color: Color::rgba(0x11, 0x18, 0x27, 255),
            },
            z + 2,
        );

        if let Some(category) = self.category {
            self.paint_badge(painter, fonts, bounds, category, z);
        }

        cursor_y += LINE_ADVANCE;
        if let Some(description) = self.description {
            painter.text(
                TextRun {
                    text: description.to_string(),
                    pos: [left, cursor_y],
                    size: DESCRIPTION_SIZE,
                    color: Color::rgba(0x64, 0x74, 0x8b, 255),
                },
                z + 2,
            );
            cursor_y += LINE_ADVANCE;
        }

        cursor_y += CARD_PADDING * 0.75;
        let bottom = bounds.y + bounds.h - CARD_PADDING;
        let preview = Rect {
            x: left,
            y: cursor_y,
            w: (bounds.w - CARD_PADDING * 2.0).max(0.0),
            h: (bottom - cursor_y).max(PREVIEW_MIN_HEIGHT),
        };
        painter.rounded_rect(
            RoundedRect::uniform(preview, PREVIEW_RADIUS),
            Brush::Solid(Color::rgba(0xf8, 0xfa, 0xfc, 255)),
            z + 1,
        );
        painter.hit_region_rect(self.preview_region, preview, z + 3);

        CardLayout { preview }
    }

    fn paint_badge(
        &self,
        painter: &mut Painter,
        fonts: &FontStore,
        bounds: Rect,
        category: &str,
        z: i32,
    ) {
        let colors = self
            .category_slug
            .map(badge_colors)
            .unwrap_or(DEFAULT_BADGE);
        let label = display_label(category).to_uppercase();
        let text_w = fonts.measure(&label, BADGE_TEXT_SIZE, false);
        let pill_w = text_w + 16.0;
        let pill = Rect {
            x: bounds.x + bounds.w - CARD_PADDING - pill_w,
            y: bounds.y + CARD_PADDING - 2.0,
            w: pill_w,
            h: BADGE_HEIGHT,
        };
        let background = Color::from_hex(colors.background).unwrap_or(Color::TRANSPARENT);
        let text = Color::from_hex(colors.text).unwrap_or(Color::rgba(0, 0, 0, 255));
        painter.rounded_rect(
            RoundedRect::uniform(pill, BADGE_HEIGHT * 0.5),
            Brush::Solid(background),
            z + 2,
        );
        painter.text(
            TextRun {
                text: label,
                pos: [pill.x + 8.0, pill.y + (BADGE_HEIGHT - BADGE_TEXT_SIZE) * 0.5],
                size: BADGE_TEXT_SIZE,
                color: text,
            },
            z + 3,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{Command, Viewport, hit_region_at, mounted_regions};

    fn paint_card(card: &Card) -> (vitrine_core::DisplayList, CardLayout) {
        let mut painter = Painter::begin_frame(Viewport {
            width: 400,
            height: 300,
        });
        let layout = card.paint(
            &mut painter,
            &FontStore::empty(),
            Rect {
                x: 10.0,
                y: 10.0,
                w: 320.0,
                h: 236.0,
            },
        );
        (painter.finish(), layout)
    }

    #[test]
    fn test_label_transform_collapses_ampersand() {
        assert_eq!(
            display_label("Timelines & choreographies"),
            "Timelines choreographies"
        );
        // Only the exact " & " form collapses.
        assert_eq!(display_label("a&b"), "a&b");
        assert_eq!(display_label("plain"), "plain");
    }

    #[test]
    fn test_badge_colors_known_slug() {
        let colors = badge_colors("staggered");
        assert_eq!(colors.background, "#dcfce7");
        assert_eq!(colors.text, "#166534");
    }

    #[test]
    fn test_badge_colors_unknown_slug_falls_back() {
        let colors = badge_colors("unknown-x");
        assert_eq!(colors.background, "#f3f4f6");
        assert_eq!(colors.text, "#374151");
    }

    #[test]
    fn test_preview_minimum_height() {
        let card = Card {
            title: "Tiny",
            description: Some("with description"),
            category: None,
            category_slug: None,
            preview_region: 42,
        };
        let mut painter = Painter::begin_frame(Viewport {
            width: 400,
            height: 300,
        });
        // Deliberately short card: the preview still gets its minimum.
        let layout = card.paint(
            &mut painter,
            &FontStore::empty(),
            Rect {
                x: 0.0,
                y: 0.0,
                w: 320.0,
                h: 80.0,
            },
        );
        assert!(layout.preview.h >= 120.0);
    }

    #[test]
    fn test_preview_region_is_mounted_and_hittable() {
        let card = Card {
            title: "Row reveal",
            description: Some("List cascade"),
            category: Some("Staggered"),
            category_slug: Some("staggered"),
            preview_region: 7,
        };
        let (list, layout) = paint_card(&card);
        assert!(mounted_regions(&list).contains(&7));
        let center = layout.preview.center();
        assert_eq!(hit_region_at(&list, center), Some(7));
    }

    #[test]
    fn test_card_without_category_has_no_badge_text() {
        let card = Card {
            title: "Spin",
            description: None,
            category: None,
            category_slug: None,
            preview_region: 1,
        };
        let (list, _) = paint_card(&card);
        let texts: Vec<&str> = list
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::DrawText { run, .. } => Some(run.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["Spin"]);
    }

    #[test]
    fn test_badge_label_is_uppercased_and_transformed() {
        let card = Card {
            title: "t",
            description: None,
            category: Some("Timelines & choreographies"),
            category_slug: Some("timelines"),
            preview_region: 1,
        };
        let (list, _) = paint_card(&card);
        let found = list.commands.iter().any(|cmd| match cmd {
            Command::DrawText { run, .. } => run.text == "TIMELINES CHOREOGRAPHIES",
            _ => false,
        });
        assert!(found);
    }
}
