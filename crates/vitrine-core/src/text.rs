//! System font discovery and glyph access for card chrome text.
//!
//! The gallery only draws short single-line labels, so shaping is plain
//! left-to-right advance placement. When no usable font can be found the
//! store stays empty and text rendering degrades to drawing nothing.

use std::path::Path;

use fontdb::{Database, Family, Query, Weight};
use fontdue::{Font, FontSettings};

/// Loaded faces for the two weights the gallery uses.
pub struct FontStore {
    regular: Option<Font>,
    bold: Option<Font>,
}

impl FontStore {
    /// Discover a sans-serif face (regular and bold) from the system database.
    pub fn discover() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();

        let regular = Self::query_face(&db, Weight::NORMAL);
        let bold = Self::query_face(&db, Weight::BOLD);
        if regular.is_none() {
            tracing::warn!("no system sans-serif font found; labels will not render");
        }
        Self { regular, bold }
    }

    /// Load a specific font file, used for both weights.
    pub fn from_file(path: &Path) -> Option<Self> {
        let data = std::fs::read(path).ok()?;
        let regular = Font::from_bytes(data.as_slice(), FontSettings::default()).ok()?;
        let bold = Font::from_bytes(data.as_slice(), FontSettings::default()).ok()?;
        Some(Self {
            regular: Some(regular),
            bold: Some(bold),
        })
    }

    /// An empty store; text rendering becomes a no-op.
    pub fn empty() -> Self {
        Self {
            regular: None,
            bold: None,
        }
    }

    fn query_face(db: &Database, weight: Weight) -> Option<Font> {
        let query = Query {
            families: &[Family::SansSerif],
            weight,
            ..Query::default()
        };
        let id = db.query(&query)?;
        db.with_face_data(id, |data, index| {
            let settings = FontSettings {
                collection_index: index,
                ..FontSettings::default()
            };
            Font::from_bytes(data, settings).ok()
        })?
    }

    pub fn font(&self, bold: bool) -> Option<&Font> {
        if bold {
            self.bold.as_ref().or(self.regular.as_ref())
        } else {
            self.regular.as_ref()
        }
    }

    pub fn has_fonts(&self) -> bool {
        self.regular.is_some()
    }

    /// Advance width of a single line at the given pixel size.
    pub fn measure(&self, text: &str, px: f32, bold: bool) -> f32 {
        match self.font(bold) {
            Some(font) => text
                .chars()
                .map(|c| font.metrics(c, px).advance_width)
                .sum(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_measures_zero() {
        let store = FontStore::empty();
        assert!(!store.has_fonts());
        assert_eq!(store.measure("hello", 16.0, false), 0.0);
    }
}
