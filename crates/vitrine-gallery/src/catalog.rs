//! The demo catalogue: categories owning ordered demo descriptors.
//!
//! Constructed once at startup and immutable afterwards. Each demo pairs
//! metadata with a renderable unit; the unit knows how many animation targets
//! it owns, what to play, and how to paint itself from sampled values.

use std::collections::BTreeSet;
use std::collections::HashSet;

use thiserror::Error;
use vitrine_core::{Painter, Rect};
use vitrine_motion::{Playable, Property};

/// Read access to the current animated values of a playback, per target.
pub trait PropertySampler {
    fn value(&self, index: usize, property: Property) -> Option<f32>;

    fn value_or(&self, index: usize, property: Property, default: f32) -> f32 {
        self.value(index, property).unwrap_or(default)
    }
}

impl<F> PropertySampler for F
where
    F: Fn(usize, Property) -> Option<f32>,
{
    fn value(&self, index: usize, property: Property) -> Option<f32> {
        self(index, property)
    }
}

/// A demo's renderable unit: preview content plus its play definition.
pub trait DemoUnit {
    /// Number of animation targets the preview owns (stagger denominator).
    fn target_count(&self) -> usize;

    /// The motion definition a play action (re)starts.
    fn play(&self) -> Playable;

    /// Paint the preview into `bounds` using currently sampled values.
    fn paint(&self, painter: &mut Painter, bounds: Rect, values: &dyn PropertySampler);
}

/// Demo descriptor: metadata plus the renderable unit.
pub struct Demo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    pub unit: Box<dyn DemoUnit>,
}

impl Demo {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        unit: Box<dyn DemoUnit>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: BTreeSet::new(),
            unit,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}

/// A named, slugged, ordered group of demos.
pub struct Category {
    pub name: String,
    pub slug: String,
    pub demos: Vec<Demo>,
}

impl Category {
    pub fn new(name: impl Into<String>, slug: impl Into<String>, demos: Vec<Demo>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            demos,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("duplicate category slug: {0}")]
    DuplicateSlug(String),
    #[error("duplicate demo id {id:?} in category {slug:?}")]
    DuplicateDemoId { slug: String, id: String },
}

/// One demo flattened with its category context.
pub struct FlatDemo<'a> {
    pub category_name: &'a str,
    pub category_slug: &'a str,
    pub demo: &'a Demo,
}

/// The full, validated demo catalogue.
pub struct Catalogue {
    categories: Vec<Category>,
}

impl Catalogue {
    /// Validate uniqueness invariants and build the catalogue.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogueError> {
        let mut slugs = HashSet::new();
        for category in &categories {
            if !slugs.insert(category.slug.as_str()) {
                return Err(CatalogueError::DuplicateSlug(category.slug.clone()));
            }
            let mut ids = HashSet::new();
            for demo in &category.demos {
                if !ids.insert(demo.id.as_str()) {
                    return Err(CatalogueError::DuplicateDemoId {
                        slug: category.slug.clone(),
                        id: demo.id.clone(),
                    });
                }
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Keep only the categories whose slug appears in `slugs`.
    pub fn retain_categories(&mut self, slugs: &[String]) {
        self.categories
            .retain(|category| slugs.iter().any(|s| s == &category.slug));
    }

    /// Every demo in catalogue order, stamped with its category.
    pub fn flatten(&self) -> Vec<FlatDemo<'_>> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.demos.iter().map(|demo| FlatDemo {
                    category_name: &category.name,
                    category_slug: &category.slug,
                    demo,
                })
            })
            .collect()
    }

    pub fn demo_count(&self) -> usize {
        self.categories.iter().map(|c| c.demos.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_motion::MotionSpec;

    struct NullUnit;

    impl DemoUnit for NullUnit {
        fn target_count(&self) -> usize {
            1
        }

        fn play(&self) -> Playable {
            Playable::Spec(MotionSpec::new(100.0))
        }

        fn paint(&self, _painter: &mut Painter, _bounds: Rect, _values: &dyn PropertySampler) {}
    }

    fn demo(id: &str) -> Demo {
        Demo::new(id, id.to_uppercase(), "a demo", Box::new(NullUnit))
    }

    #[test]
    fn test_flatten_preserves_order_and_stamps_category() {
        let catalogue = Catalogue::new(vec![
            Category::new("Core transforms", "core-transforms", vec![demo("a"), demo("b")]),
            Category::new("Staggered", "staggered", vec![demo("c")]),
        ])
        .unwrap();

        let flat = catalogue.flatten();
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].demo.id, "a");
        assert_eq!(flat[0].category_slug, "core-transforms");
        assert_eq!(flat[2].demo.id, "c");
        assert_eq!(flat[2].category_name, "Staggered");
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = Catalogue::new(vec![
            Category::new("One", "same", vec![]),
            Category::new("Two", "same", vec![]),
        ]);
        assert!(matches!(result, Err(CatalogueError::DuplicateSlug(_))));
    }

    #[test]
    fn test_duplicate_demo_id_rejected_within_category() {
        let result = Catalogue::new(vec![Category::new(
            "One",
            "one",
            vec![demo("x"), demo("x")],
        )]);
        assert!(matches!(
            result,
            Err(CatalogueError::DuplicateDemoId { .. })
        ));
    }

    #[test]
    fn test_same_demo_id_allowed_across_categories() {
        let result = Catalogue::new(vec![
            Category::new("One", "one", vec![demo("x")]),
            Category::new("Two", "two", vec![demo("x")]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_retain_categories_filters() {
        let mut catalogue = Catalogue::new(vec![
            Category::new("One", "one", vec![demo("a")]),
            Category::new("Two", "two", vec![demo("b")]),
        ])
        .unwrap();
        catalogue.retain_categories(&["two".to_string()]);
        assert_eq!(catalogue.categories().len(), 1);
        assert_eq!(catalogue.categories()[0].slug, "two");
        assert_eq!(catalogue.demo_count(), 1);
    }
}
