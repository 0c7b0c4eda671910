//! vitrine-gallery: the demo catalogue, the trigger controller and the
//! presentation card.
//!
//! A catalogue groups demos into categories; each demo pairs metadata with a
//! renderable unit. The trigger controller decides when a demo's play action
//! runs (once on activation, or on every pointer-enter). The presentation
//! card is the styled shell around each demo's preview region.

mod card;
mod catalog;
mod layout;
mod trigger;

pub use card::{BadgeColors, Card, CardLayout, badge_colors, display_label};
pub use catalog::{Catalogue, CatalogueError, Category, Demo, DemoUnit, FlatDemo, PropertySampler};
pub use layout::GridLayout;
pub use trigger::{TriggerConfig, TriggerController};
