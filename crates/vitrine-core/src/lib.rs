//! vitrine-core: CPU-side 2D scene core for the gallery.
//!
//! Provides the scene primitives (rects, rounded rects, paths, text runs),
//! a display list plus painter for recording a frame, hit-region lookup for
//! pointer interaction, and a software rasterizer that turns a display list
//! into an RGBA frame ready for presentation.

mod color;
mod display_list;
mod hit_test;
mod painter;
mod raster;
mod scene;
mod text;

pub use display_list::{Command, DisplayList, Viewport};
pub use hit_test::{RegionId, hit_region_at, mounted_regions};
pub use painter::Painter;
pub use raster::{Frame, RasterError, Rasterizer};
pub use scene::*;
pub use text::FontStore;
