//! Gallery application: wires the catalogue, trigger controller, motion
//! runner and rasterizer to the window loop.
//!
//! Each frame: advance playbacks, rebuild the scene, run the lifecycle pass
//! against the regions the scene now contains, rasterize and present. The
//! pointer resolves to a preview region through the display-list hit test,
//! and the trigger controller turns region changes into play actions.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use vitrine_config::VitrineConfig;
use vitrine_core::{
    Brush, Color, DisplayList, FontStore, Painter, Rasterizer, Rect, RegionId, TextRun,
    Transform2D, Viewport, hit_region_at, mounted_regions,
};
use vitrine_gallery::{Card, Catalogue, GridLayout, TriggerConfig, TriggerController};
use vitrine_motion::{MotionRunner, Property};
use vitrine_window::{EventHandler, FramePresenter, WindowCtx};

use crate::demos;

/// Preview regions start here; lower ids are reserved for page chrome.
const REGION_BASE: RegionId = 1000;
/// The sticky header blocks pointer interaction with cards beneath it.
const HEADER_REGION: RegionId = 1;

const HEADER_HEIGHT: f32 = 88.0;
const CONTENT_TOP_GAP: f32 = 32.0;

pub struct GalleryApp {
    config: VitrineConfig,
    catalogue: Catalogue,
    runner: Rc<RefCell<MotionRunner>>,
    trigger: TriggerController,
    raster: Rasterizer,
    grid: GridLayout,
    presenter: Option<FramePresenter>,
    scene: Option<DisplayList>,
    last_frame: Option<Instant>,
    scroll_y: f32,
}

impl GalleryApp {
    pub fn new(config: VitrineConfig) -> Result<Self> {
        let mut catalogue = demos::catalogue()?;
        if !config.gallery.categories.is_empty() {
            catalogue.retain_categories(&config.gallery.categories);
        }
        tracing::info!(
            categories = catalogue.categories().len(),
            demos = catalogue.demo_count(),
            "catalogue ready"
        );

        let fonts = match &config.text.font {
            Some(path) => FontStore::from_file(path).unwrap_or_else(|| {
                tracing::warn!("could not load font {}; falling back", path.display());
                FontStore::discover()
            }),
            None => FontStore::discover(),
        };

        Ok(Self {
            config,
            catalogue,
            runner: Rc::new(RefCell::new(MotionRunner::new())),
            trigger: TriggerController::new(),
            raster: Rasterizer::new(fonts),
            grid: GridLayout::default(),
            presenter: None,
            scene: None,
            last_frame: None,
            scroll_y: 0.0,
        })
    }

    /// Bind every demo's play action to its preview region. Regions are not
    /// mounted yet at this point; auto bindings resolve on the first
    /// lifecycle pass after the scene is built.
    fn bind_demos(&mut self) {
        let mode = if self.config.gallery.autoplay {
            TriggerConfig::auto()
        } else {
            TriggerConfig::hover()
        };
        for (i, flat) in self.catalogue.flatten().iter().enumerate() {
            let region = REGION_BASE + i as RegionId;
            let key = region as u64;
            let playable = flat.demo.unit.play();
            let count = flat.demo.unit.target_count();
            let runner = self.runner.clone();
            self.trigger.bind(
                region,
                move || runner.borrow_mut().start(key, playable.clone(), count),
                mode,
            );
        }
    }

    fn build_scene(&self, size: [u32; 2], scale_factor: f32) -> DisplayList {
        let mut painter = Painter::begin_frame(Viewport {
            width: size[0],
            height: size[1],
        });
        let width = size[0] as f32 / scale_factor;
        let height = size[1] as f32 / scale_factor;
        let fonts = self.raster.fonts();

        painter.push_transform(Transform2D::scale(scale_factor, scale_factor));

        // Page background.
        painter.rect(
            Rect {
                x: 0.0,
                y: 0.0,
                w: width,
                h: height,
            },
            Brush::Solid(Color::rgba(0xf1, 0xf5, 0xf9, 255)),
            0,
        );

        // Card grid, scrolled under the sticky header.
        let flat = self.catalogue.flatten();
        let origin_y = HEADER_HEIGHT + CONTENT_TOP_GAP;
        painter.push_transform(Transform2D::translate(0.0, -self.scroll_y));
        let bounds = self.grid.layout(width, origin_y, flat.len());
        let runner = self.runner.borrow();
        for (i, (flat_demo, card_bounds)) in flat.iter().zip(&bounds).enumerate() {
            let region = REGION_BASE + i as RegionId;
            let key = region as u64;
            let card = Card {
                title: &flat_demo.demo.title,
                description: Some(&flat_demo.demo.description),
                category: Some(flat_demo.category_name),
                category_slug: Some(flat_demo.category_slug),
                preview_region: region,
            };
            let layout = card.paint(&mut painter, fonts, *card_bounds);

            painter.push_clip_rect(layout.preview);
            let sampler = |index: usize, property: Property| runner.value(key, index, property);
            flat_demo.demo.unit.paint(&mut painter, layout.preview, &sampler);
            painter.pop_clip();
        }
        drop(runner);
        painter.pop_transform();

        self.paint_header(&mut painter, fonts, width);
        painter.pop_transform();
        painter.finish()
    }

    fn paint_header(&self, painter: &mut Painter, fonts: &FontStore, width: f32) {
        let band = Rect {
            x: 0.0,
            y: 0.0,
            w: width,
            h: HEADER_HEIGHT,
        };
        painter.rect(band, Brush::Solid(Color::rgba(255, 255, 255, 255)), 30);
        painter.rect(
            Rect {
                x: 0.0,
                y: HEADER_HEIGHT - 1.0,
                w: width,
                h: 1.0,
            },
            Brush::Solid(Color::rgba(0xe5, 0xe7, 0xeb, 255)),
            31,
        );

        let title = &self.config.window.title;
        let title_size = 28.0;
        let title_w = fonts.measure(title, title_size, true);
        painter.text(
            TextRun {
                text: title.clone(),
                pos: [(width - title_w) * 0.5, 18.0],
                size: title_size,
                color: Color::rgba(0x11, 0x18, 0x27, 255),
            },
            32,
        );

        let subtitle = "A collection of smooth, interactive animations";
        let subtitle_size = 14.0;
        let subtitle_w = fonts.measure(subtitle, subtitle_size, false);
        painter.text(
            TextRun {
                text: subtitle.to_string(),
                pos: [(width - subtitle_w) * 0.5, 54.0],
                size: subtitle_size,
                color: Color::rgba(0x6b, 0x72, 0x80, 255),
            },
            32,
        );

        painter.hit_region_rect(HEADER_REGION, band, 90);
    }

    fn content_height(&self, width: f32) -> f32 {
        HEADER_HEIGHT
            + CONTENT_TOP_GAP
            + self.grid.content_height(width, self.catalogue.demo_count())
    }

    fn clamp_scroll(&mut self, viewport_height: f32, width: f32) {
        let max = (self.content_height(width) - viewport_height).max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, max);
    }
}

impl EventHandler for GalleryApp {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        self.presenter = Some(FramePresenter::new(
            ctx.device(),
            ctx.surface_config().format,
        ));
        self.bind_demos();
        ctx.request_redraw();
        Ok(())
    }

    fn on_cursor_move(&mut self, _ctx: &mut WindowCtx, pos: [f32; 2]) -> Result<()> {
        if let Some(scene) = &self.scene {
            let region = hit_region_at(scene, pos);
            // Chrome regions exist only to shadow the cards beneath them.
            let region = region.filter(|id| *id >= REGION_BASE);
            self.trigger.pointer_at(region);
        }
        Ok(())
    }

    fn on_cursor_left(&mut self, _ctx: &mut WindowCtx) -> Result<()> {
        self.trigger.pointer_left();
        Ok(())
    }

    fn on_scroll(&mut self, ctx: &mut WindowCtx, dy: f32) -> Result<()> {
        let sf = ctx.scale_factor() as f32;
        self.scroll_y -= dy / sf.max(0.01);
        let size = ctx.size();
        self.clamp_scroll(size.height as f32 / sf, size.width as f32 / sf);
        Ok(())
    }

    fn on_redraw(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        let size = ctx.size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let dt_ms = match self.last_frame {
            Some(prev) => now.duration_since(prev).as_secs_f32() * 1000.0,
            None => 0.0,
        };
        self.last_frame = Some(now);
        self.runner.borrow_mut().update(dt_ms);

        let sf = ctx.scale_factor() as f32;
        self.clamp_scroll(size.height as f32 / sf, size.width as f32 / sf);
        let scene = self.build_scene([size.width, size.height], sf);

        // Lifecycle pass: deferred auto triggers resolve against this scene.
        self.trigger.sync_mounted(&mounted_regions(&scene));

        let frame = self
            .raster
            .render(&scene, Color::rgba(0xf1, 0xf5, 0xf9, 255))?;
        self.scene = Some(scene);

        let Some(presenter) = &mut self.presenter else {
            return Ok(());
        };
        let surface_tex = match ctx.acquire_current_frame() {
            Ok(tex) => tex,
            Err(err) => {
                tracing::debug!("skipping frame: {err}");
                return Ok(());
            }
        };
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        presenter.present(ctx.device(), ctx.queue(), &view, &frame);
        surface_tex.present();
        Ok(())
    }
}
