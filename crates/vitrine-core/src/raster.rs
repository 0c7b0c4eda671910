//! Software rasterizer: display list → premultiplied RGBA frame.
//!
//! Drawables are sorted by (z, insertion order) before painting so layering
//! matches the hit-test rules. Shape filling and stroking (including dash
//! patterns) are delegated to tiny-skia; text is composited from fontdue
//! coverage masks.

use thiserror::Error;
use tiny_skia::{
    FillRule as SkFillRule, GradientStop, LineCap, LineJoin, LinearGradient, Mask, Paint,
    PathBuilder, Pixmap, Point, SpreadMode, StrokeDash, Transform,
};

use crate::display_list::{Command, DisplayList};
use crate::scene::{
    Brush, ClipRect, Color, FillRule, Path, PathCmd, Rect, RoundedRect, Stroke, TextRun,
    Transform2D,
};
use crate::text::FontStore;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("viewport {width}x{height} cannot be rasterized")]
    InvalidViewport { width: u32, height: u32 },
}

/// A finished CPU frame: tightly packed premultiplied RGBA, row-major.
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub struct Rasterizer {
    fonts: FontStore,
}

// Control-point factor approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_75;

impl Rasterizer {
    pub fn new(fonts: FontStore) -> Self {
        Self { fonts }
    }

    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    /// Rasterize a display list over the given clear color.
    pub fn render(&self, list: &DisplayList, clear: Color) -> Result<Frame, RasterError> {
        let (width, height) = (list.viewport.width, list.viewport.height);
        let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::InvalidViewport {
            width,
            height,
        })?;
        let [r, g, b, a] = clear.to_srgba_u8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

        // Walk the list once to snapshot the clip stack per drawable, then
        // paint in (z, order) sequence.
        struct DrawItem<'a> {
            z: i32,
            order: usize,
            cmd: &'a Command,
            clips: Vec<(Rect, Transform2D)>,
        }

        let mut items: Vec<DrawItem> = Vec::new();
        let mut clips: Vec<(Rect, Transform2D)> = Vec::new();
        let mut tstack: Vec<Transform2D> = vec![Transform2D::identity()];

        for (order, cmd) in list.commands.iter().enumerate() {
            match cmd {
                Command::PushClip(ClipRect(rect)) => {
                    let t = tstack.last().copied().unwrap_or(Transform2D::identity());
                    clips.push((*rect, t));
                }
                Command::PopClip => {
                    let _ = clips.pop();
                }
                Command::PushTransform(t) => tstack.push(*t),
                Command::PopTransform => {
                    if tstack.len() > 1 {
                        let _ = tstack.pop();
                    }
                }
                Command::HitRegionRect { .. } => {}
                Command::DrawRect { z, .. }
                | Command::DrawRoundedRect { z, .. }
                | Command::StrokeRoundedRect { z, .. }
                | Command::DrawEllipse { z, .. }
                | Command::FillPath { z, .. }
                | Command::StrokePath { z, .. }
                | Command::DrawText { z, .. } => {
                    items.push(DrawItem {
                        z: *z,
                        order,
                        cmd,
                        clips: clips.clone(),
                    });
                }
            }
        }
        items.sort_by_key(|item| (item.z, item.order));

        // Consecutive items usually share a clip stack; rebuild the mask only
        // when it actually changes.
        let mut mask_cache: Option<(Vec<(Rect, Transform2D)>, Option<Mask>)> = None;
        for item in &items {
            let fresh = !matches!(&mask_cache, Some((clips, _)) if *clips == item.clips);
            if fresh {
                let mask = self.build_mask(width, height, &item.clips);
                mask_cache = Some((item.clips.clone(), mask));
            }
            let mask = mask_cache.as_ref().and_then(|(_, m)| m.as_ref());
            self.draw(&mut pixmap, item.cmd, mask);
        }

        Ok(Frame {
            width,
            height,
            rgba: pixmap.take(),
        })
    }

    fn build_mask(&self, width: u32, height: u32, clips: &[(Rect, Transform2D)]) -> Option<Mask> {
        if clips.is_empty() {
            return None;
        }
        let mut mask = Mask::new(width, height)?;
        for (i, (rect, t)) in clips.iter().enumerate() {
            let path = rect_path(*rect)?;
            let transform = to_sk_transform(*t);
            if i == 0 {
                mask.fill_path(&path, SkFillRule::Winding, true, transform);
            } else {
                mask.intersect_path(&path, SkFillRule::Winding, true, transform);
            }
        }
        Some(mask)
    }

    fn draw(&self, pixmap: &mut Pixmap, cmd: &Command, mask: Option<&Mask>) {
        match cmd {
            Command::DrawRect { rect, brush, transform, .. } => {
                if let Some(path) = rect_path(*rect) {
                    fill(pixmap, &path, brush, SkFillRule::Winding, *transform, mask);
                }
            }
            Command::DrawRoundedRect { rrect, brush, transform, .. } => {
                if let Some(path) = rrect_path(*rrect) {
                    fill(pixmap, &path, brush, SkFillRule::Winding, *transform, mask);
                }
            }
            Command::StrokeRoundedRect { rrect, stroke, brush, transform, .. } => {
                if let Some(path) = rrect_path(*rrect) {
                    stroke_path_with(pixmap, &path, stroke, brush, *transform, mask);
                }
            }
            Command::DrawEllipse { center, radii, brush, transform, .. } => {
                let bounds = tiny_skia::Rect::from_xywh(
                    center[0] - radii[0],
                    center[1] - radii[1],
                    radii[0] * 2.0,
                    radii[1] * 2.0,
                );
                if let Some(bounds) = bounds {
                    if let Some(path) = PathBuilder::from_oval(bounds) {
                        fill(pixmap, &path, brush, SkFillRule::Winding, *transform, mask);
                    }
                }
            }
            Command::FillPath { path, color, transform, .. } => {
                if let Some(sk) = to_sk_path(path) {
                    let rule = SkFillRule::from(&path.fill_rule);
                    fill(pixmap, &sk, &Brush::Solid(*color), rule, *transform, mask);
                }
            }
            Command::StrokePath { path, stroke, color, transform, .. } => {
                if let Some(sk) = to_sk_path(path) {
                    stroke_path_with(pixmap, &sk, stroke, &Brush::Solid(*color), *transform, mask);
                }
            }
            Command::DrawText { run, transform, .. } => {
                self.draw_text(pixmap, run, *transform, mask);
            }
            _ => {}
        }
    }

    /// Composite fontdue coverage masks glyph by glyph. Plain advance-based
    /// placement; the gallery never draws long or shaped text.
    fn draw_text(&self, pixmap: &mut Pixmap, run: &TextRun, transform: Transform2D, mask: Option<&Mask>) {
        let bold = run.size >= 15.0;
        let Some(font) = self.fonts.font(bold) else {
            return;
        };

        let origin = transform.apply(run.pos);
        let baseline = match font.horizontal_line_metrics(run.size) {
            Some(lm) => origin[1] + lm.ascent,
            None => origin[1] + run.size,
        };
        let color = run.color.to_srgba_u8();
        let width = pixmap.width() as i32;
        let height = pixmap.height() as i32;

        let mut pen_x = origin[0];
        for c in run.text.chars() {
            let (metrics, coverage) = font.rasterize(c, run.size);
            let gx = (pen_x + metrics.xmin as f32).round() as i32;
            let gy = (baseline - metrics.height as f32 - metrics.ymin as f32).round() as i32;

            let data = pixmap.data_mut();
            for row in 0..metrics.height {
                let py = gy + row as i32;
                if py < 0 || py >= height {
                    continue;
                }
                for col in 0..metrics.width {
                    let px = gx + col as i32;
                    if px < 0 || px >= width {
                        continue;
                    }
                    let cov = coverage[row * metrics.width + col] as f32 / 255.0;
                    if cov <= 0.0 {
                        continue;
                    }
                    let cov = match mask {
                        Some(m) => {
                            let mcov = mask_coverage(m, px as u32, py as u32);
                            cov * mcov
                        }
                        None => cov,
                    };
                    if cov <= 0.0 {
                        continue;
                    }
                    let alpha = cov * (color[3] as f32 / 255.0);
                    let idx = ((py * width + px) * 4) as usize;
                    // Source-over in premultiplied space.
                    for ch in 0..3 {
                        let src = color[ch] as f32 * alpha;
                        let dst = data[idx + ch] as f32;
                        data[idx + ch] = (src + dst * (1.0 - alpha)).min(255.0) as u8;
                    }
                    let dst_a = data[idx + 3] as f32;
                    data[idx + 3] = (alpha * 255.0 + dst_a * (1.0 - alpha)).min(255.0) as u8;
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}

fn mask_coverage(mask: &Mask, x: u32, y: u32) -> f32 {
    let idx = (y * mask.width() + x) as usize;
    mask.data().get(idx).map(|v| *v as f32 / 255.0).unwrap_or(0.0)
}

fn to_sk_transform(t: Transform2D) -> Transform {
    let [a, b, c, d, e, f] = t.m;
    Transform::from_row(a, b, c, d, e, f)
}

fn sk_color(c: Color) -> tiny_skia::Color {
    let [r, g, b, a] = c.to_srgba_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn paint_for<'a>(brush: &Brush, transform: Transform2D) -> Paint<'a> {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    match brush {
        Brush::Solid(color) => paint.set_color(sk_color(*color)),
        Brush::LinearGradient { start, end, stops } => {
            let sk_stops: Vec<GradientStop> = stops
                .iter()
                .map(|(pos, color)| GradientStop::new(*pos, sk_color(*color)))
                .collect();
            if let Some(shader) = LinearGradient::new(
                Point::from_xy(start[0], start[1]),
                Point::from_xy(end[0], end[1]),
                sk_stops,
                SpreadMode::Pad,
                to_sk_transform(transform),
            ) {
                paint.shader = shader;
            }
        }
    }
    paint
}

fn fill(
    pixmap: &mut Pixmap,
    path: &tiny_skia::Path,
    brush: &Brush,
    rule: SkFillRule,
    t: Transform2D,
    mask: Option<&Mask>,
) {
    let paint = paint_for(brush, t);
    pixmap.fill_path(path, &paint, rule, to_sk_transform(t), mask);
}

fn stroke_path_with(
    pixmap: &mut Pixmap,
    path: &tiny_skia::Path,
    stroke: &Stroke,
    brush: &Brush,
    t: Transform2D,
    mask: Option<&Mask>,
) {
    let paint = paint_for(brush, t);
    let mut sk_stroke = tiny_skia::Stroke {
        width: stroke.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..tiny_skia::Stroke::default()
    };
    if let Some(dash) = &stroke.dash {
        sk_stroke.dash = StrokeDash::new(dash.array.clone(), dash.offset);
    }
    pixmap.stroke_path(path, &paint, &sk_stroke, to_sk_transform(t), mask);
}

fn rect_path(rect: Rect) -> Option<tiny_skia::Path> {
    let r = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h)?;
    Some(PathBuilder::from_rect(r))
}

fn rrect_path(rrect: RoundedRect) -> Option<tiny_skia::Path> {
    let Rect { x, y, w, h } = rrect.rect;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let max_r = (w.min(h)) * 0.5;
    let tl = rrect.radii.tl.clamp(0.0, max_r);
    let tr = rrect.radii.tr.clamp(0.0, max_r);
    let br = rrect.radii.br.clamp(0.0, max_r);
    let bl = rrect.radii.bl.clamp(0.0, max_r);

    let mut pb = PathBuilder::new();
    pb.move_to(x + tl, y);
    pb.line_to(x + w - tr, y);
    pb.cubic_to(
        x + w - tr + tr * KAPPA,
        y,
        x + w,
        y + tr - tr * KAPPA,
        x + w,
        y + tr,
    );
    pb.line_to(x + w, y + h - br);
    pb.cubic_to(
        x + w,
        y + h - br + br * KAPPA,
        x + w - br + br * KAPPA,
        y + h,
        x + w - br,
        y + h,
    );
    pb.line_to(x + bl, y + h);
    pb.cubic_to(
        x + bl - bl * KAPPA,
        y + h,
        x,
        y + h - bl + bl * KAPPA,
        x,
        y + h - bl,
    );
    pb.line_to(x, y + tl);
    pb.cubic_to(x, y + tl - tl * KAPPA, x + tl - tl * KAPPA, y, x + tl, y);
    pb.close();
    pb.finish()
}

fn to_sk_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for cmd in &path.cmds {
        match cmd {
            PathCmd::MoveTo(p) => pb.move_to(p[0], p[1]),
            PathCmd::LineTo(p) => pb.line_to(p[0], p[1]),
            PathCmd::QuadTo(c, p) => pb.quad_to(c[0], c[1], p[0], p[1]),
            PathCmd::CubicTo(c1, c2, p) => pb.cubic_to(c1[0], c1[1], c2[0], c2[1], p[0], p[1]),
            PathCmd::Close => pb.close(),
        }
    }
    pb.finish()
}

impl From<&FillRule> for SkFillRule {
    fn from(rule: &FillRule) -> Self {
        match rule {
            FillRule::NonZero => SkFillRule::Winding,
            FillRule::EvenOdd => SkFillRule::EvenOdd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::Viewport;
    use crate::painter::Painter;

    fn render_list(list: &DisplayList) -> Frame {
        let raster = Rasterizer::new(FontStore::empty());
        raster
            .render(list, Color::rgba(0, 0, 0, 255))
            .expect("render")
    }

    fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * frame.width + x) * 4) as usize;
        [
            frame.rgba[idx],
            frame.rgba[idx + 1],
            frame.rgba[idx + 2],
            frame.rgba[idx + 3],
        ]
    }

    #[test]
    fn test_zero_viewport_is_an_error() {
        let raster = Rasterizer::new(FontStore::empty());
        let list = DisplayList {
            viewport: Viewport {
                width: 0,
                height: 0,
            },
            commands: Vec::new(),
        };
        assert!(raster.render(&list, Color::TRANSPARENT).is_err());
    }

    #[test]
    fn test_rect_fill_covers_pixels() {
        let mut p = Painter::begin_frame(Viewport {
            width: 32,
            height: 32,
        });
        p.rect(
            Rect {
                x: 8.0,
                y: 8.0,
                w: 16.0,
                h: 16.0,
            },
            Brush::Solid(Color::rgba(255, 0, 0, 255)),
            0,
        );
        let frame = render_list(&p.finish());

        let inside = pixel(&frame, 16, 16);
        assert!(inside[0] > 200 && inside[1] < 50);
        let outside = pixel(&frame, 2, 2);
        assert_eq!(outside[0], 0);
    }

    #[test]
    fn test_higher_z_draws_on_top() {
        let mut p = Painter::begin_frame(Viewport {
            width: 16,
            height: 16,
        });
        let full = Rect {
            x: 0.0,
            y: 0.0,
            w: 16.0,
            h: 16.0,
        };
        // Recorded green-over-red, but z says red wins.
        p.rect(full, Brush::Solid(Color::rgba(255, 0, 0, 255)), 5);
        p.rect(full, Brush::Solid(Color::rgba(0, 255, 0, 255)), 1);
        let frame = render_list(&p.finish());
        let px = pixel(&frame, 8, 8);
        assert!(px[0] > 200 && px[1] < 50);
    }

    #[test]
    fn test_clip_masks_fill() {
        let mut p = Painter::begin_frame(Viewport {
            width: 32,
            height: 32,
        });
        p.push_clip_rect(Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 32.0,
        });
        p.rect(
            Rect {
                x: 0.0,
                y: 0.0,
                w: 32.0,
                h: 32.0,
            },
            Brush::Solid(Color::rgba(0, 0, 255, 255)),
            0,
        );
        p.pop_clip();
        let frame = render_list(&p.finish());

        assert!(pixel(&frame, 4, 16)[2] > 200);
        assert_eq!(pixel(&frame, 20, 16)[2], 0);
    }
}
