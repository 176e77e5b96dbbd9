//! Software rasterizer painting draw commands into an RGBA8 frame buffer.

use std::path::Path;

use rusttype::{point, Font, PositionedGlyph, Scale};
use tracing::debug;

use crate::color::Color;
use crate::error::{GaugeError, Result};
use crate::surface::{DrawCommand, DrawingSurface, Point, Rect, StrokeCap, TextAnchor};

/// Reads a TrueType/OpenType font for caption text.
pub fn load_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path).map_err(|source| GaugeError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| GaugeError::FontParse(path.to_path_buf()))
}

// ============================================================================
// CANVAS
// ============================================================================

/// Immediate-mode surface over a `width * height * 4` byte frame.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    font: Option<&'a Font<'static>>,
}

/// Inclusive pixel bounds clipped to the canvas.
struct PixelBox {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
            font: None,
        }
    }

    pub fn with_font(mut self, font: &'a Font<'static>) -> Self {
        self.font = Some(font);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// RGBA of one pixel, if it lies inside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        self.frame
            .get(idx..idx + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    fn clip(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<PixelBox> {
        if self.width == 0 || self.height == 0 || max_x < 0.0 || max_y < 0.0 {
            return None;
        }
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return None;
        }
        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil() as usize).min(self.width - 1);
        let y1 = (max_y.ceil() as usize).min(self.height - 1);
        (x0 <= x1 && y0 <= y1).then_some(PixelBox { x0, y0, x1, y1 })
    }

    /// Calls `coverage` at every pixel center in the box and blends the result.
    fn shade(&mut self, area: PixelBox, color: Color, coverage: impl Fn(f32, f32) -> f32) {
        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                let aa = coverage(x as f32 + 0.5, y as f32 + 0.5);
                if aa > 0.01 {
                    set_pixel(self.frame, self.width, x, y, color, aa);
                }
            }
        }
    }

    fn stroke_band(&mut self, center: Point, radius: f32, stroke_width: f32, color: Color, arc: Option<(f32, f32)>) {
        if stroke_width <= 0.0 || radius + stroke_width / 2.0 <= 0.0 {
            return;
        }
        let inner = radius - stroke_width / 2.0;
        let outer = radius + stroke_width / 2.0;
        let Some(area) = self.clip(
            center.x - outer - 1.0,
            center.y - outer - 1.0,
            center.x + outer + 1.0,
            center.y + outer + 1.0,
        ) else {
            return;
        };

        self.shade(area, color, |px, py| {
            let dx = px - center.x;
            let dy = py - center.y;
            if let Some((start, sweep)) = arc {
                let rel = (dy.atan2(dx).to_degrees() - start).rem_euclid(360.0);
                if rel > sweep {
                    return 0.0;
                }
            }
            let dist = (dx * dx + dy * dy).sqrt();
            (outer - dist + 0.5).clamp(0.0, 1.0) * (dist - inner + 0.5).clamp(0.0, 1.0)
        });
    }

    fn stroke_arc_band(
        &mut self,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        cap: StrokeCap,
        color: Color,
    ) {
        if sweep_angle == 0.0 || !sweep_angle.is_finite() {
            return;
        }
        let center = oval.center();
        // ellipses are approximated by their mean radius
        let radius = (oval.width() + oval.height()) / 4.0;

        if sweep_angle.abs() >= 360.0 {
            self.stroke_band(center, radius, stroke_width, color, None);
            return;
        }

        let (start, sweep) = if sweep_angle < 0.0 {
            (start_angle + sweep_angle, -sweep_angle)
        } else {
            (start_angle, sweep_angle)
        };
        self.stroke_band(center, radius, stroke_width, color, Some((start, sweep)));

        if cap == StrokeCap::Round {
            for angle in [start, start + sweep] {
                let rad = angle.to_radians();
                let end = Point::new(center.x + rad.cos() * radius, center.y + rad.sin() * radius);
                self.fill_dot(end, stroke_width / 2.0, color);
            }
        }
    }

    fn fill_dot(&mut self, center: Point, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let Some(area) = self.clip(
            center.x - radius - 1.0,
            center.y - radius - 1.0,
            center.x + radius + 1.0,
            center.y + radius + 1.0,
        ) else {
            return;
        };
        self.shade(area, color, |px, py| {
            let dist = ((px - center.x).powi(2) + (py - center.y).powi(2)).sqrt();
            (radius - dist + 0.5).clamp(0.0, 1.0)
        });
    }

    fn fill_rect_area(&mut self, rect: Rect, color: Color) {
        let Some(area) = self.clip(rect.left, rect.top, rect.right, rect.bottom) else {
            return;
        };
        self.shade(area, color, |px, py| {
            let inside = px >= rect.left && px <= rect.right && py >= rect.top && py <= rect.bottom;
            if inside {
                1.0
            } else {
                0.0
            }
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        if thickness <= 0.0 {
            return;
        }
        let pad = thickness.ceil() + 1.0;
        let Some(area) = self.clip(
            from.x.min(to.x) - pad,
            from.y.min(to.y) - pad,
            from.x.max(to.x) + pad,
            from.y.max(to.y) + pad,
        ) else {
            return;
        };
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len_sq = dx * dx + dy * dy;

        self.shade(area, color, |px, py| {
            let t = if len_sq > 0.0 {
                (((px - from.x) * dx + (py - from.y) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let lx = from.x + t * dx;
            let ly = from.y + t * dy;
            let dist = ((lx - px).powi(2) + (ly - py).powi(2)).sqrt();
            1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)
        });
    }

    fn draw_text_run(&mut self, position: Point, text: &str, size: f32, color: Color, anchor: TextAnchor) {
        let Some(font) = self.font else {
            debug!(text, "no font loaded, skipping text");
            return;
        };
        if text.is_empty() || size <= 0.0 {
            return;
        }

        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();
        let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
            (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
            |(min_x, max_x, min_y, max_y), bb| {
                (
                    min_x.min(bb.min.x),
                    max_x.max(bb.max.x),
                    min_y.min(bb.min.y),
                    max_y.max(bb.max.y),
                )
            },
        );
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width_px = max_x - min_x;
        let height_px = max_y - min_y;
        let left = match anchor {
            TextAnchor::Start => position.x.round() as i32,
            TextAnchor::Middle => position.x.round() as i32 - width_px / 2,
            TextAnchor::End => position.x.round() as i32 - width_px,
        };
        let top = position.y.round() as i32 - height_px / 2;

        let (frame_width, frame_height) = (self.width as i32, self.height as i32);
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = left + gx as i32 + bb.min.x - min_x;
                    let py = top + gy as i32 + bb.min.y - min_y;
                    if px >= 0 && px < frame_width && py >= 0 && py < frame_height {
                        set_pixel(self.frame, self.width, px as usize, py as usize, color, v);
                    }
                });
            }
        }
    }
}

impl DrawingSurface for Canvas<'_> {
    fn submit(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear(color) => self.clear(color),
            DrawCommand::Circle {
                center,
                radius,
                stroke_width,
                color,
            } => self.stroke_band(center, radius, stroke_width, color, None),
            DrawCommand::Arc {
                oval,
                start_angle,
                sweep_angle,
                stroke_width,
                cap,
                color,
            } => self.stroke_arc_band(oval, start_angle, sweep_angle, stroke_width, cap, color),
            DrawCommand::Dot {
                center,
                radius,
                color,
            } => self.fill_dot(center, radius, color),
            DrawCommand::Rect { rect, color } => self.fill_rect_area(rect, color),
            DrawCommand::Line {
                from,
                to,
                stroke_width,
                color,
            } => self.draw_line(from, to, stroke_width, color),
            DrawCommand::Text {
                position,
                text,
                size,
                color,
                anchor,
            } => self.draw_text_run(position, &text, size, color, anchor),
        }
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

/// Source-over blend of `color`, weighted by `coverage` and the color's alpha.
fn set_pixel(frame: &mut [u8], width: usize, x: usize, y: usize, color: Color, coverage: f32) {
    let idx = (y * width + x) * 4;
    if x >= width || idx + 4 > frame.len() {
        return;
    }
    let a = (coverage * color.opacity()).clamp(0.0, 1.0);
    if a <= 0.0 {
        return;
    }
    let src = [color.r, color.g, color.b];
    for (dst, src) in frame[idx..idx + 3].iter_mut().zip(src) {
        *dst = (f32::from(src) * a + f32::from(*dst) * (1.0 - a)).round() as u8;
    }
    frame[idx + 3] = 0xff;
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
