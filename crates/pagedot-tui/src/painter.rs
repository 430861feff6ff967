//! Half-block rasterizer for indicator surfaces
//!
//! Each terminal cell holds two vertical sub-pixels drawn with '▀' (foreground
//! is the upper pixel, background the lower). One sub-pixel covers `scale`
//! surface units in both directions.

use pagedot_core::{Canvas, Point, RectF, Rgba, Size};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::theme::to_color;

#[derive(Debug, Clone)]
pub struct HalfBlockPainter {
    /// Width in cells (= sub-pixels)
    width: u16,
    /// Height in cells (sub-pixels / 2)
    height: u16,
    scale: f32,
    pixels: Vec<Option<Color>>,
}

impl HalfBlockPainter {
    pub fn new(width: u16, height: u16, scale: f32) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        Self {
            width,
            height,
            scale,
            pixels: vec![None; width as usize * height as usize * 2],
        }
    }

    /// Painter just large enough for a measured surface
    pub fn for_surface(size: Size, scale: f32) -> Self {
        let (width, height) = cells_for(size, scale);
        Self::new(width, height, scale)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    fn pixel_rows(&self) -> usize {
        self.height as usize * 2
    }

    /// Color of a sub-pixel, if anything was painted there
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width as usize || y >= self.pixel_rows() {
            return None;
        }
        self.pixels[y * self.width as usize + x]
    }

    /// Surface coordinate at the center of sub-pixel (x, y)
    fn sample_point(&self, x: usize, y: usize) -> Point {
        Point::new((x as f32 + 0.5) * self.scale, (y as f32 + 0.5) * self.scale)
    }

    /// Sub-pixel range covering [from, to] in surface units
    fn span(&self, from: f32, to: f32, limit: usize) -> std::ops::Range<usize> {
        let start = (from / self.scale).floor().max(0.0) as usize;
        let end = ((to / self.scale).ceil().max(0.0) as usize).min(limit);
        start.min(end)..end
    }

    fn fill_where(&mut self, bounds: RectF, color: Rgba, inside: impl Fn(Point) -> bool) {
        let Some(color) = to_color(color) else {
            return;
        };
        let width = self.width as usize;
        let xs = self.span(bounds.left, bounds.right, width);
        let ys = self.span(bounds.top, bounds.bottom, self.pixel_rows());
        for y in ys {
            for x in xs.clone() {
                if inside(self.sample_point(x, y)) {
                    self.pixels[y * width + x] = Some(color);
                }
            }
        }
    }

    /// Copy the painted cells into `buf`, anchored at the top-left of `area`.
    ///
    /// Cells with nothing painted keep whatever is already in the buffer.
    pub fn flush(&self, area: Rect, buf: &mut Buffer) {
        let cols = self.width.min(area.width);
        let rows = self.height.min(area.height);
        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col as usize, row as usize * 2);
                let bottom = self.pixel(col as usize, row as usize * 2 + 1);
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match (top, bottom) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                    }
                    (Some(top), None) => {
                        cell.set_symbol("▀").set_fg(top);
                    }
                    (None, Some(bottom)) => {
                        cell.set_symbol("▄").set_fg(bottom);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

/// Terminal cells needed to show a surface of `size` units
pub fn cells_for(size: Size, scale: f32) -> (u16, u16) {
    let scale = if scale > 0.0 { scale } else { 1.0 };
    let width = (size.width as f32 / scale).ceil();
    let height = (size.height as f32 / scale / 2.0).ceil();
    (
        width.min(u16::MAX as f32) as u16,
        height.min(u16::MAX as f32) as u16,
    )
}

impl Canvas for HalfBlockPainter {
    fn fill_round_rect(&mut self, rect: RectF, corner_radius: f32, color: Rgba) {
        let radius = corner_radius
            .min(rect.width() / 2.0)
            .min(rect.height() / 2.0)
            .max(0.0);
        self.fill_where(rect, color, |p| {
            if p.x < rect.left || p.x > rect.right || p.y < rect.top || p.y > rect.bottom {
                return false;
            }
            // Distance into the corner circle, zero along the straight edges
            let dx = (rect.left + radius - p.x).max(p.x - (rect.right - radius)).max(0.0);
            let dy = (rect.top + radius - p.y).max(p.y - (rect.bottom - radius)).max(0.0);
            dx * dx + dy * dy <= radius * radius
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let bounds = RectF::from_center(center, radius * 2.0, radius * 2.0);
        self.fill_where(bounds, color, |p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            dx * dx + dy * dy <= radius * radius
        });
    }
}
