//! Cell drawing surface for background animations.
//!
//! Generators draw shapes in fractional cell coordinates; the surface
//! accumulates light per cell and presents the result as styled spans.
//! Shape cells render as shade characters graded by intensity, glyph cells
//! render their glyph. Everything clips at the edges, so generators are free
//! to draw at stale or out-of-range positions.

use haikei_core::{Rgb, Viewport};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::chars::SHADE_CHARS;

/// Cells dimmer than this present as blank.
const BLANK_THRESHOLD: f32 = 0.03;
/// Cells faded below this lose their glyph and residual light.
const FADE_FLOOR: f32 = 0.02;

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    /// Accumulated light per channel, premultiplied by opacity, 0..1.
    r: f32,
    g: f32,
    b: f32,
    /// Explicit glyph, taking precedence over the shade ramp.
    glyph: Option<char>,
}

impl Cell {
    fn intensity(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }
}

/// A cell buffer with 2D drawing primitives.
#[derive(Debug)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            cells: vec![Cell::default(); viewport.width as usize * viewport.height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match the buffer to new dimensions. Reallocates and clears when the
    /// size actually changed, like a canvas whose backing store is resized.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width != self.width || viewport.height != self.height {
            *self = Self::new(viewport);
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Multiply every cell's light by `keep`, producing the afterimage
    /// trail effect. Cells that fade out entirely also lose their glyph.
    pub fn fade(&mut self, keep: f32) {
        for cell in &mut self.cells {
            cell.r *= keep;
            cell.g *= keep;
            cell.b *= keep;
            if cell.intensity() < FADE_FLOOR {
                *cell = Cell::default();
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Add `color` light at `alpha` opacity to one cell, saturating at full
    /// brightness. Out-of-range coordinates are ignored.
    fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let cell = &mut self.cells[idx];
        cell.r = (cell.r + f32::from(color.r) / 255.0 * alpha).min(1.0);
        cell.g = (cell.g + f32::from(color.g) / 255.0 * alpha).min(1.0);
        cell.b = (cell.b + f32::from(color.b) / 255.0 * alpha).min(1.0);
    }

    /// Fill an axis-aligned rectangle given in fractional cell coordinates.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x0 = (x.floor() as i32).max(0);
        let y0 = (y.floor() as i32).max(0);
        let x1 = ((x + w).ceil() as i32).min(i32::from(self.width));
        let y1 = ((y + h).ceil() as i32).min(i32::from(self.height));
        for cy in y0..y1 {
            for cx in x0..x1 {
                self.blend(cx, cy, color, alpha);
            }
        }
    }

    /// Fill a disk with a soft one-cell edge falloff.
    pub fn disk(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32) {
        let r = radius.max(0.4);
        let x0 = ((cx - r).floor() as i32).max(0);
        let y0 = ((cy - r).floor() as i32).max(0);
        let x1 = ((cx + r).ceil() as i32).min(i32::from(self.width).saturating_sub(1));
        let y1 = ((cy + r).ceil() as i32).min(i32::from(self.height).saturating_sub(1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let cover = (r + 0.5 - dist).clamp(0.0, 1.0);
                if cover > 0.0 {
                    self.blend(x, y, color, alpha * cover);
                }
            }
        }
    }

    /// Draw a straight line between two fractional points.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb, alpha: f32) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil() as i32;
        if steps == 0 {
            self.blend(x0.round() as i32, y0.round() as i32, color, alpha);
            return;
        }
        let mut last = (i32::MIN, i32::MIN);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let cx = (x0 + dx * t).round() as i32;
            let cy = (y0 + dy * t).round() as i32;
            if (cx, cy) != last {
                self.blend(cx, cy, color, alpha);
                last = (cx, cy);
            }
        }
    }

    /// Place a glyph at a cell, blending its color like a shape draw.
    pub fn glyph(&mut self, col: i32, row: i32, ch: char, color: Rgb, alpha: f32) {
        if let Some(idx) = self.index(col, row) {
            self.blend(col, row, color, alpha);
            self.cells[idx].glyph = Some(ch);
        }
    }

    /// Peak channel intensity of a cell, 0.0 when out of range.
    pub fn intensity_at(&self, x: u16, y: u16) -> f32 {
        self.index(i32::from(x), i32::from(y))
            .map(|idx| self.cells[idx].intensity())
            .unwrap_or(0.0)
    }

    /// The glyph at a cell, if one was placed and has not faded out.
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        self.index(i32::from(x), i32::from(y))
            .and_then(|idx| self.cells[idx].glyph)
    }

    /// Brightest cell on the whole surface.
    pub fn max_intensity(&self) -> f32 {
        self.cells
            .iter()
            .map(Cell::intensity)
            .fold(0.0, f32::max)
    }

    /// Present the surface as one styled line per row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|y| {
                let spans: Vec<Span> = (0..self.width).map(|x| self.render_cell(x, y)).collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_cell(&self, x: u16, y: u16) -> Span<'static> {
        let idx = y as usize * self.width as usize + x as usize;
        let cell = &self.cells[idx];
        let intensity = cell.intensity();
        if intensity < BLANK_THRESHOLD {
            return Span::raw(" ");
        }

        let ch = match cell.glyph {
            Some(ch) => ch,
            None => {
                let ramp = if intensity < 0.12 {
                    0
                } else if intensity < 0.30 {
                    1
                } else if intensity < 0.55 {
                    2
                } else if intensity < 0.80 {
                    3
                } else {
                    4
                };
                SHADE_CHARS[ramp]
            }
        };

        let color = Color::Rgb(
            (cell.r * 255.0) as u8,
            (cell.g * 255.0) as u8,
            (cell.b * 255.0) as u8,
        );
        Span::styled(ch.to_string(), Style::new().fg(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn surface(w: u16, h: u16) -> Surface {
        Surface::new(Viewport::new(w, h))
    }

    #[test]
    fn starts_blank() {
        let s = surface(10, 4);
        assert_eq!(s.max_intensity(), 0.0);
        assert_eq!(s.to_lines().len(), 4);
    }

    #[test]
    fn fill_rect_lights_cells() {
        let mut s = surface(10, 4);
        s.fill_rect(1.0, 1.0, 3.0, 1.0, RED, 0.5);
        assert!(s.intensity_at(1, 1) > 0.0);
        assert!(s.intensity_at(3, 1) > 0.0);
        assert_eq!(s.intensity_at(4, 1), 0.0);
        assert_eq!(s.intensity_at(1, 2), 0.0);
    }

    #[test]
    fn blending_saturates() {
        let mut s = surface(2, 1);
        for _ in 0..50 {
            s.fill_rect(0.0, 0.0, 1.0, 1.0, RED, 0.9);
        }
        assert!(s.intensity_at(0, 0) <= 1.0);
    }

    #[test]
    fn out_of_range_draws_are_clipped() {
        let mut s = surface(4, 4);
        s.fill_rect(-2.0, -2.0, 5.0, 5.0, RED, 1.0);
        s.disk(100.0, 100.0, 3.0, RED, 1.0);
        s.line(-5.0, 2.0, 50.0, 2.0, RED, 0.5);
        s.glyph(-1, 0, 'x', RED, 1.0);
        s.glyph(9, 9, 'x', RED, 1.0);
        // the clipped portions landed, the rest silently dropped
        assert!(s.intensity_at(0, 0) > 0.0);
        assert!(s.intensity_at(3, 2) > 0.0);
        assert_eq!(s.glyph_at(0, 0), None);
    }

    #[test]
    fn zero_sized_surface_accepts_draws() {
        let mut s = surface(0, 0);
        s.clear();
        s.fade(0.9);
        s.fill_rect(0.0, 0.0, 5.0, 5.0, RED, 1.0);
        s.disk(1.0, 1.0, 2.0, RED, 1.0);
        s.line(0.0, 0.0, 3.0, 3.0, RED, 1.0);
        s.glyph(0, 0, 'x', RED, 1.0);
        assert!(s.to_lines().is_empty());
    }

    #[test]
    fn fade_decays_and_eventually_clears() {
        let mut s = surface(3, 1);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, RED, 0.8);
        let before = s.intensity_at(0, 0);
        s.fade(0.5);
        let after = s.intensity_at(0, 0);
        assert!(after < before);
        for _ in 0..20 {
            s.fade(0.5);
        }
        assert_eq!(s.intensity_at(0, 0), 0.0);
    }

    #[test]
    fn fade_drops_glyphs_with_their_light() {
        let mut s = surface(3, 1);
        s.glyph(1, 0, 'ア', RED, 0.8);
        assert_eq!(s.glyph_at(1, 0), Some('ア'));
        for _ in 0..20 {
            s.fade(0.5);
        }
        assert_eq!(s.glyph_at(1, 0), None);
    }

    #[test]
    fn line_covers_endpoints() {
        let mut s = surface(10, 10);
        s.line(1.0, 1.0, 8.0, 6.0, RED, 0.7);
        assert!(s.intensity_at(1, 1) > 0.0);
        assert!(s.intensity_at(8, 6) > 0.0);
    }

    #[test]
    fn glyph_takes_precedence_over_shade_ramp() {
        let mut s = surface(2, 1);
        s.glyph(0, 0, 'ツ', RED, 0.9);
        s.fill_rect(1.0, 0.0, 1.0, 1.0, RED, 0.9);
        let lines = s.to_lines();
        let row: Vec<String> = lines[0].spans.iter().map(|sp| sp.content.to_string()).collect();
        assert_eq!(row[0], "ツ");
        assert_ne!(row[1], " ");
        assert_ne!(row[1], "ツ");
    }

    #[test]
    fn faint_light_presents_as_blank() {
        let mut s = surface(2, 1);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, RED, 0.01);
        let lines = s.to_lines();
        assert_eq!(lines[0].spans[0].content, " ");
    }

    #[test]
    fn resize_reallocates_only_on_change() {
        let mut s = surface(4, 4);
        s.fill_rect(0.0, 0.0, 4.0, 4.0, RED, 1.0);
        s.resize(Viewport::new(4, 4));
        assert!(s.intensity_at(0, 0) > 0.0);
        s.resize(Viewport::new(8, 2));
        assert_eq!(s.width(), 8);
        assert_eq!(s.height(), 2);
        assert_eq!(s.max_intensity(), 0.0);
    }
}
