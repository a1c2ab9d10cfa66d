//! Pulsing hexagon grid animation.
//!
//! The only state is the elapsed-time accumulator; the lattice itself is
//! recomputed from the current viewport every frame, so resizes take effect
//! on the very next frame.

use std::f32::consts::PI;

use haikei_core::{AnimationSpeed, Rgb, Viewport};

use crate::animations::Generator;
use crate::surface::Surface;

/// Horizontal hex radius in cells. The vertical radius is squashed to
/// compensate for the cell aspect ratio.
const RADIUS_X: f32 = 4.6;
const RADIUS_Y: f32 = 2.4;
const TIME_STEP: f32 = 0.02;
const BASE_ALPHA: f32 = 0.06;
const PULSE_ALPHA: f32 = 0.30;

/// Pulsing hexagonal lattice.
pub struct HexagonGrid {
    accent: Rgb,
    time: f32,
}

impl HexagonGrid {
    pub fn new(accent: Rgb) -> Self {
        Self { accent, time: 0.0 }
    }
}

impl Generator for HexagonGrid {
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed) {
        surface.clear();
        self.time += TIME_STEP * speed.pulse_scale();
        if viewport.is_empty() {
            return;
        }

        let hex_w = RADIUS_X * 3f32.sqrt();
        let hex_h = RADIUS_Y * 1.5;
        let cols = (viewport.fw() / hex_w).ceil() as i32 + 1;
        let rows = (viewport.fh() / hex_h).ceil() as i32 + 1;

        for row in 0..rows {
            for col in 0..cols {
                // Odd rows shift half a step, giving the honeycomb offset.
                let cx = col as f32 * hex_w + if row % 2 == 1 { hex_w / 2.0 } else { 0.0 };
                let cy = row as f32 * hex_h;
                let pulse =
                    (self.time * 2.0 + col as f32 * 0.3 + row as f32 * 0.5).sin() * 0.5 + 0.5;
                let alpha = BASE_ALPHA + pulse * PULSE_ALPHA;

                let vertex = |s: i32| {
                    let angle = PI / 3.0 * s as f32 - PI / 6.0;
                    (
                        cx + RADIUS_X * 0.8 * angle.cos(),
                        cy + RADIUS_Y * 0.8 * angle.sin(),
                    )
                };
                let mut prev = vertex(5);
                for s in 0..6 {
                    let next = vertex(s);
                    surface.line(prev.0, prev.1, next.0, next.1, self.accent, alpha);
                    prev = next;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgb = Rgb::new(0, 217, 255);

    #[test]
    fn lattice_follows_the_viewport_immediately() {
        let small = Viewport::new(20, 8);
        let large = Viewport::new(70, 24);
        let mut surface = Surface::new(large);
        let mut grid = HexagonGrid::new(ACCENT);

        grid.draw_frame(&mut surface, small, AnimationSpeed::Normal);
        // The lattice overscans by one hex; nothing lands far past the
        // small viewport's edge.
        let lit_beyond_small = (0..24)
            .flat_map(|y| (36..70).map(move |x| (x, y)))
            .any(|(x, y)| surface.intensity_at(x, y) > 0.0);
        assert!(!lit_beyond_small);

        // The very next frame after growing covers the new extent.
        grid.draw_frame(&mut surface, large, AnimationSpeed::Normal);
        let lit_in_new_extent = (0..24)
            .flat_map(|y| (40..70).map(move |x| (x, y)))
            .any(|(x, y)| surface.intensity_at(x, y) > 0.0);
        assert!(lit_in_new_extent);
    }

    #[test]
    fn time_advances_even_on_an_empty_viewport() {
        let mut surface = Surface::new(Viewport::new(0, 0));
        let mut grid = HexagonGrid::new(ACCENT);
        for _ in 0..10 {
            grid.draw_frame(&mut surface, Viewport::new(0, 0), AnimationSpeed::Normal);
        }
        assert!(grid.time > 0.0);
    }

    #[test]
    fn pulse_modulates_over_time() {
        let viewport = Viewport::new(40, 16);
        let mut surface = Surface::new(viewport);
        let mut grid = HexagonGrid::new(ACCENT);
        grid.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        // (3, 0) sits on the first hexagon's vertical edge.
        let first = surface.intensity_at(3, 0);
        assert!(first > 0.0);
        // Advance far enough for the sine phase to move appreciably.
        for _ in 0..60 {
            grid.draw_frame(&mut surface, viewport, AnimationSpeed::Fast);
        }
        let later = surface.intensity_at(3, 0);
        assert_ne!(first, later);
    }
}
