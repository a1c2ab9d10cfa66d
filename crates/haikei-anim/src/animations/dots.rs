//! Breathing dot grid animation.
//!
//! Like the hexagon grid, the only state is elapsed time; the lattice is
//! derived from the current viewport every frame.

use haikei_core::{AnimationSpeed, Rgb, Viewport};

use crate::animations::Generator;
use crate::surface::Surface;

/// Lattice pitch in cells; wider than tall for the cell aspect ratio.
const SPACING_X: f32 = 6.0;
const SPACING_Y: f32 = 3.0;
const TIME_STEP: f32 = 0.015;
const BASE_ALPHA: f32 = 0.10;
const PULSE_ALPHA: f32 = 0.30;

/// Breathing grid of dots.
pub struct DotGrid {
    accent: Rgb,
    time: f32,
}

impl DotGrid {
    pub fn new(accent: Rgb) -> Self {
        Self { accent, time: 0.0 }
    }
}

impl Generator for DotGrid {
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed) {
        surface.clear();
        self.time += TIME_STEP * speed.pulse_scale();
        if viewport.is_empty() {
            return;
        }

        let cols = (viewport.fw() / SPACING_X).ceil() as i32;
        let rows = (viewport.fh() / SPACING_Y).ceil() as i32;

        for row in 0..rows {
            for col in 0..cols {
                let x = col as f32 * SPACING_X + SPACING_X / 2.0;
                let y = row as f32 * SPACING_Y + SPACING_Y / 2.0;
                // Phase offsets per column and row make the pulse travel
                // diagonally instead of breathing in unison.
                let wave =
                    (self.time + col as f32 * 0.15 + row as f32 * 0.15).sin() * 0.5 + 0.5;
                let alpha = BASE_ALPHA + wave * PULSE_ALPHA;
                let radius = 0.4 + wave * 0.8;
                surface.disk(x, y, radius, self.accent, alpha);
            }
        }
    }
}
