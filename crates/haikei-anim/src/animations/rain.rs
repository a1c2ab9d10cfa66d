//! Matrix rain animation (stateful).

use haikei_core::{AnimationSpeed, Rgb, Viewport};

use crate::animations::Generator;
use crate::chars::RAIN_CHARS;
use crate::surface::Surface;

/// Cells per rain column.
const GLYPH_PITCH: u16 = 2;
/// Rows fallen per frame at normal speed.
const FALL_STEP: f32 = 0.5;
/// Light retained between frames; the rest decays into the trail.
const FADE_KEEP: f32 = 0.90;
/// Per-frame chance that a column past the bottom edge restarts at the top.
const RESET_CHANCE: f32 = 0.025;

/// Falling glyph rain with afterimage trails.
pub struct MatrixRain {
    accent: Rgb,
    /// Fall offset per column, in rows. The column count is derived from the
    /// viewport width at construction and stays fixed until restart, even
    /// across resizes.
    drops: Vec<f32>,
    rng: fastrand::Rng,
}

impl MatrixRain {
    pub fn new(accent: Rgb, viewport: Viewport, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let columns = usize::from(viewport.width / GLYPH_PITCH);
        let drops = (0..columns).map(|_| rng.f32() * -40.0).collect();
        Self { accent, drops, rng }
    }
}

impl Generator for MatrixRain {
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed) {
        surface.fade(FADE_KEEP);
        let h = viewport.fh();
        let step = FALL_STEP * speed.motion_scale();

        for (i, drop) in self.drops.iter_mut().enumerate() {
            let ch = RAIN_CHARS[self.rng.usize(0..RAIN_CHARS.len())];
            let alpha = 0.6 + self.rng.f32() * 0.4;
            let col = i as i32 * i32::from(GLYPH_PITCH);
            surface.glyph(col, drop.floor() as i32, ch, self.accent, alpha);

            // Past the bottom edge the column restarts stochastically, not
            // unconditionally, so the rain stays ragged.
            if *drop > h && self.rng.f32() < RESET_CHANCE {
                *drop = 0.0;
            }
            *drop += step;
        }
    }
}
