//! Rising embers animation (stateful).

use std::f32::consts::TAU;

use haikei_core::{AnimationSpeed, Rgb, Viewport};

use crate::animations::Generator;
use crate::surface::Surface;

/// Population size, held constant by recycling burnt-out embers in place.
const EMBER_COUNT: usize = 44;
/// Lateral flicker amplitude in cells per frame.
const FLICKER_DRIFT: f32 = 0.2;
/// Flicker phase advance per frame.
const FLICKER_STEP: f32 = 0.05;
/// Embers drifting past this far above the top edge are recycled.
const TOP_MARGIN: f32 = -2.0;

#[derive(Debug, Clone)]
struct Ember {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    alpha: f32,
    decay: f32,
    flicker: f32,
}

fn spawn(rng: &mut fastrand::Rng, viewport: Viewport) -> Ember {
    Ember {
        x: rng.f32() * viewport.fw(),
        y: viewport.fh() + rng.f32() * 3.0,
        vx: (rng.f32() - 0.5) * 0.3,
        vy: -(0.15 + rng.f32() * 0.4),
        size: 0.4 + rng.f32(),
        alpha: 0.2 + rng.f32() * 0.6,
        decay: 0.001 + rng.f32() * 0.004,
        flicker: rng.f32() * TAU,
    }
}

/// Embers drifting upward and burning out.
pub struct RisingEmbers {
    accent: Rgb,
    embers: Vec<Ember>,
    rng: fastrand::Rng,
}

impl RisingEmbers {
    pub fn new(accent: Rgb, viewport: Viewport, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let embers = (0..EMBER_COUNT)
            .map(|_| {
                let mut ember = spawn(&mut rng, viewport);
                // Scatter the initial population across the full height so
                // the effect doesn't start as a wall rising from the bottom.
                ember.y = rng.f32() * viewport.fh();
                ember
            })
            .collect();
        Self {
            accent,
            embers,
            rng,
        }
    }
}

impl Generator for RisingEmbers {
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed) {
        surface.clear();
        let scale = speed.motion_scale();

        for ember in &mut self.embers {
            ember.x += (ember.vx + ember.flicker.sin() * FLICKER_DRIFT) * scale;
            ember.y += ember.vy * scale;
            ember.flicker += FLICKER_STEP * speed.pulse_scale();
            ember.alpha -= ember.decay * scale;

            if ember.alpha <= 0.0 || ember.y < TOP_MARGIN {
                *ember = spawn(&mut self.rng, viewport);
                continue;
            }

            let alpha = (ember.alpha + ember.flicker.sin() * 0.15).max(0.0);
            surface.disk(ember.x, ember.y, ember.size, self.accent, alpha);
            // Faint oversized disk underneath gives the glow.
            surface.disk(ember.x, ember.y, ember.size * 3.0, self.accent, alpha * 0.15);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgb = Rgb::new(255, 107, 53);

    #[test]
    fn population_is_fixed_for_lifetime() {
        let viewport = Viewport::new(50, 20);
        let mut surface = Surface::new(viewport);
        let mut embers = RisingEmbers::new(ACCENT, viewport, 21);
        for _ in 0..500 {
            embers.draw_frame(&mut surface, viewport, AnimationSpeed::Fast);
        }
        assert_eq!(embers.embers.len(), EMBER_COUNT);
    }

    #[test]
    fn burnt_out_ember_is_replaced_within_the_same_frame() {
        let viewport = Viewport::new(50, 20);
        let mut surface = Surface::new(viewport);
        let mut embers = RisingEmbers::new(ACCENT, viewport, 22);
        embers.embers[0].alpha = 0.0;
        embers.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        let replacement = &embers.embers[0];
        assert!(replacement.alpha > 0.0);
        assert!(replacement.y >= viewport.fh());
    }

    #[test]
    fn ember_above_the_top_edge_is_recycled_to_the_bottom() {
        let viewport = Viewport::new(50, 20);
        let mut surface = Surface::new(viewport);
        let mut embers = RisingEmbers::new(ACCENT, viewport, 23);
        embers.embers[0].y = TOP_MARGIN - 1.0;
        embers.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        assert!(embers.embers[0].y >= viewport.fh());
    }

    #[test]
    fn embers_rise() {
        let viewport = Viewport::new(50, 20);
        let mut surface = Surface::new(viewport);
        let mut embers = RisingEmbers::new(ACCENT, viewport, 24);
        embers.embers[0].y = 10.0;
        embers.embers[0].alpha = 0.8;
        embers.embers[0].decay = 0.001;
        let before = embers.embers[0].y;
        embers.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        assert!(embers.embers[0].y < before);
    }
}
