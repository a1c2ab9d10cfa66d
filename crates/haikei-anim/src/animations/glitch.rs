//! Glitch scanline animation (stateful).

use haikei_core::{AnimationSpeed, Rgb, Viewport};

use crate::animations::Generator;
use crate::surface::Surface;

/// Rows the scanline sweeps per frame at normal speed.
const SCAN_STEP: f32 = 0.5;
/// Pitch of the fixed background gridlines.
const GRID_PITCH: u16 = 4;
const GRID_ALPHA: f32 = 0.05;
const SCAN_ALPHA: f32 = 0.35;
/// Soft band above and below the scanline.
const BAND_REACH: f32 = 3.0;
const BAND_ALPHA: f32 = 0.10;
/// Frames that must elapse before a burst may trigger.
const BURST_COOLDOWN: u32 = 45;
/// Per-frame trigger chance once the cooldown has elapsed.
const BURST_CHANCE: f32 = 0.05;
const MAX_BURST: usize = 5;

#[derive(Debug, Clone)]
struct GlitchBlock {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    /// Remaining frames; the block is dropped the frame this reaches zero.
    life: u32,
}

/// CRT scanline sweep with transient glitch blocks.
pub struct GlitchScanline {
    accent: Rgb,
    scan_y: f32,
    blocks: Vec<GlitchBlock>,
    cooldown: u32,
    rng: fastrand::Rng,
}

impl GlitchScanline {
    pub fn new(accent: Rgb, seed: u64) -> Self {
        Self {
            accent,
            scan_y: 0.0,
            blocks: Vec::new(),
            cooldown: 0,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    fn spawn_burst(&mut self, viewport: Viewport) {
        let count = self.rng.usize(1..=MAX_BURST);
        for _ in 0..count {
            self.blocks.push(GlitchBlock {
                x: self.rng.f32() * viewport.fw(),
                y: self.rng.f32() * viewport.fh(),
                w: 4.0 + self.rng.f32() * 24.0,
                h: 1.0 + self.rng.f32() * 1.5,
                life: 5 + self.rng.u32(0..10),
            });
        }
    }
}

impl Generator for GlitchScanline {
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed) {
        surface.clear();
        let w = viewport.fw();
        let h = viewport.fh();

        // Fixed gridlines.
        let mut y = 0u16;
        while y < viewport.height {
            surface.fill_rect(0.0, f32::from(y), w, 1.0, self.accent, GRID_ALPHA);
            y += GRID_PITCH;
        }

        // The bright scanline wraps around the vertical extent.
        if h > 0.0 {
            self.scan_y = (self.scan_y + SCAN_STEP * speed.motion_scale()) % h;
        }
        surface.fill_rect(0.0, self.scan_y, w, 1.0, self.accent, SCAN_ALPHA);
        surface.fill_rect(
            0.0,
            self.scan_y - BAND_REACH,
            w,
            BAND_REACH * 2.0,
            self.accent,
            BAND_ALPHA,
        );

        // Burst spawning is gated by a cooldown plus a stochastic trigger.
        self.cooldown += 1;
        if self.cooldown > BURST_COOLDOWN && self.rng.f32() < BURST_CHANCE {
            self.cooldown = 0;
            self.spawn_burst(viewport);
        }

        for block in &mut self.blocks {
            let jitter = (self.rng.f32() - 0.5) * 2.0;
            let alpha = 0.15 + self.rng.f32() * 0.10;
            surface.fill_rect(block.x + jitter, block.y, block.w, block.h, self.accent, alpha);
            block.life -= 1;
        }
        self.blocks.retain(|b| b.life > 0);
    }
}
