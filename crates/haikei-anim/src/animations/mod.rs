//! The background animation styles and their registry.

mod dots;
mod embers;
mod glitch;
mod hex_grid;
mod particles;
mod rain;

use haikei_core::{AnimationSpeed, AnimationStyle, Rgb, Viewport};

use crate::surface::Surface;

/// A stateful animation producing one rendered frame per call.
pub trait Generator {
    /// Render the next frame onto the surface.
    ///
    /// Runs to completion synchronously and in bounded time, however many
    /// frames came before. `viewport` is the current tracked size, not a
    /// snapshot from construction.
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed);
}

/// Instantiate the generator registered for a style.
pub(crate) fn build(
    style: AnimationStyle,
    accent: Rgb,
    viewport: Viewport,
    seed: u64,
) -> Box<dyn Generator> {
    match style {
        AnimationStyle::ParticleNetwork => {
            Box::new(particles::ParticleNetwork::new(accent, viewport, seed))
        }
        AnimationStyle::MatrixRain => Box::new(rain::MatrixRain::new(accent, viewport, seed)),
        AnimationStyle::GlitchScanline => Box::new(glitch::GlitchScanline::new(accent, seed)),
        AnimationStyle::HexagonGrid => Box::new(hex_grid::HexagonGrid::new(accent)),
        AnimationStyle::RisingEmbers => Box::new(embers::RisingEmbers::new(accent, viewport, seed)),
        AnimationStyle::DotGrid => Box::new(dots::DotGrid::new(accent)),
    }
}
