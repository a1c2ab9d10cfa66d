//! Core types shared across the haikei crates.

use ratatui::style::Color;

/// An RGB color triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback color used wherever a color input fails to resolve.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a ratatui terminal color.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Current drawing dimensions in terminal cells.
///
/// Updated exactly at construction and on resize events; animations read it
/// every frame rather than caching a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Width as f32, for position arithmetic.
    pub fn fw(self) -> f32 {
        f32::from(self.width)
    }

    /// Height as f32, for position arithmetic.
    pub fn fh(self) -> f32 {
        f32::from(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The available background animation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStyle {
    /// Drifting particles joined by proximity-faded lines.
    #[default]
    ParticleNetwork,
    /// Falling glyph rain with afterimage trails.
    MatrixRain,
    /// CRT scanline sweep with transient glitch blocks.
    GlitchScanline,
    /// Pulsing hexagonal lattice.
    HexagonGrid,
    /// Embers drifting upward and burning out.
    RisingEmbers,
    /// Breathing grid of dots.
    DotGrid,
}

impl AnimationStyle {
    /// Every registered style, in registry order.
    pub const ALL: [AnimationStyle; 6] = [
        AnimationStyle::ParticleNetwork,
        AnimationStyle::MatrixRain,
        AnimationStyle::GlitchScanline,
        AnimationStyle::HexagonGrid,
        AnimationStyle::RisingEmbers,
        AnimationStyle::DotGrid,
    ];

    /// Resolve a style identifier. Unknown identifiers fall back to
    /// [`AnimationStyle::ParticleNetwork`]; resolution never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "particle-network" => AnimationStyle::ParticleNetwork,
            "matrix-rain" => AnimationStyle::MatrixRain,
            "glitch-scanline" => AnimationStyle::GlitchScanline,
            "hexagon-grid" => AnimationStyle::HexagonGrid,
            "rising-embers" => AnimationStyle::RisingEmbers,
            "dot-grid" => AnimationStyle::DotGrid,
            _ => AnimationStyle::ParticleNetwork,
        }
    }

    /// The style identifier string.
    pub fn name(self) -> &'static str {
        match self {
            AnimationStyle::ParticleNetwork => "particle-network",
            AnimationStyle::MatrixRain => "matrix-rain",
            AnimationStyle::GlitchScanline => "glitch-scanline",
            AnimationStyle::HexagonGrid => "hexagon-grid",
            AnimationStyle::RisingEmbers => "rising-embers",
            AnimationStyle::DotGrid => "dot-grid",
        }
    }
}

/// Global animation speed setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Scale factor applied to positional motion per frame.
    pub fn motion_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 1.8,
        }
    }

    /// Scale factor applied to time accumulators driving pulse effects.
    pub fn pulse_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.6,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 1.6,
        }
    }

    /// Cycle to the next speed setting.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Parse a config value; anything unrecognized is Normal.
    pub fn from_name(name: &str) -> Self {
        match name {
            "slow" => AnimationSpeed::Slow,
            "fast" => AnimationSpeed::Fast,
            _ => AnimationSpeed::Normal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names_round_trip() {
        for style in AnimationStyle::ALL {
            assert_eq!(AnimationStyle::from_name(style.name()), style);
        }
    }

    #[test]
    fn unknown_style_falls_back_to_particle_network() {
        assert_eq!(
            AnimationStyle::from_name("laser-grid"),
            AnimationStyle::ParticleNetwork
        );
        assert_eq!(
            AnimationStyle::from_name(""),
            AnimationStyle::ParticleNetwork
        );
        // Identifiers are exact: no case folding, no prefix matching.
        assert_eq!(
            AnimationStyle::from_name("Particle-Network"),
            AnimationStyle::ParticleNetwork
        );
        assert_eq!(
            AnimationStyle::from_name("dot-grid "),
            AnimationStyle::ParticleNetwork
        );
    }

    #[test]
    fn speed_cycles_through_all_settings() {
        let mut speed = AnimationSpeed::Normal;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(speed);
            speed = speed.next();
        }
        assert_eq!(speed, AnimationSpeed::Normal);
        assert!(seen.contains(&AnimationSpeed::Slow));
        assert!(seen.contains(&AnimationSpeed::Fast));
    }

    #[test]
    fn unknown_speed_is_normal() {
        assert_eq!(AnimationSpeed::from_name("warp"), AnimationSpeed::Normal);
    }

    #[test]
    fn empty_viewport() {
        assert!(Viewport::new(0, 24).is_empty());
        assert!(Viewport::new(80, 0).is_empty());
        assert!(!Viewport::new(80, 24).is_empty());
    }
}
