//! Animation lifecycle control.

use std::time::{SystemTime, UNIX_EPOCH};

use haikei_core::{AnimationSpeed, AnimationStyle, Viewport};
use ratatui::text::Line;

use crate::animations::{self, Generator};
use crate::color;
use crate::surface::Surface;

/// Drives the active background animation.
///
/// The controller owns the drawing surface, the viewport tracker, and the
/// single active generator. At most one animation is ever active: `start`
/// drops the previous generator before installing the next one, so a
/// superseded animation can never draw another frame.
pub struct Controller {
    surface: Surface,
    viewport: Viewport,
    speed: AnimationSpeed,
    active: Option<ActiveAnimation>,
}

struct ActiveAnimation {
    style: AnimationStyle,
    generator: Box<dyn Generator>,
    frames_drawn: u64,
}

impl Controller {
    /// Create an idle controller for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            surface: Surface::new(viewport),
            viewport,
            speed: AnimationSpeed::default(),
            active: None,
        }
    }

    /// Start (or restart) the animation for a style identifier and an
    /// accent color string.
    ///
    /// Any running animation is cancelled first. Unknown style identifiers
    /// fall back to the default style and malformed colors to white; there
    /// is no failure path.
    pub fn start(&mut self, style_name: &str, accent_hex: &str) {
        self.start_seeded(style_name, accent_hex, time_seed());
    }

    /// As [`Controller::start`], with a caller-chosen random seed.
    pub fn start_seeded(&mut self, style_name: &str, accent_hex: &str, seed: u64) {
        self.active = None;
        self.surface.resize(self.viewport);
        self.surface.clear();

        let style = AnimationStyle::from_name(style_name);
        let accent = color::parse_hex(accent_hex);
        let generator = animations::build(style, accent, self.viewport, seed);
        self.active = Some(ActiveAnimation {
            style,
            generator,
            frames_drawn: 0,
        });
    }

    /// Stop the animation, leaving the last frame on the surface.
    pub fn stop(&mut self) {
        self.active = None;
    }

    /// Track a viewport change.
    ///
    /// Only the viewport and the surface dimensions change; the running
    /// animation is neither stopped nor reset. Generators pick the new
    /// dimensions up on their next frame, except where a style froze a
    /// dimension-derived quantity at construction (matrix rain's column
    /// count stays stale until the next start).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.surface.resize(self.viewport);
    }

    /// Render one frame if an animation is running.
    pub fn tick(&mut self) {
        if let Some(active) = &mut self.active {
            active
                .generator
                .draw_frame(&mut self.surface, self.viewport, self.speed);
            active.frames_drawn += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The active style, if any.
    pub fn style(&self) -> Option<AnimationStyle> {
        self.active.as_ref().map(|a| a.style)
    }

    /// Frames drawn since the last start; zero while idle.
    pub fn frames_drawn(&self) -> u64 {
        self.active.as_ref().map_or(0, |a| a.frames_drawn)
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Present the current frame as one styled line per row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.surface.to_lines()
    }
}

/// Seed generator randomness from the wall clock.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
