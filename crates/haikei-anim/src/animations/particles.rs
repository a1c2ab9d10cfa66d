//! Particle network animation (stateful).

use haikei_core::{AnimationSpeed, Rgb, Viewport};

use crate::animations::Generator;
use crate::surface::Surface;

/// Population size, fixed for the generator's lifetime.
const PARTICLE_COUNT: usize = 56;
/// Distance in cells under which two particles are linked.
const LINK_DIST: f32 = 16.0;
/// Link opacity at zero distance; decays linearly to zero at the threshold.
const LINK_ALPHA: f32 = 0.35;
/// Velocity spread in cells per frame.
const SPEED: f32 = 0.25;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
}

/// Drifting particles joined by proximity-faded lines.
pub struct ParticleNetwork {
    accent: Rgb,
    particles: Vec<Particle>,
}

impl ParticleNetwork {
    pub fn new(accent: Rgb, viewport: Viewport, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.f32() * viewport.fw(),
                y: rng.f32() * viewport.fh(),
                vx: (rng.f32() - 0.5) * SPEED,
                vy: (rng.f32() - 0.5) * SPEED,
                radius: rng.f32() * 0.7 + 0.4,
            })
            .collect();
        Self { accent, particles }
    }
}

/// Opacity of the link between two particles at the given distance.
fn link_alpha(dist: f32) -> f32 {
    if dist >= LINK_DIST {
        0.0
    } else {
        (1.0 - dist / LINK_DIST) * LINK_ALPHA
    }
}

impl Generator for ParticleNetwork {
    fn draw_frame(&mut self, surface: &mut Surface, viewport: Viewport, speed: AnimationSpeed) {
        surface.clear();
        let w = viewport.fw();
        let h = viewport.fh();
        let scale = speed.motion_scale();

        for p in &mut self.particles {
            p.x += p.vx * scale;
            p.y += p.vy * scale;
            // Elastic reflection: flip the velocity component, don't clamp.
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }
        }

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let p = &self.particles[i];
                let q = &self.particles[j];
                let dist = ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt();
                let alpha = link_alpha(dist);
                if alpha > 0.0 {
                    surface.line(p.x, p.y, q.x, q.y, self.accent, alpha);
                }
            }
        }

        for p in &self.particles {
            surface.disk(p.x, p.y, p.radius, self.accent, 0.8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Rgb = Rgb::new(133, 92, 249);

    #[test]
    fn population_is_fixed_for_lifetime() {
        let viewport = Viewport::new(60, 20);
        let mut surface = Surface::new(viewport);
        let mut network = ParticleNetwork::new(ACCENT, viewport, 42);
        assert_eq!(network.particles.len(), PARTICLE_COUNT);
        for _ in 0..120 {
            network.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        }
        assert_eq!(network.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn link_opacity_is_capped_at_zero_distance() {
        assert_eq!(link_alpha(0.0), LINK_ALPHA);
    }

    #[test]
    fn link_opacity_vanishes_at_threshold() {
        assert_eq!(link_alpha(LINK_DIST), 0.0);
        assert_eq!(link_alpha(LINK_DIST + 5.0), 0.0);
    }

    #[test]
    fn link_opacity_decays_linearly() {
        assert!((link_alpha(LINK_DIST / 2.0) - LINK_ALPHA / 2.0).abs() < 1e-6);
        assert!(link_alpha(1.0) > link_alpha(2.0));
    }

    #[test]
    fn reflection_turns_particles_back_inside() {
        let viewport = Viewport::new(30, 10);
        let mut surface = Surface::new(viewport);
        let mut network = ParticleNetwork::new(ACCENT, viewport, 7);
        network.particles[0].x = 29.9;
        network.particles[0].vx = 0.3;
        network.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        assert!(network.particles[0].vx < 0.0);
    }

    #[test]
    fn tolerates_viewport_changes_mid_flight() {
        let viewport = Viewport::new(60, 20);
        let mut surface = Surface::new(viewport);
        let mut network = ParticleNetwork::new(ACCENT, viewport, 9);
        for _ in 0..30 {
            network.draw_frame(&mut surface, viewport, AnimationSpeed::Normal);
        }
        let shrunk = Viewport::new(10, 4);
        surface.resize(shrunk);
        for _ in 0..30 {
            network.draw_frame(&mut surface, shrunk, AnimationSpeed::Fast);
        }
        assert_eq!(network.particles.len(), PARTICLE_COUNT);
    }
}
