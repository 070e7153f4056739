//! Path tracing kernel.
//!
//! Follows one camera path through the scene:
//! - Russian roulette on the largest throughput channel every iteration
//! - Scene intersection and material dispatch
//! - Termination on an emitter, by roulette, or at the optional bounce cap

use crate::{gen_f32, Color, RenderConfig, Scatter, Scene};
use glint_math::Ray;
use rand::RngCore;

/// Where a path is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PathState {
    /// Still bouncing.
    Running,
    /// Killed by Russian roulette; contributes black.
    TerminatedByRoulette,
    /// Reached an emitter; contributes `throughput * emission`.
    TerminatedByEmission(Color),
    /// Hit the configured bounce cap; contributes black.
    TerminatedByBounceCap,
}

/// Per-path loop state. Owned by a single `trace` call.
#[derive(Debug, Clone)]
struct Path {
    ray: Ray,
    throughput: Color,
    bounces: u32,
}

impl Path {
    fn new(ray: Ray) -> Self {
        Self {
            ray,
            throughput: Color::ONE,
            bounces: 0,
        }
    }

    /// Advance the path by one iteration.
    fn step(&mut self, scene: &Scene, max_bounces: Option<u32>, rng: &mut dyn RngCore) -> PathState {
        if max_bounces.is_some_and(|max| self.bounces >= max) {
            log::trace!("Path hit the bounce cap after {} bounces", self.bounces);
            return PathState::TerminatedByBounceCap;
        }

        // Continuation probability; not clamped to 1
        let p = self.throughput.max_element();
        let survived = gen_f32(rng) < p;
        if survived {
            self.throughput /= p;
        }

        // Intersected even on the killing iteration; the hit is then dropped.
        let hit = scene.intersect(&self.ray);
        if !survived {
            return PathState::TerminatedByRoulette;
        }

        match hit.material.scatter(&hit, rng) {
            Scatter::Emitted(emission) => PathState::TerminatedByEmission(self.throughput * emission),
            Scatter::Bounce { ray, attenuation } => {
                self.throughput *= attenuation;
                self.ray = ray;
                self.bounces += 1;
                PathState::Running
            }
        }
    }
}

/// Trace one path starting along `ray` and return its radiance sample.
pub fn trace(scene: &Scene, ray: Ray, config: &RenderConfig, rng: &mut dyn RngCore) -> Color {
    let mut path = Path::new(ray);
    loop {
        match path.step(scene, config.max_bounces, rng) {
            PathState::Running => continue,
            PathState::TerminatedByEmission(radiance) => return radiance,
            PathState::TerminatedByRoulette | PathState::TerminatedByBounceCap => {
                return Color::ZERO
            }
        }
    }
}

/// Radiance sample for normalized device coordinates `(x, y)`.
pub fn radiance(scene: &Scene, x: f32, y: f32, config: &RenderConfig, rng: &mut dyn RngCore) -> Color {
    trace(scene, scene.camera().ray(x, y), config, rng)
}
