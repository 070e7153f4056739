//! Surface materials and per-bounce direction sampling.

use crate::{gen_f32, Hit};
use glint_math::{tangent_frame, Ray, Vec3};
use rand::RngCore;
use std::f32::consts::TAU;

/// Color type alias (linear RGB radiance or reflectance)
pub type Color = Vec3;

/// Offset applied along the normal to the origin of a scattered ray,
/// so the next bounce does not re-hit the surface it left.
pub const RAY_EPSILON: f32 = 1e-5;

/// How light interacts with a surface.
///
/// The set of kinds is closed; dispatch is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Light source. Terminates the path.
    Emissive { emission: Color },
    /// Ideal diffuse reflector.
    Lambert { albedo: Color },
    /// Glossy lobe around the shading normal with a GGX-shaped radius.
    /// `a2` is the squared roughness.
    GgxReflect { albedo: Color, a2: f32 },
}

/// Outcome of shading a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scatter {
    /// The path ended on an emitter with this radiance.
    Emitted(Color),
    /// The path continues along `ray`, its throughput scaled by `attenuation`.
    Bounce { ray: Ray, attenuation: Color },
}

impl Material {
    /// Create an emitter with the given radiance.
    pub fn emissive(emission: Color) -> Self {
        Material::Emissive { emission }
    }

    /// Create a Lambertian material with the given albedo.
    pub fn lambert(albedo: Color) -> Self {
        Material::Lambert { albedo }
    }

    /// Create a glossy material.
    ///
    /// - `albedo`: reflectance color
    /// - `a2`: roughness squared, 0.0 = mirror-like lobe along the normal
    pub fn ggx_reflect(albedo: Color, a2: f32) -> Self {
        Material::GgxReflect { albedo, a2 }
    }

    /// Returns true if hitting this material ends the path.
    pub fn is_emissive(&self) -> bool {
        matches!(self, Material::Emissive { .. })
    }

    /// Shade `hit` (whose normal already faces the incoming ray).
    ///
    /// Non-emissive kinds draw `u1` then `u2` from `rng`.
    pub fn scatter(&self, hit: &Hit, rng: &mut dyn RngCore) -> Scatter {
        let (albedo, direction) = match *self {
            Material::Emissive { emission } => return Scatter::Emitted(emission),
            Material::Lambert { albedo } => {
                let (u1, u2) = draw_disk_params(rng);
                (albedo, sample_cosine_hemisphere(hit.normal, u1, u2))
            }
            Material::GgxReflect { albedo, a2 } => {
                let (u1, u2) = draw_disk_params(rng);
                (albedo, sample_ggx_lobe(hit.normal, a2, u1, u2))
            }
        };

        // The sampling pdf cancels the cosine term: the weight is the albedo alone.
        Scatter::Bounce {
            ray: Ray::new(hit.position + hit.normal * RAY_EPSILON, direction),
            attenuation: albedo,
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Draw `u1` in `[0, 1)` and an angle `u2` in `[0, 2π)`.
#[inline]
fn draw_disk_params(rng: &mut dyn RngCore) -> (f32, f32) {
    let u1 = gen_f32(rng);
    let u2 = gen_f32(rng) * TAU;
    (u1, u2)
}

/// Map a disk radius and angle onto the hemisphere around `normal`.
#[inline]
fn lift_to_hemisphere(normal: Vec3, r2: f32, phi: f32) -> Vec3 {
    let (tangent, bitangent) = tangent_frame(normal);
    let r = r2.sqrt();
    normal * (1.0 - r2).max(0.0).sqrt() + tangent * (r * phi.cos()) + bitangent * (r * phi.sin())
}

/// Cosine-weighted direction on the hemisphere around `normal`.
pub(crate) fn sample_cosine_hemisphere(normal: Vec3, u1: f32, u2: f32) -> Vec3 {
    lift_to_hemisphere(normal, u1, u2)
}

/// Direction in the GGX-radius lobe around `normal`.
///
/// This samples directly about the shading normal; it is not a half-vector
/// sample followed by a reflection.
pub(crate) fn sample_ggx_lobe(normal: Vec3, a2: f32, u1: f32, u2: f32) -> Vec3 {
    let r2 = a2 * u1 / (1.0 + u1 * (a2 - 1.0));
    lift_to_hemisphere(normal, r2, u2)
}
