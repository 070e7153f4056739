//! Random number helpers shared by the camera driver, materials and the integrator.

use rand::{Rng, RngCore};

/// Draw a uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}
