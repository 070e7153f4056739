//! glint renderer - CPU path tracing
//!
//! A unidirectional Monte Carlo path tracer over a small, fixed scene of
//! implicit surfaces. Paths are terminated by hitting an emitter or by
//! Russian roulette.

mod camera;
mod config;
mod error;
mod hit;
mod integrator;
mod material;
mod ppm;
mod renderer;
mod sampling;
mod scene;
mod shape;

pub use camera::Camera;
pub use config::{RenderConfig, DEFAULT_MAX_BOUNCES};
pub use error::{RenderError, RenderResult};
pub use hit::{Hit, FAR_DISTANCE};
pub use integrator::{radiance, trace};
pub use material::{Color, Material, Scatter, RAY_EPSILON};
pub use ppm::{save_ppm, write_ppm};
pub use renderer::{color_to_rgb, render, render_pixel, tonemap, ImageBuffer};
pub use sampling::gen_f32;
pub use scene::Scene;
pub use shape::{Plane, Shape, Sphere};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Ray, Vec3};
