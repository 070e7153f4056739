// Re-export glam for convenience
pub use glam::*;

// glint math types
mod frame;
mod interval;
mod ray;
pub use frame::{normalize_or_none, tangent_frame, NORMALIZE_EPSILON};
pub use interval::Interval;
pub use ray::Ray;
