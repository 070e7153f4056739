//! Shading-frame helpers.

use crate::Vec3;

/// Magnitudes below this are treated as degenerate by [`normalize_or_none`].
pub const NORMALIZE_EPSILON: f32 = 1e-12;

/// Normalize `v`, or return `None` when its magnitude is too small or not finite.
///
/// For well-formed input this is exactly `v / |v|`.
#[inline]
pub fn normalize_or_none(v: Vec3) -> Option<Vec3> {
    let length = v.length();
    if length.is_finite() && length > NORMALIZE_EPSILON {
        Some(v / length)
    } else {
        None
    }
}

/// Build an orthonormal `(tangent, bitangent)` pair around the unit normal `n`.
///
/// Branchless construction (Duff et al. 2017): the sign flip on `n.z` keeps
/// `sign + n.z` away from zero, so there is no singularity when `n` is close
/// to a coordinate axis.
#[inline]
pub fn tangent_frame(n: Vec3) -> (Vec3, Vec3) {
    let sign = if n.z >= 0.0 { 1.0 } else { -1.0 };
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    let tangent = Vec3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
    let bitangent = Vec3::new(b, sign + n.y * n.y * a, -n.y);
    (tangent, bitangent)
}
