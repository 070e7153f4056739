//! Hit record for ray-shape intersection.

use crate::Material;
use glint_math::{Ray, Vec3};

/// Distance of the "nothing hit yet" sentinel.
pub const FAR_DISTANCE: f32 = 1e10;

/// Best intersection found so far along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub distance: f32,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> Hit<'a> {
    /// The starting point of a scene query: nothing closer than
    /// [`FAR_DISTANCE`], shaded with the background material.
    pub fn sentinel(ray: &Ray, background: &'a Material) -> Self {
        Self {
            position: Vec3::ZERO,
            normal: ray.direction,
            distance: FAR_DISTANCE,
            material: background,
        }
    }

    /// Flip the normal so that it points against the ray direction.
    ///
    /// Needed for hemisphere sampling on back faces and two-sided planes.
    pub fn face_towards(mut self, ray: &Ray) -> Self {
        if self.normal.dot(ray.direction) > 0.0 {
            self.normal = -self.normal;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        let background = Material::emissive(Vec3::splat(0.1));
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let hit = Hit::sentinel(&ray, &background);

        assert_eq!(hit.distance, FAR_DISTANCE);
        assert_eq!(hit.normal, Vec3::Y);
        assert_eq!(*hit.material, background);
    }

    #[test]
    fn test_face_towards_flips_back_face() {
        let background = Material::emissive(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let hit = Hit::sentinel(&ray, &background).face_towards(&ray);
        assert_eq!(hit.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_face_towards_keeps_front_face() {
        let background = Material::emissive(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut hit = Hit::sentinel(&ray, &background);
        hit.normal = Vec3::new(0.0, -1.0, 0.0);
        assert_eq!(hit.face_towards(&ray).normal, Vec3::NEG_Y);

        // Grazing normals are left alone
        hit.normal = Vec3::X;
        assert_eq!(hit.face_towards(&ray).normal, Vec3::X);
    }
}
