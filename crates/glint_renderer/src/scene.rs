//! Immutable scene: camera, shapes and background.

use crate::{Camera, Color, Hit, Material, Plane, RenderResult, Shape, Sphere};
use glint_math::{Ray, Vec3};

/// Everything a path needs to look up: built once, then only read.
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    shapes: Vec<Shape>,
    background: Material,
}

impl Scene {
    /// Create a new scene.
    pub fn new(camera: Camera, shapes: Vec<Shape>, background: Material) -> Self {
        log::debug!("Scene created with {} shapes", shapes.len());
        Self {
            camera,
            shapes,
            background,
        }
    }

    /// The stock scene: an emissive sphere lighting a diffuse red sphere,
    /// a glossy blue sphere and a glossy cyan floor under a dim sky.
    pub fn demo() -> RenderResult<Self> {
        let shapes: Vec<Shape> = vec![
            Sphere::new(
                Vec3::new(0.0, -1.0, 3.0),
                0.5,
                Material::emissive(Color::splat(6.0)),
            )?
            .into(),
            Sphere::new(
                Vec3::new(-1.0, 0.0, 0.0),
                1.0,
                Material::lambert(Color::new(0.9, 0.1, 0.1)),
            )?
            .into(),
            Sphere::new(
                Vec3::new(1.0, 1.0, 0.0),
                1.0,
                Material::ggx_reflect(Color::new(0.1, 0.1, 0.9), 0.05),
            )?
            .into(),
            Plane::new(
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(4.0, 0.0, 0.0),
                Vec3::new(0.0, 4.0, 0.0),
                Material::ggx_reflect(Color::new(0.1, 0.8, 0.8), 0.1),
            )?
            .into(),
        ];

        Ok(Self::new(
            Camera::default(),
            shapes,
            Material::emissive(Color::splat(0.1)),
        ))
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn background(&self) -> &Material {
        &self.background
    }

    /// Find the nearest hit along `ray`, falling back to the background.
    ///
    /// The returned normal always faces the incoming ray.
    pub fn intersect(&self, ray: &Ray) -> Hit<'_> {
        self.shapes
            .iter()
            .fold(Hit::sentinel(ray, &self.background), |best, shape| {
                shape.intersect(best, ray)
            })
            .face_towards(ray)
    }
}
