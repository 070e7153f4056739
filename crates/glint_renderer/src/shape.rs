//! Implicit-surface primitives: spheres and finite parallelogram planes.

use crate::{Hit, Material, RenderError, RenderResult};
use glint_math::{normalize_or_none, Interval, Ray, Vec3};

/// Determinants smaller than this mean the ray runs parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Fails for a zero or non-finite radius.
    ///
    /// A negative radius describes the same surface with the outward
    /// normal reversed.
    pub fn new(center: Vec3, radius: f32, material: Material) -> RenderResult<Self> {
        if radius == 0.0 || !radius.is_finite() {
            return Err(RenderError::DegenerateSphere(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Distance along `ray` to the surface, or `None` on a miss.
    ///
    /// With `b = dot(D, O - C)` the roots of `|O + tD - C|² = r²` are
    /// `-b ∓ sqrt(b² - c)`. The mirrored roots `b ± sqrt(b² - c)` are tested
    /// instead: the near one first, falling back to the far one when the
    /// near root lies behind the origin. From outside this yields the
    /// entry point, from inside the exit point, and nothing when the
    /// sphere is entirely behind the ray.
    pub fn distance(&self, ray: &Ray) -> Option<f32> {
        let co = ray.origin - self.center;
        let b = ray.direction.dot(co);
        let c = co.dot(co) - self.radius * self.radius;

        if b * b < c {
            return None;
        }
        let sqrtd = (b * b - c).sqrt();

        let mut t = b + sqrtd;
        if t > 0.0 {
            t = b - sqrtd;
        }
        if t < 0.0 {
            Some(-t)
        } else {
            None
        }
    }

    fn intersect<'a>(&'a self, best: Hit<'a>, ray: &Ray) -> Hit<'a> {
        match self.distance(ray) {
            Some(t) if Interval::new(0.0, best.distance).contains(t) => {
                let position = ray.at(t);
                Hit {
                    position,
                    normal: (position - self.center) / self.radius,
                    distance: t,
                    material: &self.material,
                }
            }
            _ => best,
        }
    }
}

/// A finite parallelogram spanning `center ± edge1 ± edge2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    center: Vec3,
    edge1: Vec3,
    edge2: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. Fails when the edges are parallel or zero.
    pub fn new(center: Vec3, edge1: Vec3, edge2: Vec3, material: Material) -> RenderResult<Self> {
        let normal = normalize_or_none(edge1.cross(edge2)).ok_or(RenderError::DegeneratePlane)?;
        Ok(Self {
            center,
            edge1,
            edge2,
            normal,
            material,
        })
    }

    /// Unit normal, `normalize(edge1 × edge2)`.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance along `ray` to the parallelogram, or `None` on a miss.
    ///
    /// Rays parallel to the plane miss.
    pub fn distance(&self, ray: &Ray) -> Option<f32> {
        let o = ray.origin - self.center;
        let q = self.edge1.cross(o);
        let p = self.edge2.cross(ray.direction);
        let det = self.edge1.dot(p);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let u = o.dot(p) / det;
        let v = ray.direction.dot(q) / det;
        if Interval::SYMMETRIC_UNIT.surrounds(u) && Interval::SYMMETRIC_UNIT.surrounds(v) {
            Some(q.dot(self.edge2) / det)
        } else {
            None
        }
    }

    fn intersect<'a>(&'a self, best: Hit<'a>, ray: &Ray) -> Hit<'a> {
        match self.distance(ray) {
            Some(t) if Interval::new(0.0, best.distance).surrounds(t) => Hit {
                position: ray.at(t),
                normal: self.normal,
                distance: t,
                material: &self.material,
            },
            _ => best,
        }
    }
}

/// Closed set of scene primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Return a hit no farther than `best`: either this shape's hit, if it
    /// is valid and at least as close, or `best` unchanged.
    pub fn intersect<'a>(&'a self, best: Hit<'a>, ray: &Ray) -> Hit<'a> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(best, ray),
            Shape::Plane(plane) => plane.intersect(best, ray),
        }
    }

    /// The material of this shape.
    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => &sphere.material,
            Shape::Plane(plane) => &plane.material,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
