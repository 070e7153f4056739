//! Image driver around the path tracing kernel.
//!
//! Implements:
//! - Jittered multi-sampling per pixel
//! - Gamma 2.2 tonemapping to 8-bit
//! - A simple row-major image buffer

use crate::{gen_f32, radiance, Color, RenderConfig, RenderResult, Scene};
use rand::RngCore;
use std::time::Instant;

const INV_GAMMA: f32 = 1.0 / 2.2;

/// Map one linear channel to an 8-bit display value.
///
/// `v >= 1` saturates to 255 and `v <= 0` (or NaN) maps to 0.
#[inline]
pub fn tonemap(v: f32) -> u8 {
    if v >= 1.0 {
        return 255;
    }
    if v <= 0.0 {
        return 0;
    }
    (256.0 * v.powf(INV_GAMMA)).min(255.0) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [tonemap(color.x), tonemap(color.y), tonemap(color.z)]
}

/// Average `samples_per_pixel` radiance samples for pixel `(px, py)`.
///
/// Both device axes are scaled by the image height, so wide images
/// extend the view horizontally. Fails if `config` does not validate.
pub fn render_pixel(
    scene: &Scene,
    px: u32,
    py: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<Color> {
    config.validate()?;
    let height = config.height as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let xf = px as f32 + gen_f32(rng);
        let yf = py as f32 + gen_f32(rng);
        let x = 2.0 * xf / height - 1.0;
        let y = -2.0 * yf / height + 1.0;
        pixel_color += radiance(scene, x, y, config, rng);
    }

    Ok(pixel_color / config.samples_per_pixel as f32)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Tonemapped 8-bit RGB bytes in row-major order.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb(*c)).collect()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer on the calling thread.
pub fn render(scene: &Scene, config: &RenderConfig, rng: &mut dyn RngCore) -> RenderResult<ImageBuffer> {
    config.validate()?;
    log::info!(
        "Rendering {}x{} @ {} spp",
        config.width,
        config.height,
        config.samples_per_pixel
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(config.width, config.height);
    for y in 0..config.height {
        for x in 0..config.width {
            let color = render_pixel(scene, x, y, config, rng)?;
            image.set(x, y, color);
        }
    }

    log::info!("Render finished in {:?}", start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::tests::ZeroRng;
    use crate::{Camera, Material, RenderError, Sphere};
    use glint_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tonemap_bounds() {
        assert_eq!(tonemap(0.0), 0);
        assert_eq!(tonemap(-3.0), 0);
        assert_eq!(tonemap(f32::NAN), 0);
        assert_eq!(tonemap(1.0), 255);
        assert_eq!(tonemap(6.0), 255);
        assert_eq!(tonemap(0.999_999), 255);
    }

    #[test]
    fn test_tonemap_gamma() {
        // 0.5^(1/2.2) = 0.7297..., times 256 = 186.8
        assert_eq!(tonemap(0.5), 186);
        assert_eq!(tonemap(0.1), (256.0 * 0.1f32.powf(1.0 / 2.2)) as u8);
        assert!(tonemap(0.2) < tonemap(0.3));
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 6);

        image.set(2, 1, Color::ONE);
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);

        let rgb = image.to_rgb();
        assert_eq!(rgb.len(), 18);
        assert_eq!(&rgb[15..], &[255, 255, 255]);
    }

    #[test]
    fn test_emitter_filling_frustum() {
        // Camera sits inside a huge emissive sphere
        let camera = Camera::default();
        let sphere = Sphere::new(camera.position(), 100.0, Material::emissive(Color::splat(6.0))).unwrap();
        let scene = Scene::new(camera, vec![sphere.into()], Material::emissive(Color::ZERO));
        let config = RenderConfig::default().with_resolution(8, 8).with_samples(1);
        let mut rng = ZeroRng;

        let image = render(&scene, &config, &mut rng).unwrap();
        for pixel in &image.pixels {
            assert_eq!(*pixel, Color::splat(6.0));
        }
        assert!(image.to_rgb().iter().all(|&c| c == 255));
    }

    #[test]
    fn test_background_only_converges() {
        let scene = Scene::new(Camera::default(), Vec::new(), Material::emissive(Color::splat(0.1)));
        let mut rng = StdRng::seed_from_u64(3);

        for spp in [1, 7, 32] {
            let config = RenderConfig::default().with_resolution(4, 4).with_samples(spp);
            let image = render(&scene, &config, &mut rng).unwrap();
            for pixel in &image.pixels {
                assert!((*pixel - Color::splat(0.1)).abs().max_element() < 1e-6);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic_per_seed() {
        let scene = Scene::demo().unwrap();
        let config = RenderConfig::default().with_resolution(6, 4).with_samples(4);

        let a = render(&scene, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = render(&scene, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_center_pixel_sees_something() {
        let scene = Scene::demo().unwrap();
        let config = RenderConfig::default().with_resolution(16, 16).with_samples(64);
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&scene, 8, 8, &config, &mut rng).unwrap();
        assert!(color.is_finite());
        assert!(color.length() > 0.0);
    }

    #[test]
    fn test_render_rejects_invalid_config() {
        let scene = Scene::demo().unwrap();
        let config = RenderConfig::default().with_samples(0);
        let result = render(&scene, &config, &mut ZeroRng);
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_render_pixel_rejects_zero_samples() {
        let scene = Scene::demo().unwrap();
        let config = RenderConfig::default().with_samples(0);
        let result = render_pixel(&scene, 0, 0, &config, &mut ZeroRng);
        assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_pixel_mapping_uses_height_for_both_axes() {
        // A thin emissive sphere straight ahead is only visible from the
        // pixel whose jittered sample maps to device (0, 0).
        let camera = Camera::default();
        let target = Sphere::new(Vec3::new(0.0, 5.0, 1.0), 0.05, Material::emissive(Color::ONE)).unwrap();
        let scene = Scene::new(camera, vec![target.into()], Material::emissive(Color::ZERO));
        let config = RenderConfig::default().with_resolution(8, 4).with_samples(1);

        // Pixel (2, 2) with zero jitter maps to x = 2*2/4 - 1 = 0, y = -2*2/4 + 1 = 0
        let color = render_pixel(&scene, 2, 2, &config, &mut ZeroRng).unwrap();
        assert_eq!(color, Color::ONE);
        let color = render_pixel(&scene, 4, 2, &config, &mut ZeroRng).unwrap();
        assert_eq!(color, Color::ZERO);
    }
}
