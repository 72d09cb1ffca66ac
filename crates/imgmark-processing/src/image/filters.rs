//! Pixel filters: brightness, contrast, grayscale, inversion.

use image::DynamicImage;

/// Stateless filter operations over a decoded image.
pub struct ImageFilters;

impl ImageFilters {
    /// Brighten by `value`, nominally in [-1, 1], mapped to a per-channel
    /// delta of `value * 255`. Out-of-range values saturate per pixel.
    pub fn brighten(img: &DynamicImage, value: f32) -> DynamicImage {
        let delta = (value * 255.0).round() as i32;
        img.brighten(delta)
    }

    /// Adjust contrast by `value`, nominally in [-1, 1], mapped to the
    /// library's percentage scale.
    pub fn contrast(img: &DynamicImage, value: f32) -> DynamicImage {
        img.adjust_contrast(value * 100.0)
    }

    /// Strip color, preserving luminance.
    pub fn grayscale(img: &DynamicImage) -> DynamicImage {
        img.grayscale()
    }

    /// Complement every color channel.
    pub fn invert(img: &DynamicImage) -> DynamicImage {
        let mut out = img.clone();
        out.invert();
        out
    }
}
