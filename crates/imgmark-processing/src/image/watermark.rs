//! Watermark compositing: centered text and centered image overlays.

use ab_glyph::{FontRef, PxScale};
use image::{imageops, DynamicImage, Rgba};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::error::ProcessingError;

const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");
const FONT_SCALE: f32 = 32.0;
const WATERMARK_OPACITY: f32 = 0.5;

pub struct Watermark;

impl Watermark {
    /// Draw `text` in 32px bold white, centered both horizontally and
    /// vertically over the full image bounds.
    pub fn text(img: &DynamicImage, text: &str) -> Result<DynamicImage, ProcessingError> {
        let font = FontRef::try_from_slice(FONT_BYTES)?;
        let scale = PxScale::from(FONT_SCALE);

        let mut canvas = img.to_rgba8();
        let (width, height) = canvas.dimensions();
        let (text_width, text_height) = text_size(scale, &font, text);
        let x = (width.saturating_sub(text_width) / 2) as i32;
        let y = (height.saturating_sub(text_height) / 2) as i32;

        draw_text_mut(
            &mut canvas,
            Rgba([255, 255, 255, 255]),
            x,
            y,
            scale,
            &font,
            text,
        );

        Ok(DynamicImage::ImageRgba8(canvas))
    }

    /// Overlay `watermark` centered on `img`, blended over-composite with
    /// the watermark's alpha scaled to 50%.
    pub fn image(img: &DynamicImage, watermark: &DynamicImage) -> DynamicImage {
        let mut canvas = img.to_rgba8();
        let mut overlay = watermark.to_rgba8();

        for pixel in overlay.pixels_mut() {
            pixel[3] = (pixel[3] as f32 * WATERMARK_OPACITY) as u8;
        }

        // Offsets go negative when the watermark is larger than the base;
        // `overlay` clips them so the watermark's center stays on center.
        let (img_width, img_height) = canvas.dimensions();
        let (wm_width, wm_height) = overlay.dimensions();
        let x = (img_width as i64 - wm_width as i64) / 2;
        let y = (img_height as i64 - wm_height as i64) / 2;

        imageops::overlay(&mut canvas, &overlay, x, y);
        DynamicImage::ImageRgba8(canvas)
    }
}
