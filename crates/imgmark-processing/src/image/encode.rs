//! Quality-controlled encode-to-path.

use std::fs;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use crate::error::ProcessingError;

const JPEG_QUALITY: u8 = 100;

/// Write `img` to `path`, choosing the format from the file extension.
/// JPEG is encoded at quality 100 (alpha dropped, JPEG has none); other
/// formats use their default encoder settings. An unrecognizable
/// extension is a codec failure.
pub fn save_max_quality(img: &DynamicImage, path: &Path) -> Result<(), ProcessingError> {
    let format = ImageFormat::from_path(path)?;
    match format {
        ImageFormat::Jpeg => {
            let mut buffer = Vec::new();
            let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
            img.to_rgb8().write_with_encoder(encoder)?;
            fs::write(path, buffer)?;
            Ok(())
        }
        _ => Ok(img.save_with_format(path, format)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn create_test_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255])))
    }

    #[test]
    fn saves_jpeg_from_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        save_max_quality(&create_test_image(), &path).unwrap();

        let reopened = image::open(&path).unwrap();
        assert_eq!(reopened.width(), 32);
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        save_max_quality(&create_test_image(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unknown_extension_is_a_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xyz");

        let err = save_max_quality(&create_test_image(), &path).unwrap_err();
        assert!(matches!(err, ProcessingError::Codec(_)));
    }
}
