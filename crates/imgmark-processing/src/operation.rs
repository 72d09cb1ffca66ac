//! The six user-facing transformations.
//!
//! Each `apply` call is independent and idempotent: decode the source,
//! apply one effect, encode at maximum quality to the derived output
//! name. Source files are never modified.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::ProcessingError;
use crate::image::{encode, ImageFilters, Watermark};
use crate::store::{derive_output_name, ImageStore};

/// One user-requested transformation with its parameters.
#[derive(Clone, Debug)]
pub enum Operation {
    TextWatermark { text: String },
    ImageWatermark { watermark: String },
    Brighten { value: f32 },
    Contrast { value: f32 },
    Grayscale,
    Invert,
}

impl Operation {
    /// Token inserted into the derived output filename.
    pub fn suffix(&self) -> &'static str {
        match self {
            Operation::TextWatermark { .. } | Operation::ImageWatermark { .. } => "with-watermark",
            Operation::Brighten { .. } => "modified-brightness",
            Operation::Contrast { .. } => "modified-contrast",
            Operation::Grayscale => "b-and-w",
            Operation::Invert => "inverted",
        }
    }

    /// Line printed to the user after the operation succeeds.
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::TextWatermark { .. } => "Text watermark has been added.",
            Operation::ImageWatermark { .. } => "Image watermark has been added.",
            Operation::Brighten { .. } => "Image brightness has been increased.",
            Operation::Contrast { .. } => "Image contrast has been increased.",
            Operation::Grayscale => "Image colors were removed.",
            Operation::Invert => "Image has been inverted.",
        }
    }
}

fn decode(path: &Path) -> Result<DynamicImage, ProcessingError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?)
}

/// Apply `op` to `input`, a bare filename inside `store`, writing the
/// result under the derived output name. Returns the output filename.
pub fn apply(store: &ImageStore, input: &str, op: &Operation) -> Result<String, ProcessingError> {
    let img = decode(&store.resolve(input))?;

    let transformed = match op {
        Operation::TextWatermark { text } => Watermark::text(&img, text)?,
        Operation::ImageWatermark { watermark } => {
            let overlay = decode(&store.resolve(watermark))?;
            Watermark::image(&img, &overlay)
        }
        Operation::Brighten { value } => ImageFilters::brighten(&img, *value),
        Operation::Contrast { value } => ImageFilters::contrast(&img, *value),
        Operation::Grayscale => ImageFilters::grayscale(&img),
        Operation::Invert => ImageFilters::invert(&img),
    };

    let output = derive_output_name(input, op.suffix());
    encode::save_max_quality(&transformed, &store.resolve(&output))?;

    tracing::debug!(input = input, output = %output, "transformation complete");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn store_with_image(name: &str) -> (TempDir, ImageStore) {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([120, 80, 40])));
        img.save(dir.path().join(name)).unwrap();
        let store = ImageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn text_watermark_writes_derived_output() {
        let (_dir, store) = store_with_image("test.jpg");
        let op = Operation::TextWatermark {
            text: "Hello".to_string(),
        };

        let output = apply(&store, "test.jpg", &op).unwrap();

        assert_eq!(output, "test-with-watermark.jpg");
        assert!(store.exists(&output));
        assert!(store.exists("test.jpg"), "source must be untouched");
    }

    #[test]
    fn image_watermark_writes_derived_output() {
        let (dir, store) = store_with_image("test.jpg");
        let mark = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([0, 0, 0])));
        mark.save(dir.path().join("logo.png")).unwrap();

        let op = Operation::ImageWatermark {
            watermark: "logo.png".to_string(),
        };
        let output = apply(&store, "test.jpg", &op).unwrap();

        assert_eq!(output, "test-with-watermark.jpg");
        assert!(store.exists(&output));
    }

    #[test]
    fn edits_use_their_own_suffixes() {
        let (_dir, store) = store_with_image("test.jpg");

        let cases = [
            (Operation::Brighten { value: 0.2 }, "test-modified-brightness.jpg"),
            (Operation::Contrast { value: 0.2 }, "test-modified-contrast.jpg"),
            (Operation::Grayscale, "test-b-and-w.jpg"),
            (Operation::Invert, "test-inverted.jpg"),
        ];
        for (op, expected) in cases {
            let output = apply(&store, "test.jpg", &op).unwrap();
            assert_eq!(output, expected);
            assert!(store.exists(&output));
        }
    }

    #[test]
    fn out_of_range_brightness_still_transforms() {
        let (_dir, store) = store_with_image("test.jpg");

        let output = apply(&store, "test.jpg", &Operation::Brighten { value: 5.0 }).unwrap();
        let img = image::open(store.resolve(&output)).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn missing_source_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let result = apply(&store, "absent.jpg", &Operation::Invert);
        assert!(result.is_err());
        assert!(!store.exists("absent-inverted.jpg"));
    }

    #[test]
    fn corrupt_source_is_reported_not_panicked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.jpg"), b"not an image").unwrap();
        let store = ImageStore::new(dir.path());

        let result = apply(&store, "bad.jpg", &Operation::Grayscale);
        assert!(matches!(result, Err(ProcessingError::Codec(_))));
    }

    #[test]
    fn success_messages_are_fixed_per_operation() {
        let text = Operation::TextWatermark {
            text: String::new(),
        };
        assert_eq!(text.success_message(), "Text watermark has been added.");
        assert_eq!(
            Operation::Grayscale.success_message(),
            "Image colors were removed."
        );
        assert_eq!(
            Operation::Invert.success_message(),
            "Image has been inverted."
        );
    }
}
