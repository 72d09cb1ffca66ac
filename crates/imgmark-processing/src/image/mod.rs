//! Image effect implementations.
//!
//! - Watermark compositing (text and image overlays)
//! - Pixel filters (brightness, contrast, grayscale, inversion)
//! - Quality-controlled encoding

pub mod encode;
pub mod filters;
pub mod watermark;

pub use filters::ImageFilters;
pub use watermark::Watermark;
