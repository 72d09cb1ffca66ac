//! imgmark-processing — stateless image transformations for the imgmark
//! CLI.
//!
//! Six operations (text watermark, image watermark, brighten, contrast,
//! grayscale, invert), each following one template: decode the source,
//! apply the effect, encode at maximum quality to a name derived by
//! inserting the operation's suffix before the file extension.

pub mod error;
pub mod image;
pub mod operation;
pub mod store;

pub use error::ProcessingError;
pub use operation::{apply, Operation};
pub use store::{derive_output_name, ImageStore};
