#![deny(missing_docs)]
//! Binary field and grayscale image types for morphological processing

/// image representation for thresholding and encoding purposes.
pub mod image;

/// two dimensional binary field used by the morphology operations.
pub mod binary;

/// Error types for the image module.
pub mod error;

pub use crate::binary::BinaryField;
pub use crate::error::ImageError;
pub use crate::image::{GrayImage, ImageSize};
