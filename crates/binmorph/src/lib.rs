#![deny(missing_docs)]
#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use binmorph_image as image;

#[doc(inline)]
pub use binmorph_imgproc as imgproc;

#[doc(inline)]
pub use binmorph_io as io;

/// Binarize an image file and write its dilation, erosion, opening and closing.
pub mod pipeline;
