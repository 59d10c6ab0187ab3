/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Structuring element utilities.
pub mod element;
pub use element::{KernelShape, StructuringElement};

/// Dilation, erosion, opening and closing over binary fields.
pub mod ops;
pub use ops::{
    close, close_with_strategy, dilate, dilate_with_strategy, erode, erode_with_strategy, open,
    open_with_strategy, MorphOp,
};
