/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// The structuring element has zero rows or zero columns.
    #[error("Structuring element must have at least one row and one column")]
    EmptyKernel,

    /// The structuring element rows have inconsistent lengths.
    #[error("Structuring element row {0} has {1} cells, expected {2}")]
    NonRectangularKernel(usize, usize, usize),

    /// The data length does not match the structuring element size.
    #[error("Data length ({0}) does not match the structuring element size ({1})")]
    InvalidDataLength(usize, usize),
}
