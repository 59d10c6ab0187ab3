/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a row of a nested grid has a different length than the first row.
    #[error("Row {0} has {1} cells, expected {2}")]
    NonRectangularRows(usize, usize, usize),
}
