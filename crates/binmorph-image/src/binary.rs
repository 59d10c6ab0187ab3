use std::ops;

use crate::error::ImageError;
use crate::image::ImageSize;

/// A two dimensional field of foreground (`true`) and background (`false`) cells.
///
/// Cells are indexed by `(row, col)` in row-major order, with row 0 at the top.
/// Every row holds exactly `width` cells. Operations never mutate a field in place,
/// they always return a freshly allocated one.
///
/// # Examples
///
/// ```
/// use binmorph_image::BinaryField;
///
/// let field = BinaryField::from_rows(&[vec![0u8, 1, 0], vec![1, 1, 1]]).unwrap();
///
/// assert_eq!(field.height(), 2);
/// assert_eq!(field.width(), 3);
/// assert!(field[(1, 0)]);
/// assert_eq!(field.get(0, 0), Some(false));
/// assert_eq!(field.get(2, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryField {
    size: ImageSize,
    data: Vec<bool>,
}

impl BinaryField {
    /// Create a new field from row-major cell data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the field in cells.
    /// * `data` - The cell values, `width * height` of them.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the field size, an error is returned.
    pub fn new(size: ImageSize, data: Vec<bool>) -> Result<Self, ImageError> {
        if data.len() != size.area() {
            return Err(ImageError::InvalidDataLength(data.len(), size.area()));
        }

        Ok(Self { size, data })
    }

    /// Create a new field with every cell set to `val`.
    pub fn from_size_val(size: ImageSize, val: bool) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }

    /// Create a field from nested rows of 0/1 values.
    ///
    /// Any nonzero value is foreground. An empty slice yields the 0x0 field.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NonRectangularRows`] when a row length differs from the first row.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ImageError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(width * rows.len());

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ImageError::NonRectangularRows(i, row.len(), width));
            }
            data.extend(row.iter().map(|&v| v != 0));
        }

        let size = ImageSize {
            width,
            height: rows.len(),
        };

        Self::new(size, data)
    }

    /// Get the size of the field in cells.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the field.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the field.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Whether the field has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the cell at `(row, col)`, or `None` when it lies outside the field.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.data.get(row * self.width() + col).copied()
    }

    /// Get the cell data in row-major order.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Get the mutable cell data in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [bool] {
        &mut self.data
    }

    /// Number of foreground cells.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Pad the field on each side with a constant value.
    ///
    /// The result has size `(height + top + bottom) x (width + left + right)`, with the
    /// original cells placed at offset `(top, left)` and every other cell set to `fill`.
    ///
    /// # Arguments
    ///
    /// * `top` - Rows added above the field.
    /// * `bottom` - Rows added below the field.
    /// * `left` - Columns added left of the field.
    /// * `right` - Columns added right of the field.
    /// * `fill` - Value of the added cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use binmorph_image::BinaryField;
    ///
    /// let field = BinaryField::from_rows(&[[1u8]]).unwrap();
    /// let padded = field.pad(1, 0, 0, 2, false);
    ///
    /// assert_eq!(padded.to_rows(), vec![vec![0, 0, 0], vec![1, 0, 0]]);
    /// ```
    pub fn pad(&self, top: usize, bottom: usize, left: usize, right: usize, fill: bool) -> Self {
        let size = ImageSize {
            width: self.width() + left + right,
            height: self.height() + top + bottom,
        };
        let mut data = vec![fill; size.area()];

        if self.width() > 0 {
            for (row, src_row) in self.data.chunks_exact(self.width()).enumerate() {
                let start = (row + top) * size.width + left;
                data[start..start + self.width()].copy_from_slice(src_row);
            }
        }

        Self { size, data }
    }

    /// Return the pixelwise complement of the field.
    pub fn complement(&self) -> Self {
        Self {
            size: self.size,
            data: self.data.iter().map(|&v| !v).collect(),
        }
    }

    /// Whether every foreground cell of `self` is also foreground in `other`.
    ///
    /// Fields of different sizes are never subsets of each other.
    pub fn is_subset_of(&self, other: &BinaryField) -> bool {
        self.size == other.size
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| !a || b)
    }

    /// Convert the field into nested rows of 0/1 values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.width() == 0 {
            return vec![Vec::new(); self.height()];
        }
        self.data
            .chunks_exact(self.width())
            .map(|row| row.iter().map(|&v| v as u8).collect())
            .collect()
    }
}

impl ops::Index<(usize, usize)> for BinaryField {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.height() && col < self.width(),
            "cell ({row}, {col}) out of bounds for field of size {}",
            self.size
        );
        &self.data[row * self.width() + col]
    }
}
