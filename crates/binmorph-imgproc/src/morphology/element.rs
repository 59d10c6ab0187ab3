use binmorph_image::ImageSize;

use super::MorphologyError;

/// Shapes of morphological structuring elements.
///
/// All shapes are square, `size x size`, and share the element origin at
/// `(size / 2, size / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelShape {
    /// A rectangular box structuring element.
    ///
    /// All cells within the box are active.
    Box {
        /// The side length of the square kernel (size x size).
        size: usize,
    },

    /// A cross (plus) shaped structuring element.
    ///
    /// Only cells along the horizontal and vertical center lines are active.
    Cross {
        /// The side length of the square cross kernel (size x size).
        size: usize,
    },

    /// The center row of a square kernel. Acts along the x axis only.
    HorizontalLine {
        /// The side length of the square kernel (size x size).
        size: usize,
    },

    /// The center column of a square kernel. Acts along the y axis only.
    VerticalLine {
        /// The side length of the square kernel (size x size).
        size: usize,
    },
}

impl Default for KernelShape {
    fn default() -> Self {
        KernelShape::Cross { size: 3 }
    }
}

/// A binary structuring element.
///
/// The element defines the neighborhood probed by the morphological operations. It
/// stores a row-major mask where `true` marks an active cell. The cell at
/// [`StructuringElement::origin`] is aligned with the pixel under test.
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::morphology::{KernelShape, StructuringElement};
///
/// let element = StructuringElement::from_shape(KernelShape::Cross { size: 3 }).unwrap();
/// assert_eq!(element.width(), 3);
/// assert_eq!(element.height(), 3);
/// assert_eq!(element.origin(), (1, 1));
/// assert_eq!(element.num_active(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    data: Vec<bool>,
    size: ImageSize,
}

impl StructuringElement {
    /// Create a structuring element from a row-major mask.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::EmptyKernel`] when either dimension is zero, and
    /// [`MorphologyError::InvalidDataLength`] when `data` does not hold `width * height` cells.
    pub fn new(size: ImageSize, data: Vec<bool>) -> Result<Self, MorphologyError> {
        if size.width == 0 || size.height == 0 {
            return Err(MorphologyError::EmptyKernel);
        }

        if data.len() != size.area() {
            return Err(MorphologyError::InvalidDataLength(data.len(), size.area()));
        }

        Ok(Self { data, size })
    }

    /// Create a structuring element from nested rows of 0/1 values.
    ///
    /// Any nonzero value marks an active cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binmorph_imgproc::morphology::StructuringElement;
    ///
    /// let element = StructuringElement::from_rows(&[[0u8, 1, 0], [1, 1, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!(element.get(0, 1), Some(true));
    /// assert_eq!(element.get(0, 0), Some(false));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MorphologyError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(MorphologyError::EmptyKernel);
        }

        let mut data = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MorphologyError::NonRectangularKernel(i, row.len(), width));
            }
            data.extend(row.iter().map(|&v| v != 0));
        }

        Self::new(
            ImageSize {
                width,
                height: rows.len(),
            },
            data,
        )
    }

    /// Create a structuring element from a [`KernelShape`].
    pub fn from_shape(shape: KernelShape) -> Result<Self, MorphologyError> {
        match shape {
            KernelShape::Box { size } => Self::square(size, |_, _| true),
            KernelShape::Cross { size } => {
                let mid = size / 2;
                Self::square(size, |r, c| r == mid || c == mid)
            }
            KernelShape::HorizontalLine { size } => {
                let mid = size / 2;
                Self::square(size, |r, _| r == mid)
            }
            KernelShape::VerticalLine { size } => {
                let mid = size / 2;
                Self::square(size, |_, c| c == mid)
            }
        }
    }

    fn square(size: usize, active: impl Fn(usize, usize) -> bool) -> Result<Self, MorphologyError> {
        let data = (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .map(|(r, c)| active(r, c))
            .collect();

        Self::new(
            ImageSize {
                width: size,
                height: size,
            },
            data,
        )
    }

    /// Get a reference to the row-major mask.
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Get the size of the structuring element.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the structuring element.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the structuring element.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the origin as `(row, col)`, i.e. `(height / 2, width / 2)`.
    pub fn origin(&self) -> (usize, usize) {
        (self.height() / 2, self.width() / 2)
    }

    /// Get the cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.data.get(row * self.width() + col).copied()
    }

    /// Positions `(row, col)` of the active cells, in row-major order.
    pub fn active_offsets(&self) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(idx, _)| (idx / self.width(), idx % self.width()))
            .collect()
    }

    /// Number of active cells.
    pub fn num_active(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Whether the element is unchanged by a point reflection about its origin.
    ///
    /// Even-sized dimensions are never symmetric since the origin is not centered.
    pub fn is_symmetric(&self) -> bool {
        if self.height() % 2 == 0 || self.width() % 2 == 0 {
            return false;
        }
        let (h, w) = (self.height(), self.width());
        (0..h).all(|r| (0..w).all(|c| self.get(r, c) == self.get(h - 1 - r, w - 1 - c)))
    }
}
