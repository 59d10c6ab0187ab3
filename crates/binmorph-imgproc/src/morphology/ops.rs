use binmorph_image::BinaryField;

use super::element::StructuringElement;
use crate::parallel::{self, ExecutionStrategy};

#[derive(Clone, Copy)]
enum WindowTest {
    // at least one active cell lands on foreground
    Any,
    // every active cell lands on foreground
    All,
}

/// Probe every pixel of `src` with the structuring element placed at its origin.
///
/// The source is zero padded by `origin` on the top/left and by the remaining kernel
/// extent on the bottom/right, so the window of output pixel `(r, c)` starts at
/// `(r, c)` in the padded field.
fn window_test(
    src: &BinaryField,
    element: &StructuringElement,
    test: WindowTest,
    strategy: ExecutionStrategy,
) -> BinaryField {
    let mut dst = BinaryField::from_size_val(src.size(), false);
    if src.is_empty() {
        return dst;
    }

    let (orow, ocol) = element.origin();
    let padded = src.pad(
        orow,
        element.height() - orow - 1,
        ocol,
        element.width() - ocol - 1,
        false,
    );

    let offsets = element.active_offsets();
    let padded_width = padded.width();
    let padded_data = padded.as_slice();

    parallel::for_each_row_mut(
        dst.as_slice_mut(),
        src.width(),
        strategy,
        |r, row_chunk| {
            for (c, out) in row_chunk.iter_mut().enumerate() {
                let mut hits = offsets
                    .iter()
                    .map(|&(br, bc)| padded_data[(r + br) * padded_width + c + bc]);

                *out = match test {
                    WindowTest::Any => hits.any(|v| v),
                    WindowTest::All => hits.all(|v| v),
                };
            }
        },
    );

    dst
}

/// Dilate a binary field using a [`StructuringElement`].
///
/// Dilation expands foreground regions. An output pixel is foreground when any active
/// cell of the element, centered at that pixel, overlaps a foreground pixel. Pixels
/// outside the field are background.
///
/// # Arguments
///
/// * `src` - The source field.
/// * `element` - The structuring element.
///
/// # Returns
///
/// A new field with the same size as `src`.
///
/// # Example
///
/// ```rust
/// use binmorph_image::BinaryField;
/// use binmorph_imgproc::morphology::{dilate, KernelShape, StructuringElement};
///
/// let src = BinaryField::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
/// let element = StructuringElement::from_shape(KernelShape::Cross { size: 3 }).unwrap();
///
/// let dst = dilate(&src, &element);
/// assert_eq!(dst.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]);
/// ```
pub fn dilate(src: &BinaryField, element: &StructuringElement) -> BinaryField {
    dilate_with_strategy(src, element, ExecutionStrategy::Serial)
}

/// Dilate a binary field, computing the output rows with the given [`ExecutionStrategy`].
pub fn dilate_with_strategy(
    src: &BinaryField,
    element: &StructuringElement,
    strategy: ExecutionStrategy,
) -> BinaryField {
    window_test(src, element, WindowTest::Any, strategy)
}

/// Erode a binary field using a [`StructuringElement`].
///
/// Erosion shrinks foreground regions. An output pixel stays foreground only when every
/// active cell of the element, centered at that pixel, lands on a foreground pixel.
/// Pixels outside the field are background, so windows crossing the border fail.
/// An element without active cells yields an all-foreground field.
///
/// # Arguments
///
/// * `src` - The source field.
/// * `element` - The structuring element.
///
/// # Returns
///
/// A new field with the same size as `src`.
pub fn erode(src: &BinaryField, element: &StructuringElement) -> BinaryField {
    erode_with_strategy(src, element, ExecutionStrategy::Serial)
}

/// Erode a binary field, computing the output rows with the given [`ExecutionStrategy`].
pub fn erode_with_strategy(
    src: &BinaryField,
    element: &StructuringElement,
    strategy: ExecutionStrategy,
) -> BinaryField {
    window_test(src, element, WindowTest::All, strategy)
}

/// Open a binary field: erosion followed by dilation.
///
/// Removes foreground protrusions smaller than the element while keeping the extent of
/// larger shapes.
pub fn open(src: &BinaryField, element: &StructuringElement) -> BinaryField {
    open_with_strategy(src, element, ExecutionStrategy::Serial)
}

/// Open a binary field with the given [`ExecutionStrategy`].
pub fn open_with_strategy(
    src: &BinaryField,
    element: &StructuringElement,
    strategy: ExecutionStrategy,
) -> BinaryField {
    let eroded = erode_with_strategy(src, element, strategy);
    dilate_with_strategy(&eroded, element, strategy)
}

/// Close a binary field: dilation followed by erosion.
///
/// Fills background gaps and holes smaller than the element.
pub fn close(src: &BinaryField, element: &StructuringElement) -> BinaryField {
    close_with_strategy(src, element, ExecutionStrategy::Serial)
}

/// Close a binary field with the given [`ExecutionStrategy`].
pub fn close_with_strategy(
    src: &BinaryField,
    element: &StructuringElement,
    strategy: ExecutionStrategy,
) -> BinaryField {
    let dilated = dilate_with_strategy(src, element, strategy);
    erode_with_strategy(&dilated, element, strategy)
}

/// The morphological operations as a value, for callers that select them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphOp {
    /// See [`dilate`].
    Dilate,
    /// See [`erode`].
    Erode,
    /// See [`open`].
    Open,
    /// See [`close`].
    Close,
}

impl MorphOp {
    /// All operations, in the order dilation, erosion, opening, closing.
    pub const ALL: [MorphOp; 4] = [MorphOp::Dilate, MorphOp::Erode, MorphOp::Open, MorphOp::Close];

    /// Human readable name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            MorphOp::Dilate => "dilation",
            MorphOp::Erode => "erosion",
            MorphOp::Open => "opening",
            MorphOp::Close => "closing",
        }
    }

    /// Apply the operation with the given [`ExecutionStrategy`].
    pub fn apply(
        &self,
        src: &BinaryField,
        element: &StructuringElement,
        strategy: ExecutionStrategy,
    ) -> BinaryField {
        match self {
            MorphOp::Dilate => dilate_with_strategy(src, element, strategy),
            MorphOp::Erode => erode_with_strategy(src, element, strategy),
            MorphOp::Open => open_with_strategy(src, element, strategy),
            MorphOp::Close => close_with_strategy(src, element, strategy),
        }
    }
}

impl std::fmt::Display for MorphOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::{KernelShape, MorphologyError};
    use binmorph_image::ImageSize;

    fn cross() -> Result<StructuringElement, MorphologyError> {
        StructuringElement::from_shape(KernelShape::Cross { size: 3 })
    }

    fn square() -> Result<StructuringElement, MorphologyError> {
        StructuringElement::from_shape(KernelShape::Box { size: 3 })
    }

    #[test]
    fn dilate_single_pixel_cross() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]])?;
        let dst = dilate(&src, &cross()?);
        assert_eq!(
            dst.to_rows(),
            vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]
        );
        Ok(())
    }

    #[test]
    fn erode_single_pixel_cross() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]])?;
        let dst = erode(&src, &cross()?);
        assert_eq!(dst.size(), src.size());
        assert_eq!(dst.count_foreground(), 0);
        Ok(())
    }

    #[test]
    fn erode_full_field_zero_border() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_size_val([3, 3].into(), true);
        let dst = erode(&src, &square()?);
        assert_eq!(
            dst.to_rows(),
            vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]
        );
        Ok(())
    }

    #[test]
    fn dilate_at_border() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[[1u8, 0, 0], [0, 0, 0]])?;
        let dst = dilate(&src, &square()?);
        assert_eq!(dst.to_rows(), vec![vec![1, 1, 0], vec![1, 1, 0]]);
        Ok(())
    }

    #[test]
    fn even_kernel_origin() -> Result<(), Box<dyn std::error::Error>> {
        // origin (1, 1): the window of (r, c) spans rows r-1..=r and cols c-1..=c
        let element = StructuringElement::from_rows(&[[1u8, 1], [1, 1]])?;
        let src = BinaryField::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]])?;

        let dilated = dilate(&src, &element);
        assert_eq!(
            dilated.to_rows(),
            vec![vec![0, 0, 0], vec![0, 1, 1], vec![0, 1, 1]]
        );

        let full = BinaryField::from_size_val([3, 3].into(), true);
        let eroded = erode(&full, &element);
        assert_eq!(
            eroded.to_rows(),
            vec![vec![0, 0, 0], vec![0, 1, 1], vec![0, 1, 1]]
        );
        Ok(())
    }

    #[test]
    fn inactive_kernel() -> Result<(), Box<dyn std::error::Error>> {
        let element = StructuringElement::from_rows(&[[0u8, 0, 0], [0, 0, 0], [0, 0, 0]])?;
        let src = BinaryField::from_rows(&[[1u8, 0, 1, 1], [0, 1, 0, 0]])?;

        let dilated = dilate(&src, &element);
        assert_eq!(dilated, BinaryField::from_size_val(src.size(), false));

        let eroded = erode(&src, &element);
        assert_eq!(eroded, BinaryField::from_size_val(src.size(), true));
        Ok(())
    }

    #[test]
    fn empty_field() -> Result<(), MorphologyError> {
        let element = cross()?;
        for size in [
            ImageSize::default(),
            ImageSize {
                width: 0,
                height: 4,
            },
            ImageSize {
                width: 4,
                height: 0,
            },
        ] {
            let src = BinaryField::from_size_val(size, false);
            for op in MorphOp::ALL {
                let dst = op.apply(&src, &element, ExecutionStrategy::ParallelRows);
                assert_eq!(dst.size(), size);
                assert!(dst.is_empty());
            }
        }
        Ok(())
    }

    #[test]
    fn open_removes_small_protrusion() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[
            [0u8, 0, 0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0, 0, 0],
            [0, 1, 1, 1, 1, 0, 0],
            [0, 1, 1, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 1],
        ])?;
        let dst = open(&src, &square()?);
        assert_eq!(
            dst.to_rows(),
            vec![
                vec![0, 0, 0, 0, 0, 0, 0],
                vec![0, 1, 1, 1, 0, 0, 0],
                vec![0, 1, 1, 1, 0, 0, 0],
                vec![0, 1, 1, 1, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0],
            ]
        );
        Ok(())
    }

    #[test]
    fn close_fills_hole() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[
            [0u8, 0, 0, 0, 0, 0, 0],
            [0, 1, 1, 1, 1, 1, 0],
            [0, 1, 1, 1, 1, 1, 0],
            [0, 1, 1, 0, 1, 1, 0],
            [0, 1, 1, 1, 1, 1, 0],
            [0, 1, 1, 1, 1, 1, 0],
            [0, 0, 0, 0, 0, 0, 0],
        ])?;
        let dst = close(&src, &square()?);
        let mut expected = src.clone();
        expected.as_slice_mut()[3 * 7 + 3] = true;
        assert_eq!(dst, expected);
        Ok(())
    }

    #[test]
    fn strategies_agree() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[
            [1u8, 0, 1, 1, 0],
            [0, 1, 1, 0, 0],
            [1, 1, 1, 1, 1],
            [0, 0, 1, 0, 1],
        ])?;
        let element = cross()?;
        for op in MorphOp::ALL {
            assert_eq!(
                op.apply(&src, &element, ExecutionStrategy::Serial),
                op.apply(&src, &element, ExecutionStrategy::ParallelRows),
                "{op} differs between strategies"
            );
        }
        Ok(())
    }

    #[test]
    fn morph_op_names() {
        let names: Vec<_> = MorphOp::ALL.iter().map(MorphOp::name).collect();
        assert_eq!(names, vec!["dilation", "erosion", "opening", "closing"]);
    }

    #[test]
    fn input_is_not_mutated() -> Result<(), Box<dyn std::error::Error>> {
        let src = BinaryField::from_rows(&[[1u8, 0], [0, 1]])?;
        let copy = src.clone();
        let element = StructuringElement::from_rows(&[[1u8, 1, 1]])?;
        let closed = close(&src, &element);
        assert_eq!(src, copy);
        assert_eq!(closed.size(), src.size());
        Ok(())
    }
}
