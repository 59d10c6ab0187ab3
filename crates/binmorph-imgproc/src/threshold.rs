use binmorph_image::{BinaryField, GrayImage};

use crate::parallel::{self, ExecutionStrategy};

/// Apply a binary threshold to a grayscale image.
///
/// A pixel becomes foreground when its intensity is strictly greater than `threshold`.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `threshold` - The intensity cutoff.
/// * `strategy` - The execution strategy.
///
/// # Returns
///
/// A binary field with the same size as the input image.
///
/// # Examples
///
/// ```
/// use binmorph_image::{GrayImage, ImageSize};
/// use binmorph_imgproc::parallel::ExecutionStrategy;
/// use binmorph_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 127, 128];
/// let image = GrayImage::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let binary = threshold_binary(&image, 127, ExecutionStrategy::Serial);
/// assert_eq!(binary.to_rows(), vec![vec![0, 1], vec![0, 1], vec![0, 1]]);
/// ```
pub fn threshold_binary(
    src: &GrayImage,
    threshold: u8,
    strategy: ExecutionStrategy,
) -> BinaryField {
    let mut dst = BinaryField::from_size_val(src.size(), false);

    parallel::for_each_pair(
        src.as_slice(),
        dst.as_slice_mut(),
        src.width(),
        strategy,
        |src_pixel, dst_pixel| {
            *dst_pixel = *src_pixel > threshold;
        },
    );

    dst
}

/// Encode a binary field as a grayscale image.
///
/// Foreground cells map to `255` (white) and background cells to `0` (black).
pub fn gray_from_binary(src: &BinaryField) -> GrayImage {
    let mut dst = GrayImage::from_size_val(src.size(), 0);

    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(&cell, pixel)| *pixel = if cell { u8::MAX } else { 0 });

    dst
}
