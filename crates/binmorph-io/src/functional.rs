use std::path::Path;

use binmorph_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit grayscale.
///
/// The method tries to read from any image format supported by the image crate and
/// converts color images to a single intensity channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A grayscale image containing the image data.
///
/// # Errors
///
/// [`IoError::FileDoesNotExist`] when the path is missing, or a codec error when the
/// data cannot be decoded.
pub fn read_image_gray8(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?
        .into_luma8();

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {} as {}", file_path.display(), size);

    Ok(GrayImage::new(size, img.into_raw())?)
}

/// Writes a grayscale image to the given file path.
///
/// The encoding format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The grayscale image to encode.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let (width, height) = match (u32::try_from(image.width()), u32::try_from(image.height())) {
        (Ok(width), Ok(height)) => (width, height),
        _ => return Err(IoError::InvalidImageSize(image.size())),
    };

    let buffer = image::GrayImage::from_raw(width, height, image.as_slice().to_vec())
        .ok_or(IoError::InvalidImageSize(image.size()))?;

    buffer.save(file_path)?;

    log::debug!("encoded {} to {}", image.size(), file_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use crate::functional::{read_image_gray8, write_image_gray8};
    use binmorph_image::{GrayImage, ImageSize};

    fn gradient(size: ImageSize) -> Result<GrayImage, IoError> {
        let data = (0..size.area()).map(|i| (i * 7 % 256) as u8).collect();
        Ok(GrayImage::new(size, data)?)
    }

    #[test]
    fn read_write_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        std::fs::create_dir_all(tmp_dir.path())?;

        let file_path = tmp_dir.path().join("gradient.png");
        let image = gradient(ImageSize {
            width: 17,
            height: 9,
        })?;
        write_image_gray8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_gray8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_rgb_as_gray() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("white.png");

        image::RgbImage::from_pixel(4, 3, image::Rgb([255, 255, 255])).save(&file_path)?;

        let gray = read_image_gray8(&file_path)?;
        assert_eq!(gray.size(), ImageSize { width: 4, height: 3 });
        assert!(gray.as_slice().iter().all(|&v| v == 255));

        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let result = read_image_gray8("does/not/exist.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn write_oversized_width() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("wide.png");

        // zero rows keep the buffer empty while the width exceeds u32
        let size = ImageSize {
            width: (1usize << 32) + 5,
            height: 0,
        };
        let image = GrayImage::new(size, Vec::new())?;

        let result = write_image_gray8(&file_path, &image);
        assert!(matches!(result, Err(IoError::InvalidImageSize(s)) if s == size));
        assert!(!file_path.exists());

        Ok(())
    }

    #[test]
    fn write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.unknown");
        let image = GrayImage::from_size_val([2, 2].into(), 0);

        let result = write_image_gray8(&file_path, &image);
        assert!(matches!(result, Err(IoError::ImageCodecError(_))));

        Ok(())
    }
}
