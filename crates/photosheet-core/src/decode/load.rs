//! Image decoding with EXIF orientation normalization.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, ExifOrientation};

/// Decode an uploaded JPEG or PNG, applying EXIF orientation correction.
///
/// The result is upright: all downstream crop and layout math works on
/// the dimensions the user sees. HEIC conversion happens before this
/// call, outside the core.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` when the bytes cannot be read as
/// a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    // Extract EXIF orientation before decoding
    let orientation = extract_orientation(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(oriented.into_rgb8()))
}

/// Extract the EXIF orientation tag from image bytes.
///
/// Returns `ExifOrientation::Normal` when no EXIF data is present or the
/// tag cannot be read; a missing tag is not an error.
pub fn get_orientation(bytes: &[u8]) -> ExifOrientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> ExifOrientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return ExifOrientation::from(value);
                }
            }
            ExifOrientation::Normal
        }
        Err(_) => ExifOrientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to a decoded image.
fn apply_orientation(img: DynamicImage, orientation: ExifOrientation) -> DynamicImage {
    match orientation {
        ExifOrientation::Normal => img,
        ExifOrientation::FlipHorizontal => img.fliph(),
        ExifOrientation::Rotate180 => img.rotate180(),
        ExifOrientation::FlipVertical => img.flipv(),
        ExifOrientation::Transpose => img.rotate90().fliph(),
        ExifOrientation::Rotate90CW => img.rotate90(),
        ExifOrientation::Transverse => img.rotate270().fliph(),
        ExifOrientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    /// Encode a small gradient image as PNG bytes.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 0])
        });
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_valid_png() {
        let bytes = png_bytes(8, 6);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.width, 8);
        assert_eq!(decoded.height, 6);
        assert_eq!(decoded.pixels.len(), 8 * 6 * 3);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_orientation_default_without_exif() {
        let bytes = png_bytes(4, 4);
        assert_eq!(get_orientation(&bytes), ExifOrientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(6, 4));
        let rotated = apply_orientation(img, ExifOrientation::Rotate90CW);
        assert_eq!(rotated.width(), 4);
        assert_eq!(rotated.height(), 6);
    }

    #[test]
    fn test_apply_orientation_normal_is_identity() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(6, 4));
        let out = apply_orientation(img, ExifOrientation::Normal);
        assert_eq!(out.width(), 6);
        assert_eq!(out.height(), 4);
    }

    #[test]
    fn test_apply_orientation_flip_reverses_rows() {
        let img = RgbImage::from_fn(2, 1, |x, _| image::Rgb([x as u8, 0, 0]));
        let flipped = apply_orientation(
            DynamicImage::ImageRgb8(img),
            ExifOrientation::FlipHorizontal,
        );
        let rgb = flipped.into_rgb8();
        assert_eq!(rgb.get_pixel(0, 0).0[0], 1);
        assert_eq!(rgb.get_pixel(1, 0).0[0], 0);
    }
}
