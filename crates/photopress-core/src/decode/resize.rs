//! Width-bound downscaling.
//!
//! All functions return new `DecodedImage` instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either target dimension is zero,
/// and `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image's dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Downscale an image so its width does not exceed `max_width`.
///
/// Height follows the aspect ratio. Images already within the bound are
/// returned unchanged; nothing is ever upscaled.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if `max_width` is zero.
pub fn resize_to_width(
    image: &DecodedImage,
    max_width: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_width == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let (width, height) = calculate_width_bound_dimensions(image.width, image.height, max_width);
    resize(image, width, height, filter)
}

/// Target dimensions for a width-bound downscale.
///
/// When `width > max_width` the result is
/// `(max_width, round(height * max_width / width))`, with the height
/// clamped to at least one pixel. Otherwise the input is returned as is.
pub fn calculate_width_bound_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }

    let new_height = (height as f64 * max_width as f64 / width as f64).round() as u32;
    (max_width, new_height.max(1))
}
