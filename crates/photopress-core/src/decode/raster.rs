//! Raster decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an encoded image (JPEG, PNG, GIF, WebP or BMP), applying EXIF
/// orientation correction.
///
/// The format is guessed from the content, not from any declared MIME type.
/// Transparent pixels are composited onto black, which is what a canvas
/// produces when exporting to a format without alpha.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for empty input,
/// `DecodeError::InvalidFormat` if the format cannot be recognised, and
/// `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = read_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);

    tracing::debug!(
        width = oriented.width(),
        height = oriented.height(),
        ?orientation,
        swapped = orientation.swaps_dimensions(),
        "decoded image"
    );

    Ok(DecodedImage::from_rgb_image(flatten_onto_black(oriented)))
}

/// Decode an encoded image without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = read_dynamic(bytes)?;
    Ok(DecodedImage::from_rgb_image(flatten_onto_black(img)))
}

/// Extract EXIF orientation value from encoded bytes.
///
/// Returns `Orientation::Normal` when no EXIF data is present.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn read_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

fn flatten_onto_black(img: DynamicImage) -> image::RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = image::RgbImage::new(width, height);

    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let scale = |c: u8| ((c as u16 * a as u16 + 127) / 255) as u8;
        dst.0 = [scale(r), scale(g), scale(b)];
    }

    out
}

/// Insert an EXIF APP1 segment carrying only an Orientation tag right after
/// the SOI marker of `jpeg`.
#[cfg(test)]
pub(crate) fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8], "not a JPEG");

    let [hi, lo] = orientation.to_be_bytes();
    let mut tiff = vec![
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // big-endian header, IFD0 at 8
        0x00, 0x01, // one entry
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, hi, lo, 0x00, 0x00, // Orientation SHORT
        0x00, 0x00, 0x00, 0x00, // no next IFD
    ];
    let mut payload = b"Exif\0\0".to_vec();
    payload.append(&mut tiff);

    let segment_len = (payload.len() + 2) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[0..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}
