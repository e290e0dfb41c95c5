//! Photo compression for upload.
//!
//! [`compress`] takes a captured photo as a data URI, scales it down to a
//! maximum width and re-encodes it as JPEG. Size figures are estimated from
//! the length of the base64 text, not from decoded byte counts, so they line
//! up with what upload code sees on the wire.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{self, DecodeError, FilterType};
use crate::encode::{self, EncodeError, JPEG_MIME};

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Default JPEG quality on the unit scale.
pub const DEFAULT_QUALITY: f32 = 0.6;

/// Ratio of decoded bytes to base64 characters.
const BASE64_BYTES_PER_CHAR: f64 = 0.75;

/// Errors returned by [`compress`].
#[derive(Debug, Error)]
pub enum CompressError {
    /// Options were out of range.
    #[error("Invalid compression options: {0}")]
    InvalidOptions(String),

    /// The input could not be decoded as an image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The resized image could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Compression settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressOptions {
    /// Maximum output width in pixels. Must be positive.
    pub max_width: u32,
    /// JPEG quality in `(0, 1]`; lower is smaller and blurrier.
    pub quality: f32,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl CompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Check that `max_width > 0` and `0 < quality <= 1`.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.max_width == 0 {
            return Err(CompressError::InvalidOptions(
                "max_width must be positive".to_string(),
            ));
        }
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(CompressError::InvalidOptions(format!(
                "quality must be in (0, 1], got {}",
                self.quality
            )));
        }
        Ok(())
    }
}

/// Outcome of a successful [`compress`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    /// `data:image/jpeg;base64,...`
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
    /// Estimated size of the input in KiB.
    pub original_size_kb: f64,
    /// Estimated size of the output in KiB.
    pub compressed_size_kb: f64,
    /// `(1 - compressed / original) * 100`. Negative when the output grew.
    pub reduction_percent: f64,
}

impl CompressionResult {
    /// Whether the image was scaled down.
    pub fn was_resized(&self) -> bool {
        self.width != self.original_width || self.height != self.original_height
    }
}

/// Estimate the decoded size in KiB of a base64-encoded string.
///
/// Returns `0.0` for `None` or an empty string, otherwise
/// `len * 0.75 / 1024`. Header characters of a data URI are counted too;
/// this is an approximation, not an exact byte count.
pub fn estimate_size(encoded: Option<&str>) -> f64 {
    match encoded {
        Some(s) if !s.is_empty() => s.len() as f64 * BASE64_BYTES_PER_CHAR / 1024.0,
        _ => 0.0,
    }
}

/// Downscale an encoded image to `options.max_width` and re-encode it as JPEG.
///
/// Images no wider than the bound keep their dimensions. The output is
/// always JPEG regardless of the input format.
///
/// # Errors
///
/// * `CompressError::InvalidOptions` if the options fail validation
/// * `CompressError::Decode` if the input is not a decodable image
/// * `CompressError::Encode` if JPEG encoding fails
pub fn compress(
    input: &str,
    options: &CompressOptions,
) -> Result<CompressionResult, CompressError> {
    options.validate()?;

    let uri = decode::parse_data_uri(input)?;
    let image = decode::decode_image(&uri.bytes)?;
    let (original_width, original_height) = image.dimensions();

    let resized = decode::resize_to_width(&image, options.max_width, FilterType::Bilinear)?;
    drop(image);

    let jpeg = encode::encode_image(&resized, encode::quality_from_unit(options.quality))?;
    let data_uri = encode::encode_data_uri(JPEG_MIME, &jpeg);

    let original_size_kb = estimate_size(Some(input));
    let compressed_size_kb = estimate_size(Some(&data_uri));
    let reduction_percent = reduction_percent(original_size_kb, compressed_size_kb);

    tracing::info!(
        width = resized.width,
        height = resized.height,
        "compressed image: {:.2}KB -> {:.2}KB ({:.1}% reduction)",
        original_size_kb,
        compressed_size_kb,
        reduction_percent
    );

    Ok(CompressionResult {
        data_uri,
        width: resized.width,
        height: resized.height,
        original_width,
        original_height,
        original_size_kb,
        compressed_size_kb,
        reduction_percent,
    })
}

fn reduction_percent(original: f64, compressed: f64) -> f64 {
    if original <= 0.0 {
        return 0.0;
    }
    (1.0 - compressed / original) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn photo_uri(width: u32, height: u32, format: image::ImageFormat) -> String {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 251) as u8, (y % 241) as u8, ((x * y) % 239) as u8])
        });
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut out, format)
            .unwrap();

        let mime = match format {
            image::ImageFormat::Png => "image/png",
            _ => "image/jpeg",
        };
        encode::encode_data_uri(mime, &out.into_inner())
    }

    fn output_dimensions(result: &CompressionResult) -> (u32, u32) {
        let uri = decode::parse_data_uri(&result.data_uri).unwrap();
        decode::decode_image(&uri.bytes).unwrap().dimensions()
    }

    #[test]
    fn test_estimate_size_empty() {
        assert_eq!(estimate_size(None), 0.0);
        assert_eq!(estimate_size(Some("")), 0.0);
    }

    #[test]
    fn test_estimate_size_formula() {
        assert_eq!(estimate_size(Some("abcd")), 4.0 * 0.75 / 1024.0);
        let s = "A".repeat(4096);
        assert_eq!(estimate_size(Some(&s)), 3.0);
    }

    #[test]
    fn test_default_options() {
        let opts = CompressOptions::default();
        assert_eq!(opts.max_width, 800);
        assert_eq!(opts.quality, 0.6);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        let bad = [
            CompressOptions::new().with_max_width(0),
            CompressOptions::new().with_quality(0.0),
            CompressOptions::new().with_quality(-0.5),
            CompressOptions::new().with_quality(1.01),
            CompressOptions::new().with_quality(f32::NAN),
        ];
        for opts in bad {
            assert!(
                matches!(opts.validate(), Err(CompressError::InvalidOptions(_))),
                "{opts:?} should be rejected"
            );
        }
        assert!(CompressOptions::new().with_quality(1.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_options_checked_before_decode() {
        let result = compress("", &CompressOptions::new().with_max_width(0));
        assert!(matches!(result, Err(CompressError::InvalidOptions(_))));
    }

    #[test]
    fn test_wide_image_is_downscaled() {
        let input = photo_uri(1600, 1200, image::ImageFormat::Jpeg);
        let result = compress(&input, &CompressOptions::default()).unwrap();

        assert_eq!((result.width, result.height), (800, 600));
        assert_eq!((result.original_width, result.original_height), (1600, 1200));
        assert_eq!(output_dimensions(&result), (800, 600));
        assert!(result.was_resized());
    }

    #[test]
    fn test_narrow_image_keeps_dimensions() {
        let input = photo_uri(600, 400, image::ImageFormat::Jpeg);
        let result = compress(&input, &CompressOptions::default()).unwrap();

        assert_eq!((result.width, result.height), (600, 400));
        assert_eq!(output_dimensions(&result), (600, 400));
        assert!(!result.was_resized());
    }

    #[test]
    fn test_exif_rotation_applied_before_bounding() {
        let pixels = vec![90u8; 1600 * 1000 * 3];
        let jpeg = encode::encode_jpeg(&pixels, 1600, 1000, 75).unwrap();
        let rotated = decode::with_exif_orientation(&jpeg, 6);
        let input = encode::encode_data_uri(JPEG_MIME, &rotated);

        let result = compress(&input, &CompressOptions::default()).unwrap();

        assert_eq!((result.original_width, result.original_height), (1000, 1600));
        assert_eq!((result.width, result.height), (800, 1280));
        assert_eq!(output_dimensions(&result), (800, 1280));
    }

    #[test]
    fn test_height_rounding() {
        let input = photo_uri(900, 601, image::ImageFormat::Png);
        let result = compress(&input, &CompressOptions::new().with_max_width(300)).unwrap();
        // 601 * 300 / 900 = 200.33
        assert_eq!((result.width, result.height), (300, 200));
    }

    #[test]
    fn test_output_is_always_jpeg() {
        let input = photo_uri(120, 80, image::ImageFormat::Png);
        let result = compress(&input, &CompressOptions::default()).unwrap();

        assert!(result.data_uri.starts_with("data:image/jpeg;base64,"));
        let uri = decode::parse_data_uri(&result.data_uri).unwrap();
        assert_eq!(uri.format(), Some(decode::ImageFormat::Jpeg));
    }

    #[test]
    fn test_size_statistics() {
        let input = photo_uri(1600, 1200, image::ImageFormat::Png);
        let result = compress(&input, &CompressOptions::default()).unwrap();

        assert_eq!(result.original_size_kb, estimate_size(Some(&input)));
        assert_eq!(
            result.compressed_size_kb,
            estimate_size(Some(&result.data_uri))
        );
        let expected = (1.0 - result.compressed_size_kb / result.original_size_kb) * 100.0;
        assert!((result.reduction_percent - expected).abs() < 1e-9);
        assert!(result.reduction_percent > 0.0);
    }

    #[test]
    fn test_lower_quality_gives_smaller_output() {
        let input = photo_uri(400, 300, image::ImageFormat::Png);
        let low = compress(&input, &CompressOptions::new().with_quality(0.1)).unwrap();
        let high = compress(&input, &CompressOptions::new().with_quality(1.0)).unwrap();
        assert!(low.data_uri.len() < high.data_uri.len());
    }

    #[test]
    fn test_repeated_runs_match() {
        let input = photo_uri(1000, 750, image::ImageFormat::Jpeg);
        let opts = CompressOptions::default();
        let a = compress(&input, &opts).unwrap();
        let b = compress(&input, &opts).unwrap();

        assert_eq!((a.width, a.height), (b.width, b.height));
        assert_eq!(a.data_uri.len(), b.data_uri.len());
    }

    #[test]
    fn test_bare_base64_input() {
        let input = photo_uri(100, 50, image::ImageFormat::Png);
        let bare = input.split_once(',').unwrap().1;
        let result = compress(bare, &CompressOptions::default()).unwrap();
        assert_eq!((result.width, result.height), (100, 50));
    }

    #[test]
    fn test_undecodable_inputs_fail() {
        let opts = CompressOptions::default();
        for input in [
            "",
            "data:image/png;base64,",
            "data:image/png;base64,!!!",
            "data:image/jpeg;base64,AAAAAAAA",
            "not an image",
        ] {
            assert!(
                matches!(compress(input, &opts), Err(CompressError::Decode(_))),
                "{input:?} should fail to decode"
            );
        }
    }

    #[test]
    fn test_reduction_percent_zero_original() {
        assert_eq!(reduction_percent(0.0, 10.0), 0.0);
        assert_eq!(reduction_percent(100.0, 25.0), 75.0);
        assert_eq!(reduction_percent(100.0, 150.0), -50.0);
    }
}
