//! Image decoding pipeline for Photopress.
//!
//! This module provides functionality for:
//! - Parsing data URIs and bare base64 payloads
//! - Decoding JPEG, PNG, GIF, WebP and BMP images with EXIF orientation
//! - Width-bound downscaling that never upscales
//!
//! # Examples
//!
//! ```ignore
//! use photopress_core::decode::{decode_image, parse_data_uri, resize_to_width, FilterType};
//!
//! let uri = parse_data_uri(captured_photo)?;
//! let image = decode_image(&uri.bytes)?;
//! let bounded = resize_to_width(&image, 800, FilterType::Bilinear)?;
//! ```

mod data_uri;
mod raster;
mod resize;
mod types;

pub use data_uri::{parse_data_uri, DataUri};
pub use raster::{decode_image, decode_image_no_orientation, get_orientation};
#[cfg(test)]
pub(crate) use raster::with_exif_orientation;
pub use resize::{calculate_width_bound_dimensions, resize, resize_to_width};
pub use types::{DecodeError, DecodedImage, FilterType, ImageFormat, Orientation};
