//! Image encoding pipeline for Photopress.
//!
//! Output is always baseline JPEG, wrapped in a data URI so it can be handed
//! straight to an upload form or an `<img>` element.
//!
//! # Examples
//!
//! ```ignore
//! use photopress_core::encode::{encode_data_uri, encode_jpeg, JPEG_MIME};
//!
//! let pixels = vec![128u8; 100 * 100 * 3];
//! let jpeg = encode_jpeg(&pixels, 100, 100, 60)?;
//! let uri = encode_data_uri(JPEG_MIME, &jpeg);
//! ```

mod data_uri;
mod jpeg;

pub use data_uri::{encode_data_uri, JPEG_MIME};
pub use jpeg::{encode_image, encode_jpeg, quality_from_unit, EncodeError};
