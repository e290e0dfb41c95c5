//! Photopress Core - photo compression before upload
//!
//! This crate downsizes captured photos and re-encodes them as JPEG so they
//! can be uploaded cheaply. Input and output are data URIs, the form browsers
//! hand out for canvas snapshots and file reads.
//!
//! The crate emits `tracing` events but installs no subscriber.

pub mod compress;
pub mod decode;
pub mod encode;

pub use compress::{
    compress, estimate_size, CompressError, CompressOptions, CompressionResult,
    DEFAULT_MAX_WIDTH, DEFAULT_QUALITY,
};
pub use decode::{DecodeError, DecodedImage};
pub use encode::EncodeError;
