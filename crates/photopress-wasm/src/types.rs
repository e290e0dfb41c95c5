//! JavaScript-facing option and result shapes.
//!
//! Field names follow JavaScript conventions (`maxWidth`, `originalSizeKb`)
//! and are converted to and from the core types at the boundary.

use photopress_core::{CompressOptions, CompressionResult};
use serde::{Deserialize, Serialize};

/// Options object accepted from JavaScript. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CompressOptionsJs {
    pub max_width: Option<u32>,
    pub quality: Option<f32>,
}

impl From<CompressOptionsJs> for CompressOptions {
    fn from(js: CompressOptionsJs) -> Self {
        let defaults = CompressOptions::default();
        CompressOptions {
            max_width: js.max_width.unwrap_or(defaults.max_width),
            quality: js.quality.unwrap_or(defaults.quality),
        }
    }
}

/// Result object handed back to JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompressionResultJs {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
    pub original_size_kb: f64,
    pub compressed_size_kb: f64,
    pub reduction_percent: f64,
}

impl From<CompressionResult> for CompressionResultJs {
    fn from(result: CompressionResult) -> Self {
        Self {
            data_uri: result.data_uri,
            width: result.width,
            height: result.height,
            original_width: result.original_width,
            original_height: result.original_height,
            original_size_kb: result.original_size_kb,
            compressed_size_kb: result.compressed_size_kb,
            reduction_percent: result.reduction_percent,
        }
    }
}

/// One-line summary matching what the upload form logs.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn summary_line(result: &CompressionResultJs) -> String {
    format!(
        "Image compressed: {:.2}KB -> {:.2}KB ({:.1}% reduction)",
        result.original_size_kb, result.compressed_size_kb, result.reduction_percent
    )
}
