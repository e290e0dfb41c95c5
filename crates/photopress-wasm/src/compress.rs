//! Compression WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { compress, estimate_size } from '@photopress/wasm';
//!
//! const photo = canvas.toDataURL('image/png');
//! const result = compress(photo, { maxWidth: 800, quality: 0.6 });
//! await upload(result.dataUri);
//! ```

#[cfg(target_arch = "wasm32")]
use crate::types::summary_line;
use crate::types::{CompressOptionsJs, CompressionResultJs};
use photopress_core::compress as compression;
use photopress_core::CompressOptions;
use wasm_bindgen::prelude::*;

/// Downscale a data-URI image and re-encode it as JPEG.
///
/// `options` may be `undefined`, `null`, or an object with optional
/// `maxWidth` (default 800) and `quality` (default 0.6) fields.
///
/// Returns `{ dataUri, width, height, originalWidth, originalHeight,
/// originalSizeKb, compressedSizeKb, reductionPercent }`.
///
/// # Errors
///
/// Throws a string error if the options are out of range or the input
/// cannot be decoded as an image. Callers typically fall back to uploading
/// the original.
#[wasm_bindgen]
pub fn compress(data_uri: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let result = run(data_uri, &options)?;
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Positional variant of [`compress`]; omitted arguments take their defaults.
#[wasm_bindgen]
pub fn compress_with(
    data_uri: &str,
    max_width: Option<u32>,
    quality: Option<f32>,
) -> Result<JsValue, JsValue> {
    let options = CompressOptions::from(CompressOptionsJs { max_width, quality });
    let result = run(data_uri, &options)?;
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Estimate the decoded size in KiB of a base64 string (`length * 0.75 / 1024`).
///
/// Returns 0 for `undefined`, `null` or an empty string.
#[wasm_bindgen]
pub fn estimate_size(encoded: Option<String>) -> f64 {
    compression::estimate_size(encoded.as_deref())
}

fn options_from_js(options: JsValue) -> Result<CompressOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(CompressOptions::default());
    }
    let js: CompressOptionsJs = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;
    Ok(js.into())
}

fn run(data_uri: &str, options: &CompressOptions) -> Result<CompressionResultJs, JsValue> {
    let result = compression::compress(data_uri, options)
        .map(CompressionResultJs::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(&summary_line(&result)));

    Ok(result)
}

/// Native tests only touch functions that avoid `JsValue`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_size_binding() {
        assert_eq!(estimate_size(None), 0.0);
        assert_eq!(estimate_size(Some(String::new())), 0.0);
        assert_eq!(estimate_size(Some("A".repeat(1024))), 0.75);
    }
}
