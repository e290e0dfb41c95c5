//! Data URI rendering.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIME type of every image this crate produces.
pub const JPEG_MIME: &str = "image/jpeg";

/// Render bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mut out = String::with_capacity(mime.len() + 13 + bytes.len().div_ceil(3) * 4);
    out.push_str("data:");
    out.push_str(mime);
    out.push_str(";base64,");
    STANDARD.encode_string(bytes, &mut out);
    out
}
