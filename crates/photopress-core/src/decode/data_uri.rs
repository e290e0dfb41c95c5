//! Data URI parsing.
//!
//! Accepts `data:<mime>[;param...];base64,<payload>` as produced by
//! `canvas.toDataURL()` and `FileReader.readAsDataURL()`, plus a bare
//! base64 payload with no header.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use super::{DecodeError, ImageFormat};

/// Padding-tolerant standard alphabet; some encoders strip the trailing `=`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A parsed data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// MIME type from the header, lowercased. `None` for bare payloads or
    /// headers that omit it.
    pub mime: Option<String>,
    /// Decoded payload bytes.
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// The format declared by the header, falling back to sniffing the payload.
    pub fn format(&self) -> Option<ImageFormat> {
        self.mime
            .as_deref()
            .and_then(ImageFormat::from_mime_type)
            .or_else(|| ImageFormat::sniff(&self.bytes))
    }
}

/// Parse a data URI (or bare base64 string) into its MIME type and bytes.
///
/// # Errors
///
/// * `DecodeError::Empty` if the input or its payload is empty
/// * `DecodeError::InvalidDataUri` if the header has no comma or is not base64
/// * `DecodeError::InvalidBase64` if the payload is not valid base64
pub fn parse_data_uri(input: &str) -> Result<DataUri, DecodeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DecodeError::Empty);
    }

    let (mime, payload) = match strip_scheme(input) {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| DecodeError::InvalidDataUri("missing ',' separator".into()))?;
            (parse_header(header)?, payload)
        }
        None => (None, input),
    };

    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = PAYLOAD_ENGINE
        .decode(cleaned.as_bytes())
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;

    Ok(DataUri { mime, bytes })
}

fn strip_scheme(input: &str) -> Option<&str> {
    let prefix = input.get(..5)?;
    if prefix.eq_ignore_ascii_case("data:") {
        Some(&input[5..])
    } else {
        None
    }
}

/// Parse `<mime>[;param...];base64`. Only base64 payloads carry image data
/// in practice, so percent-encoded data URIs are rejected.
fn parse_header(header: &str) -> Result<Option<String>, DecodeError> {
    let mut parts = header.split(';');
    let mime = parts
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_ascii_lowercase);

    let is_base64 = parts.any(|p| p.trim().eq_ignore_ascii_case("base64"));
    if !is_base64 {
        return Err(DecodeError::InvalidDataUri(
            "only base64-encoded payloads are supported".into(),
        ));
    }

    Ok(mime)
}
