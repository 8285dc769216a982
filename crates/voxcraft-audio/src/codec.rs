//! Base64 byte codec and `data:` URIs.
//!
//! Synthesis output arrives as standard (RFC 4648, padded) base64 and exported
//! assets leave as `data:audio/wav;base64,...` URIs. Both directions go through
//! this module.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{AudioError, AudioResult};

/// MIME type used for exported WAV assets.
pub const WAV_MIME: &str = "audio/wav";

/// Standard alphabet with canonical padding that ignores unused bits in the
/// final symbol, so `"Zh=="` decodes like `"Zg=="`.
const DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Decodes standard padded base64 into raw bytes.
///
/// Fails only on characters outside the alphabet or an impossible length or
/// padding. ASCII whitespace is stripped first so line-wrapped payloads decode the same
/// as single-line ones. An empty string decodes to an empty buffer.
pub fn decode_base64(input: &str) -> AudioResult<Vec<u8>> {
    let compact: String;
    let payload = if input.bytes().any(|b| b.is_ascii_whitespace()) {
        compact = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        compact.as_str()
    } else {
        input
    };

    DECODER
        .decode(payload)
        .map_err(|e| AudioError::InvalidBase64 {
            message: e.to_string(),
        })
}

/// Encodes bytes as standard padded base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Wraps bytes in a base64 `data:` URI with the given MIME type.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, encode_base64(bytes))
}

/// Wraps WAV container bytes in a `data:audio/wav;base64,` URI.
pub fn wav_data_uri(wav: &[u8]) -> String {
    data_uri(WAV_MIME, wav)
}

/// Splits a base64 `data:` URI into its MIME type and decoded payload.
pub fn parse_data_uri(uri: &str) -> AudioResult<(String, Vec<u8>)> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| AudioError::invalid_data_uri("missing 'data:' scheme"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AudioError::invalid_data_uri("missing ',' separator"))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| AudioError::invalid_data_uri("only base64 data URIs are supported"))?;

    let bytes = decode_base64(payload)?;
    Ok((mime.to_string(), bytes))
}
