//! Embedded buffer encoding.
//!
//! Buffers are carried inline as `data:application/octet-stream;base64,` URIs so
//! a document never needs a `.bin` sidecar.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Prefix of every embedded buffer URI.
pub const DATA_URI_HEADER: &str = "data:application/octet-stream;base64,";

/// Wrap raw bytes in a base64 data URI.
#[must_use]
pub fn encode_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_HEADER.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_HEADER);
    BASE64.encode_string(bytes, &mut uri);
    uri
}

/// Recover the raw bytes from a data URI produced by [`encode_data_uri`].
///
/// # Errors
/// Returns [`Error::InvalidDataUri`] if the header is missing, or
/// [`Error::Base64`] if the payload is malformed.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = uri
        .strip_prefix(DATA_URI_HEADER)
        .ok_or(Error::InvalidDataUri)?;
    Ok(BASE64.decode(payload)?)
}

/// Read `count` little-endian `u16` values from the front of `bytes`.
///
/// # Errors
/// Returns [`Error::UnexpectedEof`] if `bytes` is too short.
pub fn read_u16_le(bytes: &[u8], count: usize) -> Result<Vec<u16>> {
    let src = count
        .checked_mul(2)
        .and_then(|len| bytes.get(..len))
        .ok_or(Error::UnexpectedEof)?;
    let mut out = vec![0u16; count];
    LittleEndian::read_u16_into(src, &mut out);
    Ok(out)
}

/// Read `count` little-endian `f32` values from the front of `bytes`.
///
/// # Errors
/// Returns [`Error::UnexpectedEof`] if `bytes` is too short.
pub fn read_f32_le(bytes: &[u8], count: usize) -> Result<Vec<f32>> {
    let src = count
        .checked_mul(4)
        .and_then(|len| bytes.get(..len))
        .ok_or(Error::UnexpectedEof)?;
    let mut out = vec![0f32; count];
    LittleEndian::read_f32_into(src, &mut out);
    Ok(out)
}
