//! Reads the claims of a compact JWT without verifying it.
//!
//! Nothing here checks the signature, `exp` or `nbf`. A successful read says
//! what the token claims, not that the claims are true; the issuer is trusted
//! to reject bad tokens on the next request.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::ClaimReaderError;
use crate::types::Claims;

const SEGMENT_COUNT: usize = 3;

/// Returns the payload claims of `token`, or `None` if it cannot be read.
///
/// Malformed structure, bad base64url and bad JSON all give `None`.
pub fn extract_claims(token: &str) -> Option<Claims> {
    try_extract_claims(token).ok()
}

/// Same as [`extract_claims`] but keeps the reason the token was unreadable.
pub fn try_extract_claims(token: &str) -> Result<Claims, ClaimReaderError> {
    let [_, payload, _] = split_token(token)?;
    let value = decode_segment(payload)?;
    Claims::try_from(value).map_err(|_| ClaimReaderError::NotAnObject)
}

/// Decodes the header segment, for display.
pub fn decode_header(token: &str) -> Option<Value> {
    let [header, _, _] = split_token(token).ok()?;
    decode_segment(header).ok()
}

/// Base64url-decodes one segment and parses it as UTF-8 JSON.
pub fn decode_segment(segment: &str) -> Result<Value, ClaimReaderError> {
    let padded = pad_base64url(segment);
    let bytes = base64::decode_config(padded.as_bytes(), base64::URL_SAFE)?;
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Appends `=` until the length is a multiple of 4.
pub fn pad_base64url(segment: &str) -> Cow<'_, str> {
    match (4 - segment.len() % 4) % 4 {
        0 => Cow::Borrowed(segment),
        missing => Cow::Owned(format!("{}{}", segment, "=".repeat(missing))),
    }
}

fn split_token(token: &str) -> Result<[&str; SEGMENT_COUNT], ClaimReaderError> {
    let parts: Vec<&str> = token.split('.').collect();
    match parts.as_slice() {
        [header, payload, signature] => Ok([*header, *payload, *signature]),
        _ => Err(ClaimReaderError::InvalidFormat(parts.len())),
    }
}
