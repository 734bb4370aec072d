use thiserror::Error;

/// Reasons a token could not be read.
///
/// `extract_claims` collapses every variant into `None`; the variants only
/// exist so a caller can log why.
#[derive(Error, Debug)]
pub enum ClaimReaderError {
    #[error("Invalid JWT format: expected 3 segments, found {0}")]
    InvalidFormat(usize),
    #[error("Invalid base64url encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("Segment is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Segment is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Payload is not a JSON object")]
    NotAnObject,
}
