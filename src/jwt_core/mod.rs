pub mod claim_reader;
pub mod identity;

pub use claim_reader::{decode_header, extract_claims, try_extract_claims};
pub use identity::{identity_from_token, Identity};
