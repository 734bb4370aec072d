//! Reads identity claims out of compact JWTs without verifying them.

pub mod constants;
pub mod error;
pub mod helpers;
pub mod jwt_core;
pub mod types;

pub use error::ClaimReaderError;
pub use jwt_core::{decode_header, extract_claims, identity_from_token, try_extract_claims, Identity};
pub use types::Claims;
