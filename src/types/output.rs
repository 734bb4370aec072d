use serde::Serialize;
use serde_json::Value;

use crate::jwt_core::identity::Identity;
use crate::types::Claims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Decoded,
    Unreadable,
}

#[derive(Debug, Serialize)]
pub struct Output {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Claims>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub detail: String,
}

impl Output {
    pub fn decoded(header: Option<Value>, claims: Claims) -> Self {
        let identity = Identity::from_claims(&claims);
        Output {
            status: Status::Decoded,
            header,
            detail: format!("{} claim(s) read, signature not verified", claims.len()),
            claims: Some(claims),
            identity: Some(identity),
        }
    }

    pub fn unreadable() -> Self {
        Output {
            status: Status::Unreadable,
            header: None,
            claims: None,
            identity: None,
            detail: "Token is not a readable JWT".to_string(),
        }
    }
}
