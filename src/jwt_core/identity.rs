use serde::Serialize;
use serde_json::{Number, Value};

use crate::constants::{EMAIL_CLAIMS, USER_ID_CLAIMS};
use crate::jwt_core::claim_reader::extract_claims;
use crate::types::Claims;

/// Identity hints read from an unverified token, for routing only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    pub fn from_claims(claims: &Claims) -> Self {
        Identity {
            user_id: user_id(claims),
            email: email(claims),
        }
    }
}

/// `None` when the token is unreadable. A readable token may still carry
/// neither field.
pub fn identity_from_token(token: &str) -> Option<Identity> {
    extract_claims(token).map(|claims| Identity::from_claims(&claims))
}

/// First present, non-null claim in [`USER_ID_CLAIMS`] order, as text.
pub fn user_id(claims: &Claims) -> Option<String> {
    first_present(claims, &USER_ID_CLAIMS)
}

/// First present, non-null claim in [`EMAIL_CLAIMS`] order, as text.
pub fn email(claims: &Claims) -> Option<String> {
    first_present(claims, &EMAIL_CLAIMS)
}

fn first_present(claims: &Claims, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| claims.get(name))
        .find(|value| !value.is_null())
        .map(value_text)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

// Whole floats render without a fractional part.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Claims {
        Claims::try_from(value).expect("object payload")
    }

    #[test]
    fn user_id_follows_priority_order() {
        let c = claims(json!({"sub": "s", "user_id": "u", "id": "i", "userId": "U"}));
        assert_eq!(user_id(&c).as_deref(), Some("U"));

        let c = claims(json!({"sub": "s", "user_id": "u", "id": "i"}));
        assert_eq!(user_id(&c).as_deref(), Some("i"));

        let c = claims(json!({"sub": "s", "user_id": "u"}));
        assert_eq!(user_id(&c).as_deref(), Some("u"));

        let c = claims(json!({"sub": "s"}));
        assert_eq!(user_id(&c).as_deref(), Some("s"));

        let c = claims(json!({"email": "a@b.co"}));
        assert_eq!(user_id(&c), None);
    }

    #[test]
    fn only_null_claims_are_passed_over() {
        let c = claims(json!({"userId": null, "id": null, "sub": "s"}));
        assert_eq!(user_id(&c).as_deref(), Some("s"));

        let c = claims(json!({"userId": "", "sub": "s"}));
        assert_eq!(user_id(&c).as_deref(), Some(""));

        let c = claims(json!({"userId": true, "sub": "s"}));
        assert_eq!(user_id(&c).as_deref(), Some("true"));

        let c = claims(json!({"id": {"x": 1}, "sub": "s"}));
        assert_eq!(user_id(&c).as_deref(), Some(r#"{"x":1}"#));

        let c = claims(json!({"email": "", "userEmail": "x@y"}));
        assert_eq!(email(&c).as_deref(), Some(""));
    }

    #[test]
    fn numeric_ids_render_as_plain_numbers() {
        let c = claims(json!({"userId": 42, "user_id": 99}));
        assert_eq!(user_id(&c).as_deref(), Some("42"));

        let c = claims(json!({"id": 1500.0}));
        assert_eq!(user_id(&c).as_deref(), Some("1500"));

        let c = claims(json!({"id": 12.5}));
        assert_eq!(user_id(&c).as_deref(), Some("12.5"));

        let c = claims(json!({"id": -7}));
        assert_eq!(user_id(&c).as_deref(), Some("-7"));

        let c = claims(json!({"id": u64::MAX}));
        assert_eq!(user_id(&c).as_deref(), Some("18446744073709551615"));
    }

    #[test]
    fn email_prefers_email_claim() {
        let c = claims(json!({"email": "a@b.co", "userEmail": "c@d.co"}));
        assert_eq!(email(&c).as_deref(), Some("a@b.co"));

        let c = claims(json!({"email": null, "userEmail": "c@d.co"}));
        assert_eq!(email(&c).as_deref(), Some("c@d.co"));

        let c = claims(json!({"sub": "s"}));
        assert_eq!(email(&c), None);
    }

    #[test]
    fn identity_from_scenario_token() {
        let token = "abc.eyJzdWIiOiIxMjMiLCJlbWFpbCI6InRlc3RAZXhhbXBsZS5jb20ifQ.xyz";
        let identity = identity_from_token(token).expect("readable token");
        assert_eq!(
            identity,
            Identity {
                user_id: Some("123".to_string()),
                email: Some("test@example.com".to_string()),
            }
        );

        assert_eq!(identity_from_token("onlyonepart"), None);
    }
}
