/// Checked in order; the first present, non-null value wins.
pub const USER_ID_CLAIMS: [&str; 4] = ["userId", "id", "user_id", "sub"];

pub const EMAIL_CLAIMS: [&str; 2] = ["email", "userEmail"];

pub const TIMESTAMP_CLAIMS: [(&str, &str); 3] =
    [("iat", "IssuedAt"), ("exp", "Expires"), ("nbf", "NotBefore")];

pub const TOKEN_ENV: &str = "CLAIM_READER_TOKEN";
