use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Validation Response Envelope
///
/// Body written for every request the validator answers. `StatusCode`
/// mirrors the HTTP status line so a client that only sees the body can
/// still recover the outcome category.
///
/// ## Example JSON
/// ```json
/// { "StatusCode": 200, "Msg": "Email conforms to RFC 5322." }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ValidationResponse {
    #[serde(rename = "StatusCode")]
    pub status_code: u16,
    #[serde(rename = "Msg")]
    pub msg: String,
}

impl ValidationResponse {
    pub fn new(status_code: u16, msg: impl Into<String>) -> Self {
        Self {
            status_code,
            msg: msg.into(),
        }
    }
}
