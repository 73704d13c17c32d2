use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use utoipa::ToSchema;

const EMAIL_KEY: &str = "email";

/// Body accepted by the validation route.
///
/// Only a JSON object (or a bare `null`) decodes. The `email` key is matched
/// ignoring ASCII case and the last occurrence wins. A missing key leaves the
/// field empty and a `null` value leaves it unchanged; the presence check
/// happens after decoding.
#[derive(ToSchema, Debug, Default, PartialEq, Eq)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("request body holds no JSON value")]
    Empty,
    #[error("request body is not a JSON email object: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl<'de> Deserialize<'de> for EmailRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EmailRequestVisitor)
    }
}

struct EmailRequestVisitor;

impl<'de> Visitor<'de> for EmailRequestVisitor {
    type Value = EmailRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object with a string `email` field")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EmailRequest::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = EmailRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(EMAIL_KEY) {
                if let Some(email) = map.next_value::<Option<String>>()? {
                    request.email = email;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(request)
    }
}

impl EmailRequest {
    /// Decodes the first JSON value in `body`.
    ///
    /// Bytes following a complete value are not inspected, the same way a
    /// streaming decoder stops after one value.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Self>();
        match values.next() {
            Some(Ok(request)) => Ok(request),
            Some(Err(e)) => Err(DecodeError::Malformed(e)),
            None => Err(DecodeError::Empty),
        }
    }

    pub fn is_missing_email(&self) -> bool {
        self.email.is_empty()
    }
}
