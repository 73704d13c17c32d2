use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};

use super::{DecodeError, ValidationResponse};

/// Result of running one request through the validator.
///
/// Every variant maps to exactly one `(status, message)` pair in
/// [`Outcome::parts`]; the messages are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MethodNotAllowed,
    UnsupportedContentType,
    InvalidJson,
    MissingEmail,
    NonConforming,
    Conforming,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Outcome::MethodNotAllowed,
        Outcome::UnsupportedContentType,
        Outcome::InvalidJson,
        Outcome::MissingEmail,
        Outcome::NonConforming,
        Outcome::Conforming,
    ];

    pub fn parts(self) -> (StatusCode, &'static str) {
        match self {
            Outcome::MethodNotAllowed => (StatusCode::FORBIDDEN, "Only POST method is supported."),
            Outcome::UnsupportedContentType => (
                StatusCode::BAD_REQUEST,
                "Content-Type header must be application/json.",
            ),
            Outcome::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON request."),
            Outcome::MissingEmail => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON request. Missing key email.",
            ),
            Outcome::NonConforming => (
                StatusCode::BAD_REQUEST,
                "Email does not conform to RFC 5322.",
            ),
            Outcome::Conforming => (StatusCode::OK, "Email conforms to RFC 5322."),
        }
    }

    pub fn status(self) -> StatusCode {
        self.parts().0
    }

    pub fn message(self) -> &'static str {
        self.parts().1
    }

    pub fn body(self) -> ValidationResponse {
        ValidationResponse::new(self.status().as_u16(), self.message())
    }

    /// Builds the HTTP response. If the body cannot be serialized the status
    /// is still sent, without a body.
    pub fn into_response(self) -> HttpResponse {
        let status = self.status();
        match serde_json::to_vec(&self.body()) {
            Ok(bytes) => HttpResponse::build(status)
                .content_type(ContentType::json())
                .body(bytes),
            Err(e) => {
                tracing::error!(error = %e, outcome = ?self, "could not serialize response");
                HttpResponse::build(status).finish()
            }
        }
    }
}

impl From<DecodeError> for Outcome {
    fn from(_: DecodeError) -> Self {
        Outcome::InvalidJson
    }
}

impl Responder for Outcome {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_response()
    }
}
