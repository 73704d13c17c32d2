use crate::models::{EmailRequest, Outcome, ValidationResponse};
use crate::validation::syntax;
use actix_web::error::PayloadError;
use actix_web::http::Method;
use actix_web::http::header::{CONTENT_TYPE, HeaderValue};
use actix_web::{HttpRequest, web};
use futures::StreamExt;

const JSON_MEDIA_TYPE: &str = "application/json";

/// # Email Validation Endpoint
///
/// Reports whether the submitted address conforms to RFC 5322. Checks run in
/// order and the first failure answers the request:
/// 1. Method must be POST
/// 2. `Content-Type` must be exactly `application/json`
/// 3. Body must decode to a JSON object
/// 4. `email` must be present and non-empty
/// 5. `email` must parse as an RFC 5322 address
///
/// ## Responses
/// - **200 OK**: `Email conforms to RFC 5322.`
/// - **400 Bad Request**: content type, JSON, missing key or syntax failure
/// - **403 Forbidden**: any method other than POST
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
#[utoipa::path(
    post,
    path = "/email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Email conforms to RFC 5322", body = ValidationResponse),
        (status = 400, description = "Request rejected or email does not conform", body = ValidationResponse),
        (status = 403, description = "Method other than POST", body = ValidationResponse)
    ),
    tag = "Email Validation"
)]
pub async fn verify(req: HttpRequest, payload: web::Payload) -> Outcome {
    let outcome = match check_headers(req.method(), req.headers().get(CONTENT_TYPE)) {
        Err(rejected) => rejected,
        Ok(()) => match read_body(payload).await {
            Ok(body) => evaluate_body(&body),
            Err(e) => {
                tracing::debug!(error = %e, "could not read request body");
                Outcome::InvalidJson
            }
        },
    };
    tracing::debug!(
        method = %req.method(),
        path = req.path(),
        status = outcome.status().as_u16(),
        "validated request"
    );
    outcome
}

/// Runs the validation chain over the parts of a request.
pub fn evaluate(method: &Method, content_type: Option<&HeaderValue>, body: &[u8]) -> Outcome {
    match check_headers(method, content_type) {
        Ok(()) => evaluate_body(body),
        Err(rejected) => rejected,
    }
}

/// Method and content-type checks. These never look at the body, so a
/// rejected request is answered without reading it.
fn check_headers(method: &Method, content_type: Option<&HeaderValue>) -> Result<(), Outcome> {
    if method != Method::POST {
        return Err(Outcome::MethodNotAllowed);
    }

    if !is_json(content_type) {
        return Err(Outcome::UnsupportedContentType);
    }

    Ok(())
}

fn evaluate_body(body: &[u8]) -> Outcome {
    let request = match EmailRequest::decode(body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting request body");
            return e.into();
        }
    };

    if request.is_missing_email() {
        return Outcome::MissingEmail;
    }

    match syntax::parse_address(&request.email) {
        Ok(_) => Outcome::Conforming,
        Err(e) => {
            tracing::debug!(error = %e, "address does not conform");
            Outcome::NonConforming
        }
    }
}

// No size limit: the whole body is buffered before decoding.
async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, PayloadError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        body.extend_from_slice(&chunk?);
    }
    Ok(body.freeze())
}

fn is_json(content_type: Option<&HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == JSON_MEDIA_TYPE)
}

/// # Route Configuration
///
/// Registers the validator on `route` for every method, so non-POST
/// requests reach the method check instead of the router's fallback.
pub fn configure_routes(cfg: &mut web::ServiceConfig, route: &str) {
    cfg.service(web::resource(route).to(verify));
}
