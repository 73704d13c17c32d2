use actix_web::web;

/// # Email Validation Endpoint
///
/// Reports whether a JSON-submitted address conforms to RFC 5322.
///
/// ## Request
/// - Method: POST
/// - Header: `Content-Type: application/json`
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: Email conforms
/// - **400 Bad Request**: Wrong content type, bad JSON, missing key, or
///   non-conforming address
/// - **403 Forbidden**: Method other than POST
///
/// ## Example Request
/// ```json
/// { "email": "user@example.com" }
/// ```
pub mod email;

#[cfg(test)]
mod email_edge_case_tests;

/// # API Route Configuration
///
/// Mounts the validator at `route`. Nothing else is registered, so every
/// other path is answered by actix-web's default 404.
pub fn configure(cfg: &mut web::ServiceConfig, route: &str) {
    email::configure_routes(cfg, route);
}
