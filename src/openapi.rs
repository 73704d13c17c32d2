use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Describes the validation route with its request and response schemas.
/// The document is printed by `email-notary --openapi` rather than served,
/// so the configured route stays the only path the server answers.
///
/// # Endpoints
/// - Email Validation: `POST /email` (default route)
///
/// # Schemas
/// - `EmailRequest`: Email validation input
/// - `ValidationResponse`: `StatusCode` / `Msg` envelope
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::email::verify),
    components(schemas(
        crate::models::email::EmailRequest,
        crate::models::response::ValidationResponse
    )),
    tags(
        (name = "Email Validation", description = "RFC 5322 address syntax validation")
    ),
    info(
        description = "Reports whether an email address conforms to RFC 5322",
        title = "Email Notary API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
