/// # Email Validation Request
///
/// JSON body accepted by the validation route:
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// Extra keys are ignored. A missing or `null` `email` decodes to the empty
/// string.
pub mod email;

/// # Validation Outcomes
///
/// The six fixed results of validating one request, each paired with its
/// HTTP status and message.
pub mod outcome;

/// # Validation Response Envelope
///
/// ```json
/// { "StatusCode": 400, "Msg": "Invalid JSON request." }
/// ```
pub mod response;

pub use email::{DecodeError, EmailRequest};
pub use outcome::Outcome;
pub use response::ValidationResponse;
