use clap::Parser;
use email_notary::config::Settings;
use email_notary::openapi::ApiDoc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

/// Email Notary Service Entry Point
///
/// Loads `.env` (if present), reads settings from flags or `NOTARY_*`
/// environment variables, and serves the validation route. Logging level
/// follows `RUST_LOG`, defaulting to `info`.
///
/// # Configuration
/// - Server binds to `127.0.0.1:9000` by default
/// - Validator is served at `/email` by default
#[actix_web::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::parse();

    if settings.openapi {
        match ApiDoc::openapi().to_pretty_json() {
            Ok(doc) => println!("{doc}"),
            Err(e) => {
                tracing::error!(error = %e, "could not render OpenAPI document");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = settings.endpoint().run().await {
        tracing::error!(error = %e, source = ?std::error::Error::source(&e), "shutting down");
        std::process::exit(1);
    }
}
