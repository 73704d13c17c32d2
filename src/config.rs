use clap::Parser;

use crate::endpoint::Endpoint;

/// Email Notary: reports whether an address conforms to RFC 5322.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "email-notary", version, about)]
pub struct Settings {
    /// Address to bind.
    #[arg(long, env = "NOTARY_ADDR", default_value = "127.0.0.1")]
    pub addr: String,

    /// Port to bind.
    #[arg(long, env = "NOTARY_PORT", default_value_t = 9000)]
    pub port: u16,

    /// Path the validator is served on.
    #[arg(long, env = "NOTARY_ROUTE", default_value = "/email", value_parser = parse_route)]
    pub route: String,

    /// Print the OpenAPI document as JSON and exit.
    #[arg(long)]
    pub openapi: bool,
}

impl Settings {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.addr.clone(), self.port, self.route.clone())
    }
}

fn parse_route(raw: &str) -> Result<String, String> {
    if raw.starts_with('/') {
        Ok(raw.to_string())
    } else {
        Err(format!("route must start with '/': {raw}"))
    }
}
