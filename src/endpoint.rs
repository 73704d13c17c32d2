use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use thiserror::Error;

use crate::routes;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("web server was not able to bind {addr}:{port}")]
    Bind {
        addr: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("web server stopped with an error")]
    Serve(#[source] std::io::Error),
}

/// Address, port and route the validator is served on.
///
/// Each `Endpoint` owns its routing: the route is registered on every `App`
/// built from it and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    addr: String,
    port: u16,
    route: String,
}

impl Endpoint {
    pub fn new(addr: impl Into<String>, port: u16, route: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            port,
            route: route.into(),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// Registers the validator route on an actix service config.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        routes::configure(cfg, &self.route);
    }

    /// Binds the configured address and serves until the server stops.
    pub async fn run(self) -> Result<(), EndpointError> {
        let endpoint = self.clone();
        let server = HttpServer::new(move || {
            let endpoint = endpoint.clone();
            App::new()
                .wrap(Logger::default())
                .configure(move |cfg| endpoint.configure(cfg))
        })
        .bind((self.addr.as_str(), self.port))
        .map_err(|source| EndpointError::Bind {
            addr: self.addr.clone(),
            port: self.port,
            source,
        })?;

        tracing::info!(
            addr = %self.addr,
            port = self.port,
            route = %self.route,
            "serving email validation endpoint"
        );

        server.run().await.map_err(EndpointError::Serve)
    }
}
