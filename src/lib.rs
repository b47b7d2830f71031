#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::generator::forismatic::ForismaticClient;
#[cfg(feature = "server")]
use crate::generator::transport::ReqwestTransport;
#[cfg(feature = "server")]
use crate::generator::QuoteGenerator;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{DieselRepository, RecipientReader};
#[cfg(feature = "server")]
use crate::routes::quote::show_quote;

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod generator;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Production quote client.
#[cfg(feature = "server")]
pub type QuoteClient = ForismaticClient<ReqwestTransport>;

/// Registers `GET /quote`. The generator and repository are looked up in app
/// data as `web::Data<G>` and `web::Data<R>`.
#[cfg(feature = "server")]
pub fn configure_quote_routes<G, R>(cfg: &mut web::ServiceConfig)
where
    G: QuoteGenerator + 'static,
    R: RecipientReader + 'static,
{
    cfg.service(web::resource("/quote").route(web::get().to(show_quote::<G, R>)));
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the recipient store.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;
    let repo = web::Data::new(DieselRepository::new(pool));

    let transport = ReqwestTransport::new(server_config.quote_service_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;
    let quote_client = ForismaticClient::new(&server_config.quote_service_url, transport)
        .map_err(|e| std::io::Error::other(format!("Failed to configure quote client: {e}")))?;
    let quote_client = web::Data::new(quote_client);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting quotes service on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure_quote_routes::<QuoteClient, DieselRepository>)
            .app_data(quote_client.clone())
            .app_data(repo.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
