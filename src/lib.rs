use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::catalog::{CatalogReader, HttpCatalogClient};
use crate::models::config::ServerConfig;
use crate::routes::main::show_index;

pub mod catalog;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let catalog: Arc<dyn CatalogReader> =
        Arc::new(HttpCatalogClient::new(server_config.catalog_base_url.clone()));

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(catalog.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
