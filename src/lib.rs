use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
mod handlers;
mod middleware;
pub mod models;
mod routes;
pub mod telemetry;
pub mod utils;
use crate::auth::TokenVerifier;
use crate::routes::{init_routes, json_config, path_config};

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    token_verifier: Arc<dyn TokenVerifier>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let token_verifier_data: web::Data<dyn TokenVerifier> = web::Data::from(token_verifier);

    let server = HttpServer::new( move || {
        // Public read API consumed by mobile and web clients
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config())
            .app_data(path_config())
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(token_verifier_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
