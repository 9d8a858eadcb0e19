// src/routes/catalog.rs
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::handlers::catalog_handler;

/// List all sports
#[get("/sports")]
async fn get_sports(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_sports(pool).await
}

/// List all clubs
#[get("/clubs")]
async fn get_clubs(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_clubs(pool).await
}

/// List all tournaments
#[get("/tournaments")]
async fn get_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_tournaments(pool).await
}

/// List all team matches
#[get("/team-matches")]
async fn get_team_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    catalog_handler::list_team_matches(pool).await
}
