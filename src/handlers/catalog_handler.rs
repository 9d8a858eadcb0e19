use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::catalog::{get_clubs, get_sports, get_tournaments};
use crate::db::team_matches::get_team_matches;
use crate::error::ApiError;

#[tracing::instrument(name = "List sports", skip(pool))]
pub async fn list_sports(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let sports = get_sports(&pool).await?;
    Ok(HttpResponse::Ok().json(sports))
}

#[tracing::instrument(name = "List clubs", skip(pool))]
pub async fn list_clubs(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let clubs = get_clubs(&pool).await?;
    Ok(HttpResponse::Ok().json(clubs))
}

#[tracing::instrument(name = "List tournaments", skip(pool))]
pub async fn list_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let tournaments = get_tournaments(&pool).await?;
    Ok(HttpResponse::Ok().json(tournaments))
}

#[tracing::instrument(name = "List team matches", skip(pool))]
pub async fn list_team_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let team_matches = get_team_matches(&pool).await?;
    Ok(HttpResponse::Ok().json(team_matches))
}
