use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::athletes::{get_team_athletes, get_top_athletes, TOP_ATHLETES_LIMIT};
use crate::db::helpers::require_rows;
use crate::error::ApiError;

/// Athletes belonging to a team.
///
/// A team without members is reported the same way as an unknown team.
#[tracing::instrument(name = "List team athletes", skip(pool))]
pub async fn list_team_athletes(
    team_id: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let athletes = require_rows(
        get_team_athletes(&pool, team_id).await,
        "Team not found or no athletes associated",
    )?;

    tracing::debug!("Found {} athletes for team {}", athletes.len(), team_id);
    Ok(HttpResponse::Ok().json(athletes))
}

#[tracing::instrument(name = "List top athletes", skip(pool))]
pub async fn list_top_athletes(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let athletes = get_top_athletes(&pool, TOP_ATHLETES_LIMIT).await?;
    Ok(HttpResponse::Ok().json(athletes))
}
