// src/routes/athletes.rs
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::handlers::athlete_handler;

/// Get the athletes of a team
#[get("/teams/{team_id}/athletes")]
async fn get_team_athletes(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let team_id = path.into_inner();
    athlete_handler::list_team_athletes(team_id, pool).await
}

/// Get the ten most voted athletes
#[get("/athletes/top")]
async fn get_top_athletes(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    athlete_handler::list_top_athletes(pool).await
}
