// src/routes/matches.rs
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::Principal;
use crate::error::ApiError;
use crate::handlers::match_handler;
use crate::models::matches::CreateMatchEventRequest;

/// Get matches with at least one event
#[get("/highlights")]
async fn get_highlight_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    match_handler::list_highlight_matches(pool).await
}

/// Get full match detail
#[get("/{match_id}")]
async fn get_match_detail(
    path: web::Path<i32>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();
    match_handler::get_match_full_detail(match_id, pool).await
}

/// Record a match event (requires authentication)
pub async fn create_match_event(
    path: web::Path<i32>,
    event_request: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
    principal: web::ReqData<Principal>,
) -> Result<HttpResponse, ApiError> {
    let match_id = path.into_inner();
    match_handler::add_match_event(match_id, event_request, pool, principal).await
}
