use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::auth::Principal;
use crate::db::athletes::get_athlete_with_club;
use crate::db::helpers::require_record;
use crate::db::matches::{
    create_match_event, find_match, get_highlight_matches, get_match_events,
    get_match_statistics, get_tournament_summary, match_exists,
};
use crate::error::ApiError;
use crate::models::athlete::AthleteDetail;
use crate::models::matches::{CreateMatchEventRequest, MatchFullDetail};
use crate::utils::set_results::parse_set_results;

#[tracing::instrument(name = "List highlighted matches", skip(pool))]
pub async fn list_highlight_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let matches = get_highlight_matches(&pool).await?;
    Ok(HttpResponse::Ok().json(matches))
}

/// Full match detail with tournament, both athletes, set results and events.
///
/// Only a missing match is an error. A missing tournament or athlete shows up
/// as `null` in the response.
#[tracing::instrument(name = "Get match detail", skip(pool))]
pub async fn get_match_full_detail(
    match_id: i32,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let game = require_record(find_match(&pool, match_id).await, "Match not found")?;

    let (events, statistics, tournament, athlete1, athlete2) = futures_util::try_join!(
        get_match_events(&pool, match_id),
        get_match_statistics(&pool, match_id),
        get_tournament_summary(&pool, game.tournament_id),
        get_athlete_with_club(&pool, game.athlete1_id),
        get_athlete_with_club(&pool, game.athlete2_id),
    )?;

    if athlete1.is_none() || athlete2.is_none() {
        tracing::warn!(
            "Match {} references missing athletes ({}, {})",
            match_id, game.athlete1_id, game.athlete2_id
        );
    }

    let set_results = parse_set_results(&statistics);

    let detail = MatchFullDetail {
        id: game.id,
        tournament,
        round: game.round,
        scheduled_at: game.scheduled_at,
        athlete1: athlete1.map(AthleteDetail::from),
        athlete2: athlete2.map(AthleteDetail::from),
        score1: game.score1,
        score2: game.score2,
        status: game.status,
        winner_id: game.winner_id,
        set_results,
        events,
    };

    Ok(HttpResponse::Ok().json(detail))
}

/// Record an event for a match on behalf of an authenticated referee.
#[tracing::instrument(
    name = "Create match event",
    skip(request, pool, principal),
    fields(
        subject = %principal.subject,
        event_type = %request.event_type
    )
)]
pub async fn add_match_event(
    match_id: i32,
    request: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
    principal: web::ReqData<Principal>,
) -> Result<HttpResponse, ApiError> {
    if let Err(validation_error) = request.validate() {
        tracing::warn!("Match event validation failed: {}", validation_error);
        return Err(ApiError::Unprocessable(validation_error));
    }

    if !match_exists(&pool, match_id).await? {
        return Err(ApiError::NotFound("Match not found".to_string()));
    }

    let event = create_match_event(&pool, match_id, &request).await?;
    tracing::info!("Created event {} for match {}", event.id, match_id);

    Ok(HttpResponse::Created().json(event))
}
