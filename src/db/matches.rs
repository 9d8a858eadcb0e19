use sqlx::PgPool;

use crate::models::catalog::TournamentSummary;
use crate::models::matches::{CreateMatchEventRequest, CreatedMatchEvent, Match, MatchEvent, MatchStatistic};

pub async fn find_match(pool: &PgPool, match_id: i32) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        SELECT id, tournament_id, round, scheduled_at, athlete1_id, athlete2_id,
               score1, score2, status, winner_id
        FROM matches
        WHERE id = $1
        "#,
    )
    .bind(match_id)
    .fetch_optional(pool)
    .await
}

pub async fn match_exists(pool: &PgPool, match_id: i32) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM matches WHERE id = $1)")
        .bind(match_id)
        .fetch_one(pool)
        .await
}

/// Matches that have at least one recorded event
pub async fn get_highlight_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        SELECT m.id, m.tournament_id, m.round, m.scheduled_at, m.athlete1_id, m.athlete2_id,
               m.score1, m.score2, m.status, m.winner_id
        FROM matches m
        WHERE EXISTS (SELECT 1 FROM match_events e WHERE e.match_id = m.id)
        ORDER BY m.id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_match_events(pool: &PgPool, match_id: i32) -> Result<Vec<MatchEvent>, sqlx::Error> {
    sqlx::query_as::<_, MatchEvent>(
        r#"
        SELECT id, EXTRACT(EPOCH FROM event_time)::float8 AS event_time, event_type, description
        FROM match_events
        WHERE match_id = $1
        ORDER BY id
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

pub async fn get_match_statistics(pool: &PgPool, match_id: i32) -> Result<Vec<MatchStatistic>, sqlx::Error> {
    sqlx::query_as::<_, MatchStatistic>(
        r#"
        SELECT id, athlete_id, stat_key, stat_value
        FROM match_statistics
        WHERE match_id = $1
        ORDER BY id
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

pub async fn get_tournament_summary(
    pool: &PgPool,
    tournament_id: i32,
) -> Result<Option<TournamentSummary>, sqlx::Error> {
    sqlx::query_as::<_, TournamentSummary>(
        "SELECT id, name FROM tournaments WHERE id = $1",
    )
    .bind(tournament_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_match_event(
    pool: &PgPool,
    match_id: i32,
    event: &CreateMatchEventRequest,
) -> Result<CreatedMatchEvent, sqlx::Error> {
    sqlx::query_as::<_, CreatedMatchEvent>(
        r#"
        INSERT INTO match_events (match_id, event_time, event_type, description, athlete_id, created_at, updated_at)
        VALUES ($1, make_interval(secs => $2), $3, $4, $5, NOW(), NOW())
        RETURNING id, match_id, EXTRACT(EPOCH FROM event_time)::float8 AS event_time,
                  event_type, description, athlete_id, created_at, updated_at
        "#,
    )
    .bind(match_id)
    .bind(event.event_time)
    .bind(event.event_type.trim())
    .bind(&event.description)
    .bind(event.athlete_id)
    .fetch_one(pool)
    .await
}
