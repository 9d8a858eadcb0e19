// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::athlete::AthleteDetail;
use crate::models::catalog::TournamentSummary;

/// Individual match between two athletes
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: i32,
    pub tournament_id: i32,
    pub round: Option<i32>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub athlete1_id: i32,
    pub athlete2_id: i32,
    pub score1: i32,
    pub score2: i32,
    pub status: String,
    pub winner_id: Option<i32>,
}

/// Event as listed inside a match detail.
///
/// `event_time` is the elapsed time in the match, in seconds.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct MatchEvent {
    pub id: i32,
    pub event_time: f64,
    pub event_type: String,
    pub description: Option<String>,
}

/// Key/value statistic attached to a match
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchStatistic {
    pub id: i32,
    pub athlete_id: Option<i32>,
    pub stat_key: Option<String>,
    pub stat_value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SetResult {
    pub set_number: i32,
    pub score1: i32,
    pub score2: i32,
}

/// Match with tournament, athletes, set results and events
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchFullDetail {
    pub id: i32,
    pub tournament: Option<TournamentSummary>,
    pub round: Option<i32>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub athlete1: Option<AthleteDetail>,
    pub athlete2: Option<AthleteDetail>,
    pub score1: i32,
    pub score2: i32,
    pub status: String,
    pub winner_id: Option<i32>,
    pub set_results: Vec<SetResult>,
    pub events: Vec<MatchEvent>,
}

/// Body of `POST /matches/{match_id}/events`
///
/// `event_time` is read as seconds, an ISO-8601 duration or an `HH:MM:SS` string.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchEventRequest {
    #[serde(deserialize_with = "crate::utils::event_time::deserialize_seconds")]
    pub event_time: f64,
    pub event_type: String,
    pub description: Option<String>,
    pub athlete_id: Option<i32>,
}

impl CreateMatchEventRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !self.event_time.is_finite() || self.event_time < 0.0 {
            return Err("event_time must be a non-negative number of seconds".to_string());
        }

        let event_type = self.event_type.trim();
        if event_type.is_empty() {
            return Err("event_type cannot be empty".to_string());
        }
        if event_type.chars().count() > 50 {
            return Err("event_type cannot exceed 50 characters".to_string());
        }

        Ok(())
    }
}

/// Stored event as returned after creation
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct CreatedMatchEvent {
    pub id: i32,
    pub match_id: i32,
    pub event_time: f64,
    pub event_type: String,
    pub description: Option<String>,
    pub athlete_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
