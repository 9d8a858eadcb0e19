// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Match between two teams
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamMatch {
    pub id: i32,
    pub tournament_id: i32,
    pub round: Option<i32>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub team1_id: i32,
    pub team2_id: i32,
    pub score1: i32,
    pub score2: i32,
    pub status: String,
    pub winner_team_id: Option<i32>,
}
