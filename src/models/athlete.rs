// src/models/athlete.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public projection of an athlete
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Athlete {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
}

/// Athlete ranked by the number of users who marked them as favorite
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TopAthlete {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub athlete: Athlete,
    pub votes: i64,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClubSummary {
    pub id: i32,
    pub name: String,
}

/// Athlete row joined with the club it is shown under, if any
#[derive(Debug, FromRow)]
pub struct AthleteWithClubRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
    pub club_id: Option<i32>,
    pub club_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AthleteDetail {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
    pub club: Option<ClubSummary>,
}

impl From<AthleteWithClubRow> for AthleteDetail {
    fn from(row: AthleteWithClubRow) -> Self {
        let club = match (row.club_id, row.club_name) {
            (Some(id), Some(name)) => Some(ClubSummary { id, name }),
            _ => None,
        };
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            photo_url: row.photo_url,
            club,
        }
    }
}
