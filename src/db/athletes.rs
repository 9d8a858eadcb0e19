use sqlx::PgPool;

use crate::models::athlete::{Athlete, AthleteWithClubRow, TopAthlete};

pub const TOP_ATHLETES_LIMIT: i64 = 10;

/// Athletes listed as members of a team
pub async fn get_team_athletes(pool: &PgPool, team_id: i32) -> Result<Vec<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"
        SELECT a.id, a.first_name, a.last_name, a.photo_url
        FROM team_members tm
        INNER JOIN athletes a ON a.id = tm.athlete_id
        WHERE tm.team_id = $1
        ORDER BY a.id
        "#,
    )
    .bind(team_id)
    .fetch_all(pool)
    .await
}

/// Athletes with the most favorite votes; equal counts are ordered by athlete id
pub async fn get_top_athletes(pool: &PgPool, limit: i64) -> Result<Vec<TopAthlete>, sqlx::Error> {
    sqlx::query_as::<_, TopAthlete>(
        r#"
        SELECT a.id, a.first_name, a.last_name, a.photo_url,
               COUNT(f.id) AS votes
        FROM athletes a
        INNER JOIN favorite_athletes f ON f.athlete_id = a.id
        GROUP BY a.id
        ORDER BY votes DESC, a.id ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Athlete with the lowest-id club they belong to
pub async fn get_athlete_with_club(
    pool: &PgPool,
    athlete_id: i32,
) -> Result<Option<AthleteWithClubRow>, sqlx::Error> {
    sqlx::query_as::<_, AthleteWithClubRow>(
        r#"
        SELECT a.id, a.first_name, a.last_name, a.photo_url,
               c.id AS club_id, c.name AS club_name
        FROM athletes a
        LEFT JOIN LATERAL (
            SELECT cl.id, cl.name
            FROM athlete_clubs ac
            INNER JOIN clubs cl ON cl.id = ac.club_id
            WHERE ac.athlete_id = a.id
            ORDER BY cl.id
            LIMIT 1
        ) c ON TRUE
        WHERE a.id = $1
        "#,
    )
    .bind(athlete_id)
    .fetch_optional(pool)
    .await
}
