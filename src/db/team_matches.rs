use sqlx::PgPool;

use crate::models::team::TeamMatch;

pub async fn get_team_matches(pool: &PgPool) -> Result<Vec<TeamMatch>, sqlx::Error> {
    sqlx::query_as::<_, TeamMatch>(
        r#"
        SELECT id, tournament_id, round, scheduled_at, team1_id, team2_id,
               score1, score2, status, winner_team_id
        FROM team_matches
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}
