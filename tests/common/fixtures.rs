//! Direct inserts used to seed a test database.
use sqlx::PgPool;

pub async fn insert_athlete(pool: &PgPool, first_name: &str, last_name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO athletes (first_name, last_name, photo_url)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(format!("https://cdn.example.com/{}.png", last_name.to_lowercase()))
    .fetch_one(pool)
    .await
    .expect("Failed to insert athlete")
}

pub async fn insert_club(pool: &PgPool, name: &str, city: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO clubs (name, address, city, region)
        VALUES ($1, 'Via Roma 1', $2, 'Lazio')
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(city)
    .fetch_one(pool)
    .await
    .expect("Failed to insert club")
}

pub async fn link_athlete_to_club(pool: &PgPool, athlete_id: i32, club_id: i32) {
    sqlx::query("INSERT INTO athlete_clubs (athlete_id, club_id) VALUES ($1, $2)")
        .bind(athlete_id)
        .bind(club_id)
        .execute(pool)
        .await
        .expect("Failed to link athlete to club");
}

pub async fn insert_team(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO teams (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to insert team")
}

pub async fn add_team_member(pool: &PgPool, team_id: i32, athlete_id: i32) {
    sqlx::query("INSERT INTO team_members (team_id, athlete_id, role) VALUES ($1, $2, 'player')")
        .bind(team_id)
        .bind(athlete_id)
        .execute(pool)
        .await
        .expect("Failed to add team member");
}

pub async fn add_favorite_votes(pool: &PgPool, athlete_id: i32, votes: i32) {
    for user_id in 1..=votes {
        sqlx::query("INSERT INTO favorite_athletes (user_id, athlete_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(athlete_id)
            .execute(pool)
            .await
            .expect("Failed to insert favorite vote");
    }
}

pub async fn insert_tournament(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO tournaments (name, start_date, end_date, location, is_open)
        VALUES ($1, NOW(), NOW() + INTERVAL '2 days', 'Roma', TRUE)
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to insert tournament")
}

pub async fn insert_match(pool: &PgPool, tournament_id: i32, athlete1_id: i32, athlete2_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO matches (tournament_id, round, scheduled_at, athlete1_id, athlete2_id, score1, score2)
        VALUES ($1, 1, NOW(), $2, $3, 2, 0)
        RETURNING id
        "#,
    )
    .bind(tournament_id)
    .bind(athlete1_id)
    .bind(athlete2_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert match")
}

pub async fn insert_match_event(pool: &PgPool, match_id: i32, seconds: f64, event_type: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO match_events (match_id, event_time, event_type, description)
        VALUES ($1, make_interval(secs => $2), $3, 'seeded')
        RETURNING id
        "#,
    )
    .bind(match_id)
    .bind(seconds)
    .bind(event_type)
    .fetch_one(pool)
    .await
    .expect("Failed to insert match event")
}

pub async fn insert_match_statistic(pool: &PgPool, match_id: i32, athlete_id: i32, key: &str, value: &str) {
    sqlx::query(
        r#"
        INSERT INTO match_statistics (match_id, athlete_id, stat_key, stat_value)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(match_id)
    .bind(athlete_id)
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
    .expect("Failed to insert match statistic");
}

pub async fn insert_team_match(pool: &PgPool, tournament_id: i32, team1_id: i32, team2_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO team_matches (tournament_id, round, team1_id, team2_id, score1, score2, status, winner_team_id)
        VALUES ($1, 2, $2, $3, 3, 1, 'FINISHED', $2)
        RETURNING id
        "#,
    )
    .bind(tournament_id)
    .bind(team1_id)
    .bind(team2_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert team match")
}
