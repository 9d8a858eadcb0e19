use sqlx::PgPool;

use crate::models::catalog::{Club, Sport, Tournament};

pub async fn get_sports(pool: &PgPool) -> Result<Vec<Sport>, sqlx::Error> {
    sqlx::query_as::<_, Sport>(
        r#"
        SELECT id, name, logo_url
        FROM sports
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_clubs(pool: &PgPool) -> Result<Vec<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>(
        r#"
        SELECT id, name, address, city, region, logo_url
        FROM clubs
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_tournaments(pool: &PgPool) -> Result<Vec<Tournament>, sqlx::Error> {
    sqlx::query_as::<_, Tournament>(
        r#"
        SELECT id, name, start_date, end_date, location
        FROM tournaments
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}
