// src/routes/auth.rs
use actix_web::{post, HttpResponse};

use crate::handlers::auth_handler::issue_token;

#[post("/token")]
async fn token() -> HttpResponse {
    issue_token().await
}
