use actix_web::{error, web, HttpRequest};

pub mod athletes;
pub mod auth;
pub mod backend_health;
pub mod catalog;
pub mod matches;

use crate::error::ApiError;
use crate::middleware::auth::AuthMiddleware;

/// Malformed JSON bodies are reported as 422 with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, req: &HttpRequest| {
        tracing::warn!("Rejected JSON body for {}: {}", req.path(), err);
        ApiError::Unprocessable(err.to_string()).into()
    })
}

/// Unparseable path parameters (e.g. a non-numeric id) are reported as 422.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req: &HttpRequest| {
        tracing::debug!("Invalid path parameter for {}: {}", req.path(), err);
        ApiError::Unprocessable(format!("Invalid path parameter: {}", err)).into()
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(auth::token);

    cfg.service(catalog::get_sports)
        .service(catalog::get_clubs)
        .service(catalog::get_tournaments)
        .service(catalog::get_team_matches)
        .service(athletes::get_team_athletes)
        .service(athletes::get_top_athletes);

    // `/matches/highlights` must be registered before `/matches/{match_id}`
    cfg.service(
        web::scope("/matches")
            .service(matches::get_highlight_matches)
            .service(matches::get_match_detail)
            .service(
                web::resource("/{match_id}/events")
                    .wrap(AuthMiddleware)
                    .route(web::post().to(matches::create_match_event))
            )
    );
}
