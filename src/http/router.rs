use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{game, health, http::cors};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let divisions_routes = Router::new().route("/", get(game::handlers::divisions::list));
    let sessions_routes = Router::new()
        .route("/", post(game::handlers::session::create))
        .route("/:session-id", get(game::handlers::session::view))
        .route(
            "/:session-id/select",
            post(game::handlers::player_actions::select_division),
        )
        .route(
            "/:session-id/guess",
            post(game::handlers::player_actions::submit_guess),
        )
        .route(
            "/:session-id/reveal",
            post(game::handlers::player_actions::reveal),
        )
        .route(
            "/:session-id/next",
            post(game::handlers::player_actions::next_round),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/divisions", divisions_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
