use crate::app_context::{AppContext, RequestContext};
use crate::game::services::http::SessionHttpHandler;
use crate::game::services::requests::DivisionRequest;
use crate::game::services::responses::{GuessResponse, NextRoundResponse, SelectDivisionResponse};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn select_division(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(request): Json<DivisionRequest>,
) -> Json<SelectDivisionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .select_division(request.division)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(request): Json<DivisionRequest>,
) -> Json<GuessResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .submit_guess(request.division)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn reveal(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<GuessResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .reveal()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn next_round(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<NextRoundResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .next_round()
        .await;
    Json(response)
}
