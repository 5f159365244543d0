use crate::app_context::{AppContext, RequestContext};
use crate::game::services::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::game::services::requests::CreateSessionRequest;
use crate::game::services::responses::SessionResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    request: Option<Json<CreateSessionRequest>>,
) -> Json<SessionResponse> {
    let request = request.map(|Json(request)| request).unwrap_or_default();
    let response = CreateSessionHttpHandler::new(app_context)
        .create(request)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn view(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .view()
        .await;
    Json(response)
}
