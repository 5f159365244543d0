use crate::app_context::AppContext;
use crate::game::services::http::DivisionsHttpHandler;
use crate::game::services::responses::DivisionsResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn list(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<DivisionsResponse> {
    Json(DivisionsHttpHandler::new(app_context).list())
}
