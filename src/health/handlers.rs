use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        error: false,
        divisions_count: app_context.divisions.len(),
    })
}
