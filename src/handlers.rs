use axum::Json;
use serde_json::{json, Value};

pub mod auth;
pub mod dashboard;
pub mod developer;
pub mod maintenance;
pub mod session;
pub mod settings;
pub mod users;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Servidor no ar")
    )
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
