use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "rentacar-excursions";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Backend running",
        "service": SERVICE_NAME,
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
