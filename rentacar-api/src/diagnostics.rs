use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const MAX_ERROR_CHARS: usize = 50;
const MAX_COLLECTIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct StoreDiagnostic {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/test", get(test_database))
}

fn set_marker(is_set: bool) -> &'static str {
    if is_set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

/// GET /test
async fn test_database(State(state): State<AppState>) -> Json<StoreDiagnostic> {
    let mut diagnostic = StoreDiagnostic {
        backend: "✅ Running",
        database: "⚠️ Available but not initialized".to_string(),
        database_url: set_marker(state.database.url_is_set()),
        database_name: set_marker(state.database.name_is_set()),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    if state.store.is_present() {
        match state.store.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_COLLECTIONS);
                diagnostic.collections = names;
                diagnostic.database = "✅ Connected & Working".to_string();
                diagnostic.connection_status = "Connected";
            }
            Err(e) => {
                let reason: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                diagnostic.database = format!("⚠️ Connected but Error: {}", reason);
            }
        }
    }

    Json(diagnostic)
}
