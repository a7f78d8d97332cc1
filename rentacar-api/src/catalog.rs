use axum::{extract::State, routing::get, Json, Router};
use rentacar_catalog::CatalogKind;
use rentacar_core::Document;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/cars", get(list_cars))
        .route("/api/excursions", get(list_excursions))
}

/// GET /api/cars
async fn list_cars(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.catalog.list(CatalogKind::Car).await.items)
}

/// GET /api/excursions
async fn list_excursions(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.catalog.list(CatalogKind::Excursion).await.items)
}
