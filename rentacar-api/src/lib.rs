use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // Public read API without sessions: any origin, method and header
    let cors = CorsLayer::permissive();

    Router::new()
        .merge(health::routes())
        .merge(catalog::routes())
        .merge(bookings::routes())
        .merge(diagnostics::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
