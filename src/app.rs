use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/estadisticas", post(handlers::refresh))
        .route("/datos", post(handlers::load_data))
        .route("/filtrar", post(handlers::filter_data))
        .route("/analizar", post(handlers::analyze_data))
        .route("/registro", post(handlers::load_record))
        .with_state(state)
}
