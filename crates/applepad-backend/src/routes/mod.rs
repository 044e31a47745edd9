pub mod generate;
pub mod refine;
pub mod system;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
}

pub fn image_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-image", post(generate::generate_image))
        .route("/refine", post(refine::refine))
}

/// The full application, static files and middleware included.
pub fn router(state: Arc<AppState>) -> Router {
    system_routes()
        .merge(image_routes())
        .route_service(
            "/interior_style_library.json",
            ServeFile::new(&state.library_path),
        )
        .nest_service("/static", ServeDir::new(&state.data_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
