use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, resolve_handler, shorten_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the HTTP router.
    ///
    /// CORS keeps the wildcard policy of the original service: any
    /// origin, method, and headers, preflight included.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten/{app}", get(shorten_handler))
            .route("/s/{app}/{id}", any(resolve_handler))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
