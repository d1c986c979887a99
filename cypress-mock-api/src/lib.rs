pub mod generator;
pub mod handlers;

use axum::{Router, routing::post};

pub use generator::ResponseGenerator;

/// Builds the mock's router: `POST /` answers with the next runs window,
/// everything else falls through to axum's 404/405.
pub fn router(generator: ResponseGenerator) -> Router {
    Router::new()
        .route("/", post(handlers::runs_list))
        .with_state(generator)
}
