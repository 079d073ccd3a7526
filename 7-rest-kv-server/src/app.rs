use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::store::KvStore;

/// Builds the HTTP application:
/// - `GET /list`               lists every entry
/// - `GET /entry/:key`         reads one entry
/// - `PUT /entry/:key/:value`  creates or overwrites one entry
pub fn build_app(store: KvStore) -> Router {
    Router::new()
        .route("/list", get(handlers::list))
        .route("/entry/:key", get(handlers::read_entry))
        .route("/entry/:key/:value", put(handlers::write_entry))
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
