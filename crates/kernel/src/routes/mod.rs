//! HTTP route handlers.

pub mod admin;
pub mod health;
pub mod helpers;
pub mod metrics;
pub mod page;
pub mod static_files;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::middleware::track_metrics;
use crate::state::AppState;

/// Build the full application: every router plus the middleware stack.
///
/// Page views are the fallback, so any path the form and service routes
/// don't claim resolves through the page router.
pub fn build_app(state: AppState, session_layer: SessionManagerLayer<MemoryStore>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(metrics::router())
        .merge(static_files::router())
        .merge(admin::router())
        .fallback(page::show_page)
        // Middleware layers (last added = first executed in request flow):
        // TraceLayer → compression → metrics → session → routes
        .layer(session_layer)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            track_metrics,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
