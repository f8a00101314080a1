//! Browser-requested static assets.
//!
//! The site ships no icon, but browsers ask for `/favicon.ico` on their
//! own. Answering here keeps that request away from the page router and
//! the session.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Create the static files router.
pub fn router() -> Router<AppState> {
    Router::new().route("/favicon.ico", get(favicon))
}

/// There is no icon; let the browser cache the miss.
async fn favicon() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, "public, max-age=86400")],
    )
        .into_response()
}
