//! Shared route helpers for page rendering.

use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::debug;

use crate::error::AppResult;
use crate::models::RestaurantId;
use crate::state::AppState;
use crate::theme::Page;

/// Render a page through the theme engine with its own status code.
pub fn render_page(state: &AppState, page: &Page<'_>) -> AppResult<Response> {
    let html = state.theme().render_page(page, state.catalog())?;
    Ok((page.status(), Html(html)).into_response())
}

/// Redirect back to a restaurant's admin page.
pub fn back_to_admin(restaurant: &RestaurantId) -> Redirect {
    Redirect::to(&restaurant.admin_path())
}

/// Drop a submission without changing any state.
///
/// Invalid input is never an error page; the admin view simply comes back
/// unchanged.
pub fn ignore_submission(state: &AppState, restaurant: &RestaurantId, reason: &str) -> Redirect {
    state.metrics().record_ignored_submission();
    debug!(restaurant = %restaurant, reason, "form submission ignored");
    back_to_admin(restaurant)
}
