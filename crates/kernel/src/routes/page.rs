//! Page views: home, restaurant menu, admin gate, and not-found.
//!
//! Every GET that no other router claims lands here and is resolved with
//! [`Route::resolve`], so the path grammar lives in one place.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;
use tracing::debug;

use crate::error::AppResult;
use crate::form::generate_csrf_token;
use crate::route::Route;
use crate::session::{admin_gate, load_menu_store, reset_admin_gate};
use crate::state::AppState;
use crate::theme::Page;

use super::helpers::render_page;

/// Fetch metadata header set by browsers on every request.
const SEC_FETCH_MODE: &str = "sec-fetch-mode";

/// Whether the request is the user loading a document.
///
/// Browsers mark subresource and script fetches with a `Sec-Fetch-Mode`
/// other than `navigate`. Clients that send no fetch metadata are treated
/// as navigating.
fn is_navigation(headers: &HeaderMap) -> bool {
    match headers.get(SEC_FETCH_MODE) {
        Some(mode) => mode.as_bytes().eq_ignore_ascii_case(b"navigate"),
        None => true,
    }
}

/// Close the admin gate, but only when the user actually left the page.
async fn leave_admin(session: &Session, headers: &HeaderMap) -> AppResult<()> {
    if is_navigation(headers) {
        reset_admin_gate(session).await?;
    }
    Ok(())
}

/// Render whatever view the request path resolves to.
///
/// Navigating from the admin view to any other page resets the admin gate.
pub async fn show_page(
    State(state): State<AppState>,
    session: Session,
    method: Method,
    headers: HeaderMap,
    uri: Uri,
) -> AppResult<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let route = Route::resolve(uri.path());
    debug!(path = uri.path(), route = %route, "resolved page route");

    match &route {
        Route::Home => {
            leave_admin(&session, &headers).await?;
            render_page(&state, &Page::Home)
        }
        Route::Restaurant(id) => {
            leave_admin(&session, &headers).await?;
            let store = load_menu_store(&session, Arc::clone(state.catalog())).await?;
            render_page(
                &state,
                &Page::Restaurant {
                    id,
                    menu: store.get_menu(id),
                },
            )
        }
        Route::Admin(id) => {
            let gate = admin_gate(&session, id).await?;
            let csrf_token = generate_csrf_token(&session).await?;

            if gate.is_logged_in() {
                let store = load_menu_store(&session, Arc::clone(state.catalog())).await?;
                render_page(
                    &state,
                    &Page::AdminDashboard {
                        id,
                        menu: store.get_menu(id),
                        csrf_token: &csrf_token,
                    },
                )
            } else {
                // A binding for some other restaurant does not survive this view
                leave_admin(&session, &headers).await?;
                render_page(
                    &state,
                    &Page::AdminLogin {
                        id,
                        csrf_token: &csrf_token,
                    },
                )
            }
        }
        Route::NotFound => {
            leave_admin(&session, &headers).await?;
            render_page(&state, &Page::NotFound)
        }
    }
}
