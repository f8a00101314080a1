//! Admin gate form handlers: login, logout, and appending menu items.
//!
//! Every handler answers with a redirect back to the restaurant's admin
//! page, whether or not the submission changed anything.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::info;

use crate::error::AppResult;
use crate::form::verify_csrf_token;
use crate::models::{NewMenuItem, RestaurantId};
use crate::session::{admin_gate, load_menu_store, save_menu_store, set_admin_gate};
use crate::state::AppState;

use super::helpers::{back_to_admin, ignore_submission};
use super::page::show_page;

/// Create the admin router.
///
/// A GET on a form path is not a view; it falls through to the page
/// router, which renders not-found.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{restaurant_id}/admin/login", post(login).get(show_page))
        .route("/{restaurant_id}/admin/logout", post(logout).get(show_page))
        .route("/{restaurant_id}/admin/items", post(add_item).get(show_page))
}

/// Login form. Username and password are accepted but never checked.
#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(rename = "_token")]
    csrf_token: Option<String>,
}

/// Logout form.
#[derive(Debug, Deserialize)]
struct LogoutForm {
    #[serde(rename = "_token")]
    csrf_token: Option<String>,
}

/// Add menu item form.
#[derive(Debug, Deserialize)]
struct AddItemForm {
    #[serde(rename = "_token")]
    csrf_token: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: String,
}

/// Open the admin gate for a restaurant.
///
/// POST /{restaurant_id}/admin/login
async fn login(
    State(state): State<AppState>,
    session: Session,
    Path(restaurant_id): Path<String>,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    let id = RestaurantId::new(restaurant_id);

    if !verify_csrf_token(&session, form.csrf_token.as_deref()).await? {
        return Ok(ignore_submission(&state, &id, "invalid form token"));
    }

    let gate = admin_gate(&session, &id).await?.login();
    set_admin_gate(&session, &id, gate).await?;
    state.metrics().record_login();
    info!(restaurant = %id, "admin gate opened");

    Ok(back_to_admin(&id))
}

/// Close the admin gate for a restaurant.
///
/// POST /{restaurant_id}/admin/logout
async fn logout(
    State(state): State<AppState>,
    session: Session,
    Path(restaurant_id): Path<String>,
    Form(form): Form<LogoutForm>,
) -> AppResult<Redirect> {
    let id = RestaurantId::new(restaurant_id);

    if !verify_csrf_token(&session, form.csrf_token.as_deref()).await? {
        return Ok(ignore_submission(&state, &id, "invalid form token"));
    }

    let gate = admin_gate(&session, &id).await?.logout();
    set_admin_gate(&session, &id, gate).await?;
    state.metrics().record_logout();
    info!(restaurant = %id, "admin gate closed");

    Ok(back_to_admin(&id))
}

/// Append a menu item to this session's copy of a restaurant's menu.
///
/// POST /{restaurant_id}/admin/items
async fn add_item(
    State(state): State<AppState>,
    session: Session,
    Path(restaurant_id): Path<String>,
    Form(form): Form<AddItemForm>,
) -> AppResult<Redirect> {
    let id = RestaurantId::new(restaurant_id);

    if !verify_csrf_token(&session, form.csrf_token.as_deref()).await? {
        return Ok(ignore_submission(&state, &id, "invalid form token"));
    }

    if !admin_gate(&session, &id).await?.is_logged_in() {
        return Ok(ignore_submission(&state, &id, "admin gate closed"));
    }

    let input = NewMenuItem {
        name: form.name,
        description: form.description,
        price: form.price,
    };
    let Some(item) = input.validate() else {
        return Ok(ignore_submission(&state, &id, "missing name or price"));
    };

    let mut store = load_menu_store(&session, Arc::clone(state.catalog())).await?;
    store.add_menu_item(&id, item);
    save_menu_store(&session, &store).await?;

    state.metrics().record_item_added();
    info!(
        restaurant = %id,
        registered = state.catalog().contains(id.as_str()),
        items = store.get_menu(&id).len(),
        edited_restaurants = store.session_menus().len(),
        "menu item added"
    );

    Ok(back_to_admin(&id))
}
