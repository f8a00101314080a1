//! Session management.
//!
//! Sessions live in process memory and die with the server, which is all
//! the persistence menu edits get. Each session carries its own menu store
//! overlay and at most one admin gate binding.

use std::sync::Arc;

use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::auth::{AdminBinding, AdminGate};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::menu::{MenuStore, SessionMenus};
use crate::models::RestaurantId;

/// Session key for the per-session menu overlay.
pub const SESSION_MENUS: &str = "menus";

/// Session key for the admin gate binding.
pub const SESSION_ADMIN_GATE: &str = "admin_gate";

/// Parse a SameSite policy name; unknown values fall back to Lax.
pub fn same_site_from_str(value: &str) -> SameSite {
    match value {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// Create the session layer backed by the in-memory store.
pub fn create_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.cookie_secure)
        .with_http_only(true)
        .with_same_site(same_site_from_str(&config.cookie_same_site))
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            config.session_expiry_hours,
        )))
}

/// Load this session's menu store.
///
/// A session that never appended anything reads straight from the catalog.
pub async fn load_menu_store(session: &Session, catalog: Arc<Catalog>) -> AppResult<MenuStore> {
    let menus: SessionMenus = session.get(SESSION_MENUS).await?.unwrap_or_default();
    Ok(MenuStore::with_session_menus(catalog, menus))
}

/// Persist the menu store back into the session.
///
/// A store with no edits leaves nothing behind in the session.
pub async fn save_menu_store(session: &Session, store: &MenuStore) -> AppResult<()> {
    let menus = store.session_menus();
    if menus.is_empty() {
        session.remove_value(SESSION_MENUS).await?;
    } else {
        session.insert(SESSION_MENUS, menus).await?;
    }
    Ok(())
}

/// Admin gate as seen from `restaurant`'s admin page.
pub async fn admin_gate(session: &Session, restaurant: &RestaurantId) -> AppResult<AdminGate> {
    let binding: Option<AdminBinding> = session.get(SESSION_ADMIN_GATE).await?;
    Ok(AdminBinding::gate_for(binding.as_ref(), restaurant))
}

/// Bind the admin gate to `restaurant` in the given state.
pub async fn set_admin_gate(
    session: &Session,
    restaurant: &RestaurantId,
    gate: AdminGate,
) -> AppResult<()> {
    session
        .insert(
            SESSION_ADMIN_GATE,
            AdminBinding::new(restaurant.clone(), gate),
        )
        .await?;
    Ok(())
}

/// Drop any admin gate binding (navigation away from an admin page).
pub async fn reset_admin_gate(session: &Session) -> AppResult<()> {
    session.remove_value(SESSION_ADMIN_GATE).await?;
    Ok(())
}
