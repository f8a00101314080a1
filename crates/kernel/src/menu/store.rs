//! Append-only menu store.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{MenuItem, RestaurantId};

/// Menus that diverged from the catalog seed during one session.
///
/// Each entry is the complete ordered menu for that restaurant, seed items
/// included. Restaurants never written to are absent and read through to
/// the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionMenus(BTreeMap<RestaurantId, Vec<MenuItem>>);

impl SessionMenus {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of restaurants with a materialized menu.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Per-session view of every restaurant's menu.
///
/// Reads fall back to the catalog seed (or to an empty menu for ids the
/// catalog does not know). The first append for a restaurant copies its
/// seed into the session and appends from there on. Items are never edited,
/// reordered, or removed.
#[derive(Debug, Clone)]
pub struct MenuStore {
    catalog: Arc<Catalog>,
    menus: SessionMenus,
}

impl MenuStore {
    /// Rebuild a store from menus previously saved in a session.
    pub fn with_session_menus(catalog: Arc<Catalog>, menus: SessionMenus) -> Self {
        Self { catalog, menus }
    }

    /// Current menu for `id`, in insertion order.
    pub fn get_menu(&self, id: &RestaurantId) -> &[MenuItem] {
        match self.menus.0.get(id) {
            Some(menu) => menu.as_slice(),
            None => self.catalog.seed_menu(id.as_str()),
        }
    }

    /// Append `item` to the end of `id`'s menu.
    ///
    /// No deduplication: appending the same item twice yields two entries.
    /// Unknown ids start from an empty menu.
    pub fn add_menu_item(&mut self, id: &RestaurantId, item: MenuItem) {
        let catalog = &self.catalog;
        self.menus
            .0
            .entry(id.clone())
            .or_insert_with(|| catalog.seed_menu(id.as_str()).to_vec())
            .push(item);
    }

    /// Menus to persist back into the session.
    pub fn session_menus(&self) -> &SessionMenus {
        &self.menus
    }
}
