//! Restaurant identifier.
//!
//! A restaurant id is both a lookup key into the catalog and a URL path
//! segment. It is stored exactly as given; the only transformation applied
//! anywhere is the hyphen-to-space rewrite used for display.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token identifying one restaurant (e.g. `pizza-hut`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Wrap a raw token. No validation happens here: any path segment is a
    /// routable restaurant id, known to the catalog or not.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name: every `-` becomes a space.
    pub fn display_name(&self) -> String {
        self.0.replace('-', " ")
    }

    /// Path of the public restaurant view.
    pub fn view_path(&self) -> String {
        format!("/{}", urlencoding::encode(&self.0))
    }

    /// Path of the admin view.
    pub fn admin_path(&self) -> String {
        format!("{}/admin", self.view_path())
    }

    /// Form action for an admin sub-action (`login`, `logout`, `items`).
    pub fn admin_action_path(&self, action: &str) -> String {
        format!("{}/{action}", self.admin_path())
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RestaurantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RestaurantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RestaurantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RestaurantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
