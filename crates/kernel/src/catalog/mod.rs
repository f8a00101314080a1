//! Restaurant catalog.
//!
//! The catalog is the immutable configuration the rest of the kernel reads
//! from: the ordered list of restaurants (the registry) and the menu each
//! restaurant starts with (the seed). It is built once at startup, either
//! from the built-in data or from a TOML file, and shared behind an `Arc`.
//!
//! ```toml
//! [[restaurant]]
//! id = "pizza-hut"
//!
//! [[restaurant.menu]]
//! name = "Pepperoni Pizza"
//! description = "Classic pepperoni"
//! price = 12
//! ```

mod builtin;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{MenuItem, RestaurantId};

/// Maximum catalog file size (1 MB).
const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024;

/// Path segments owned by kernel routes; a restaurant with one of these ids
/// would be unreachable.
pub const RESERVED_SEGMENTS: &[&str] = &["health", "metrics", "favicon.ico"];

/// Catalog loading and validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog lists no restaurants")]
    Empty,

    #[error("restaurant id must not be empty")]
    EmptyId,

    #[error("restaurant id '{0}' must be a single path segment without whitespace")]
    InvalidId(String),

    #[error("restaurant id '{0}' is reserved")]
    ReservedId(String),

    #[error("duplicate restaurant id '{0}'")]
    DuplicateId(String),

    #[error("menu item #{index} of '{restaurant}' has an empty name")]
    EmptyItemName { restaurant: String, index: usize },

    #[error("catalog file {} exceeds {} bytes", path.display(), MAX_CATALOG_FILE_SIZE)]
    TooLarge { path: PathBuf },

    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog")]
    Parse(#[from] toml::de::Error),
}

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "restaurant")]
    restaurants: Vec<RestaurantFile>,
}

#[derive(Debug, Deserialize)]
struct RestaurantFile {
    id: String,
    #[serde(default)]
    menu: Vec<MenuItem>,
}

/// One registry entry with its seed menu.
#[derive(Debug, Clone)]
struct Restaurant {
    id: RestaurantId,
    seed: Vec<MenuItem>,
}

/// Ordered restaurant registry plus seed menus.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog from ordered entries, validating ids and item names.
    pub fn new(entries: Vec<(RestaurantId, Vec<MenuItem>)>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut restaurants = Vec::with_capacity(entries.len());

        for (id, seed) in entries {
            validate_id(&id)?;
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }
            if let Some(index) = seed.iter().position(|item| item.name.is_empty()) {
                return Err(CatalogError::EmptyItemName {
                    restaurant: id.to_string(),
                    index,
                });
            }
            restaurants.push(Restaurant { id, seed });
        }

        Ok(Self { restaurants })
    }

    /// The built-in four-restaurant catalog.
    pub fn builtin() -> Self {
        Self {
            restaurants: builtin::entries()
                .into_iter()
                .map(|(id, seed)| Restaurant { id, seed })
                .collect(),
        }
    }

    /// Parse a TOML catalog document.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(input)?;
        Self::new(
            file.restaurants
                .into_iter()
                .map(|r| (RestaurantId::new(r.id), r.menu))
                .collect(),
        )
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let io_err = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > MAX_CATALOG_FILE_SIZE {
            return Err(CatalogError::TooLarge {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(io_err)?;
        let catalog = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), restaurants = catalog.restaurant_count(), "loaded catalog file");
        Ok(catalog)
    }

    /// Restaurant ids in registry order.
    pub fn restaurant_ids(&self) -> impl Iterator<Item = &RestaurantId> {
        self.restaurants.iter().map(|r| &r.id)
    }

    /// First registry entry (the catalog is never empty).
    pub fn first(&self) -> Option<&RestaurantId> {
        self.restaurants.first().map(|r| &r.id)
    }

    /// Number of registered restaurants.
    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether `id` is a registered restaurant.
    pub fn contains(&self, id: &str) -> bool {
        self.restaurants.iter().any(|r| r.id.as_str() == id)
    }

    /// Seed menu for `id`; empty for ids the registry does not know.
    pub fn seed_menu(&self, id: &str) -> &[MenuItem] {
        self.restaurants
            .iter()
            .find(|r| r.id.as_str() == id)
            .map(|r| r.seed.as_slice())
            .unwrap_or(&[])
    }
}

fn validate_id(id: &RestaurantId) -> Result<(), CatalogError> {
    let raw = id.as_str();
    if raw.is_empty() {
        return Err(CatalogError::EmptyId);
    }
    if raw.contains('/') || raw.chars().any(char::is_whitespace) {
        return Err(CatalogError::InvalidId(raw.to_string()));
    }
    if RESERVED_SEGMENTS.contains(&raw) {
        return Err(CatalogError::ReservedId(raw.to_string()));
    }
    Ok(())
}
