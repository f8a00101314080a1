//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Holds only immutable
/// configuration and process-wide counters; all mutable menu and login
/// state lives in the per-request session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Restaurant registry and seed menus.
    catalog: Arc<Catalog>,

    /// Theme engine for template rendering.
    theme: Arc<ThemeEngine>,

    /// Prometheus metrics.
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Loads the catalog file and template overrides when configured.
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin(),
        };
        info!(restaurants = catalog.restaurant_count(), "Catalog loaded");

        let theme = match &config.templates_dir {
            Some(dir) => ThemeEngine::with_overrides(dir)?,
            None => ThemeEngine::builtin()?,
        };

        Ok(Self::from_parts(catalog, theme))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(catalog: Catalog, theme: ThemeEngine) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog: Arc::new(catalog),
                theme: Arc::new(theme),
                metrics: Arc::new(Metrics::new()),
            }),
        }
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.inner.catalog
    }

    /// Get the theme engine.
    pub fn theme(&self) -> &Arc<ThemeEngine> {
        &self.inner.theme
    }

    /// Get the metrics registry.
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.inner.metrics
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("restaurants", &self.inner.catalog.restaurant_count())
            .field("theme", &self.inner.theme)
            .finish()
    }
}
