//! Theme engine with Tera templates.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tera::Tera;
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::RestaurantId;

use super::page::Page;

/// Site name shown in page titles.
const SITE_NAME: &str = "Menuboard";

/// Templates compiled into the binary.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("page.html", include_str!("../../templates/page.html")),
    ("menu_list.html", include_str!("../../templates/menu_list.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("restaurant.html", include_str!("../../templates/restaurant.html")),
    ("admin_login.html", include_str!("../../templates/admin_login.html")),
    (
        "admin_dashboard.html",
        include_str!("../../templates/admin_dashboard.html"),
    ),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Theme engine for rendering pages.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with only the built-in templates.
    pub fn builtin() -> Result<Self> {
        let mut tera = Self::builtin_tera()?;
        Self::register_filters(&mut tera);
        Ok(Self { tera })
    }

    /// Create a theme engine where templates in `template_dir` replace the
    /// built-in ones of the same name. Anything the directory lacks falls
    /// back to the built-in set.
    pub fn with_overrides(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        // parse() defers inheritance resolution until the built-ins are merged
        let mut tera = Tera::parse(pattern_str).context("failed to parse template overrides")?;
        let overrides = tera.get_template_names().count();

        tera.extend(&Self::builtin_tera()?)
            .context("failed to merge built-in templates")?;
        Self::register_filters(&mut tera);

        debug!(
            dir = %template_dir.display(),
            overrides,
            "loaded template overrides"
        );

        Ok(Self { tera })
    }

    fn builtin_tera() -> Result<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.iter().copied())
            .context("failed to load built-in templates")?;
        Ok(tera)
    }

    /// Register custom Tera filters.
    ///
    /// Every filter takes a restaurant id. `admin_action` also needs an
    /// `action` argument naming the form endpoint.
    fn register_filters(tera: &mut Tera) {
        tera.register_filter(
            "display_name",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let id = tera::try_get_value!("display_name", "value", String, value);
                Ok(tera::Value::String(RestaurantId::new(id).display_name()))
            },
        );

        tera.register_filter(
            "view_path",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let id = tera::try_get_value!("view_path", "value", String, value);
                Ok(tera::Value::String(RestaurantId::new(id).view_path()))
            },
        );

        tera.register_filter(
            "admin_path",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let id = tera::try_get_value!("admin_path", "value", String, value);
                Ok(tera::Value::String(RestaurantId::new(id).admin_path()))
            },
        );

        tera.register_filter(
            "admin_action",
            |value: &tera::Value, args: &HashMap<String, tera::Value>| {
                let id = tera::try_get_value!("admin_action", "value", String, value);
                let Some(action) = args.get("action") else {
                    return Err(tera::Error::msg(
                        "filter `admin_action` expects an `action` argument",
                    ));
                };
                let action = tera::try_get_value!("admin_action", "action", String, action);
                Ok(tera::Value::String(
                    RestaurantId::new(id).admin_action_path(&action),
                ))
            },
        );
    }

    /// Render a full page: the view's template wrapped in the site layout.
    pub fn render_page(&self, page: &Page<'_>, catalog: &Catalog) -> tera::Result<String> {
        let mut context = tera::Context::new();
        context.insert("site_name", SITE_NAME);
        context.insert(
            "restaurants",
            &catalog.restaurant_ids().collect::<Vec<_>>(),
        );
        context.insert("admin_entry", &catalog.first());
        page.fill_context(&mut context);

        self.tera.render(page.template(), &context)
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
