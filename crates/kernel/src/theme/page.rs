//! Page view models.
//!
//! A [`Page`] is everything one view needs to render, already resolved from
//! the route, the session's menu store, and the admin gate.

use axum::http::StatusCode;
use serde::Serialize;

use crate::models::{MenuItem, RestaurantId};

/// Static admin identifier shown on the dashboard.
const ADMIN_ID: &str = "ADMIN001";

/// Static status label shown on the dashboard.
const STATUS_LABEL: &str = "Active";

/// One renderable view.
#[derive(Debug, Clone)]
pub enum Page<'a> {
    Home,
    Restaurant {
        id: &'a RestaurantId,
        menu: &'a [MenuItem],
    },
    AdminLogin {
        id: &'a RestaurantId,
        csrf_token: &'a str,
    },
    AdminDashboard {
        id: &'a RestaurantId,
        menu: &'a [MenuItem],
        csrf_token: &'a str,
    },
    NotFound,
}

/// Template-facing menu item with a preformatted price.
#[derive(Debug, Serialize)]
struct MenuItemView<'a> {
    name: &'a str,
    description: &'a str,
    price: String,
}

fn menu_view(menu: &[MenuItem]) -> Vec<MenuItemView<'_>> {
    menu.iter()
        .map(|item| MenuItemView {
            name: &item.name,
            description: &item.description,
            price: item.price.to_string(),
        })
        .collect()
}

impl Page<'_> {
    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::Restaurant { .. } => "restaurant.html",
            Page::AdminLogin { .. } => "admin_login.html",
            Page::AdminDashboard { .. } => "admin_dashboard.html",
            Page::NotFound => "not_found.html",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Page::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }

    pub(super) fn fill_context(&self, context: &mut tera::Context) {
        match self {
            Page::Home | Page::NotFound => {}
            Page::Restaurant { id, menu } => {
                context.insert("restaurant", id);
                context.insert("menu", &menu_view(menu));
            }
            Page::AdminLogin { id, csrf_token } => {
                context.insert("restaurant", id);
                context.insert("csrf_token", csrf_token);
            }
            Page::AdminDashboard {
                id,
                menu,
                csrf_token,
            } => {
                context.insert("restaurant", id);
                context.insert("menu", &menu_view(menu));
                context.insert("csrf_token", csrf_token);
                context.insert("admin_id", ADMIN_ID);
                context.insert("status_label", STATUS_LABEL);
            }
        }
    }
}
