#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests against the full router and middleware stack.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;

use common::{TestApp, response_text};
use menuboard_kernel::catalog::Catalog;

// =============================================================================
// Browsing
// =============================================================================

#[tokio::test]
async fn test_home_lists_restaurants() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(visit.body.contains("Welcome to Multi-Restaurant Platform"));
    for id in ["pizza-hut", "burger-king", "dominos", "sushi-place"] {
        assert!(visit.body.contains(&format!(r#"href="/{id}""#)), "{id}");
    }
}

#[tokio::test]
async fn test_restaurant_shows_seed_menu() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/pizza-hut").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(visit.body.contains("<h2>pizza hut</h2>"));
    assert!(visit.body.contains("<h4>Pepperoni Pizza</h4>"));
    assert!(visit.body.contains("<h4>Veggie Pizza</h4>"));
    assert!(visit.body.contains("<span>$12</span>"));
    assert!(visit.body.contains("<span>$11</span>"));
}

#[tokio::test]
async fn test_trailing_slash_is_tolerated() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/burger-king/").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(visit.body.contains("<h4>Whopper</h4>"));
}

#[tokio::test]
async fn test_unknown_restaurant_renders_empty_menu() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/taco%20town").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(visit.body.contains("<h2>taco town</h2>"));
    assert!(visit.body.contains("No menu items yet."));
}

#[tokio::test]
async fn test_unmatched_path_is_not_found() {
    let app = TestApp::new();
    let mut browser = app.browser();

    for path in ["/not-a-real-path/nested", "/pizza-hut/admin/extra"] {
        let visit = browser.get(path).await;
        assert_eq!(visit.status, StatusCode::NOT_FOUND, "{path}");
        assert!(visit.body.contains("404 - Page Not Found"), "{path}");
        assert!(
            visit
                .body
                .contains("The page you are looking for does not exist.")
        );
    }
}

#[tokio::test]
async fn test_get_on_form_path_is_not_found() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/dominos/admin/login").await;
    assert_eq!(visit.status, StatusCode::NOT_FOUND);
    assert!(visit.body.contains("404 - Page Not Found"));
}

#[tokio::test]
async fn test_post_to_page_is_rejected() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.post_form("/pizza-hut", &[]).await;
    assert_eq!(visit.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_catalog_drives_navigation() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[restaurant]]
        id = "noodle-bar"

        [[restaurant.menu]]
        name = "Ramen"
        price = 13.5
        "#,
    )
    .unwrap();
    let app = TestApp::with_catalog(catalog);
    let mut browser = app.browser();

    let home = browser.get("/").await;
    assert!(home.body.contains(r#"href="/noodle-bar">noodle bar</a>"#));
    assert!(home.body.contains(r#"href="/noodle-bar/admin">Admin</a>"#));
    assert!(!home.body.contains("pizza-hut"));

    let menu = browser.get("/noodle-bar").await;
    assert!(menu.body.contains("<span>$13.5</span>"));
}

// =============================================================================
// Admin gate
// =============================================================================

#[tokio::test]
async fn test_admin_starts_logged_out() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/dominos/admin").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(visit.body.contains("Admin Login"));
    assert!(
        visit
            .body
            .contains("Please login to access the admin dashboard")
    );
    assert!(!visit.body.contains("Admin Dashboard"));
}

#[tokio::test]
async fn test_admin_segment_is_case_insensitive() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/dominos/ADMIN").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(visit.body.contains("Admin Login"));
}

#[tokio::test]
async fn test_any_login_opens_dashboard() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let token = browser.get("/dominos/admin").await.csrf_token();
    let visit = browser
        .post_form(
            "/dominos/admin/login",
            &[("_token", &token), ("username", ""), ("password", "")],
        )
        .await;
    assert_eq!(visit.status, StatusCode::SEE_OTHER);
    assert_eq!(visit.location.as_deref(), Some("/dominos/admin"));

    let dashboard = browser.get("/dominos/admin").await;
    assert!(dashboard.body.contains("<h2>Admin Dashboard</h2>"));
    assert!(dashboard.body.contains("<span>dominos</span>"));
    assert!(dashboard.body.contains("<span>ADMIN001</span>"));
    assert!(dashboard.body.contains("<span>4</span>"));
    assert!(dashboard.body.contains("Current Menu Items (4)"));
    assert!(dashboard.body.contains(r#"href="/dominos">Back to Restaurant</a>"#));
}

#[tokio::test]
async fn test_logout_closes_gate() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("sushi-place").await;

    let token = browser.get("/sushi-place/admin").await.csrf_token();
    let visit = browser
        .post_form("/sushi-place/admin/logout", &[("_token", &token)])
        .await;
    assert_eq!(visit.status, StatusCode::SEE_OTHER);
    assert_eq!(visit.location.as_deref(), Some("/sushi-place/admin"));

    let page = browser.get("/sushi-place/admin").await;
    assert!(page.body.contains("Admin Login"));
}

#[tokio::test]
async fn test_navigating_away_resets_gate() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    browser.get("/dominos").await;

    let page = browser.get("/dominos/admin").await;
    assert!(page.body.contains("Admin Login"));
}

#[tokio::test]
async fn test_gate_does_not_follow_to_other_restaurant() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    let other = browser.get("/pizza-hut/admin").await;
    assert!(other.body.contains("Admin Login"));

    // Visiting another admin page also counts as leaving
    let back = browser.get("/dominos/admin").await;
    assert!(back.body.contains("Admin Login"));
}

#[tokio::test]
async fn test_layout_declares_inline_icon() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let visit = browser.get("/").await;
    assert!(visit.body.contains(r#"<link rel="icon" href="data:,">"#));
}

#[tokio::test]
async fn test_favicon_fetch_keeps_gate_open() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    let token = browser.get("/dominos/admin").await.csrf_token();

    let favicon = browser.get("/favicon.ico").await;
    assert_eq!(favicon.status, StatusCode::NOT_FOUND);
    assert!(favicon.body.is_empty());

    let visit = browser
        .post_form(
            "/dominos/admin/items",
            &[
                ("_token", &token),
                ("name", "Test Item"),
                ("description", ""),
                ("price", "15"),
            ],
        )
        .await;
    assert_eq!(visit.status, StatusCode::SEE_OTHER);

    let public = browser.get("/dominos").await;
    assert!(public.body.contains("<h4>Test Item</h4>"));
    assert_eq!(app.state.metrics().submissions_ignored.get(), 0);
}

#[tokio::test]
async fn test_background_fetch_keeps_gate_open() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    let token = browser.get("/dominos/admin").await.csrf_token();

    // Prefetch or script request for another page, not a navigation
    let fetched = browser
        .get_with_headers("/dominos", &[("sec-fetch-mode", "no-cors")])
        .await;
    assert_eq!(fetched.status, StatusCode::OK);

    browser
        .post_form(
            "/dominos/admin/items",
            &[("_token", &token), ("name", "Garlic Knots"), ("price", "4")],
        )
        .await;

    let dashboard = browser.get("/dominos/admin").await;
    assert!(dashboard.body.contains("Admin Dashboard"));
    assert!(dashboard.body.contains("<h4>Garlic Knots</h4>"));
}

#[tokio::test]
async fn test_browser_navigation_resets_gate() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    browser
        .get_with_headers("/", &[("sec-fetch-mode", "navigate")])
        .await;

    let page = browser.get("/dominos/admin").await;
    assert!(page.body.contains("Admin Login"));
}

#[tokio::test]
async fn test_invalid_token_is_ignored() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.get("/dominos/admin").await;

    let visit = browser
        .post_form("/dominos/admin/login", &[("_token", "forged")])
        .await;
    assert_eq!(visit.status, StatusCode::SEE_OTHER);

    let page = browser.get("/dominos/admin").await;
    assert!(page.body.contains("Admin Login"));
    assert_eq!(app.state.metrics().submissions_ignored.get(), 1);
    assert_eq!(app.state.metrics().admin_logins.get(), 0);
}

#[tokio::test]
async fn test_token_is_single_use() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let token = browser.get("/dominos/admin").await.csrf_token();
    browser
        .post_form("/dominos/admin/login", &[("_token", &token)])
        .await;
    browser
        .post_form("/dominos/admin/logout", &[("_token", &token)])
        .await;

    // The replayed logout was dropped, so the gate is still open
    let page = browser.get("/dominos/admin").await;
    assert!(page.body.contains("Admin Dashboard"));
}

// =============================================================================
// Menu editing
// =============================================================================

#[tokio::test]
async fn test_added_item_appends_to_menu() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    browser.add_item("dominos", "Test Item", "", "15").await;

    let dashboard = browser.get("/dominos/admin").await;
    assert!(dashboard.body.contains("Current Menu Items (5)"));
    let last_seed = dashboard.body.find("Chocolate Lava Cake").unwrap();
    let added = dashboard.body.find("<h4>Test Item</h4>").unwrap();
    assert!(added > last_seed);
    let after_name = &dashboard.body[added + "<h4>Test Item</h4>".len()..];
    assert!(
        after_name.trim_start().starts_with("<p></p>"),
        "empty description should render as an empty paragraph"
    );
    assert!(dashboard.body.contains("<span>$15</span>"));

    let public = browser.get("/dominos").await;
    assert!(public.body.contains("<h4>Test Item</h4>"));
    assert_eq!(app.state.metrics().menu_items_added.get(), 1);
}

#[tokio::test]
async fn test_fractional_price_renders_plainly() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("burger-king").await;

    browser
        .add_item("burger-king", "Shake", "Vanilla", "4.50")
        .await;

    let public = browser.get("/burger-king").await;
    assert!(public.body.contains("<p>Vanilla</p>"));
    assert!(public.body.contains("<span>$4.5</span>"));
}

#[tokio::test]
async fn test_missing_name_or_price_is_ignored() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("dominos").await;

    browser.add_item("dominos", "", "No name", "5").await;
    browser.add_item("dominos", "No price", "", "").await;
    browser.add_item("dominos", "Bad price", "", "abc").await;

    let dashboard = browser.get("/dominos/admin").await;
    assert!(dashboard.body.contains("Current Menu Items (4)"));
    assert!(!dashboard.body.contains("No price"));
    assert_eq!(app.state.metrics().submissions_ignored.get(), 3);
}

#[tokio::test]
async fn test_add_requires_open_gate() {
    let app = TestApp::new();
    let mut browser = app.browser();

    let token = browser.get("/dominos/admin").await.csrf_token();
    let visit = browser
        .post_form(
            "/dominos/admin/items",
            &[("_token", &token), ("name", "Sneaky"), ("price", "1")],
        )
        .await;
    assert_eq!(visit.status, StatusCode::SEE_OTHER);

    let public = browser.get("/dominos").await;
    assert!(!public.body.contains("Sneaky"));
}

#[tokio::test]
async fn test_edits_are_private_to_session() {
    let app = TestApp::new();
    let mut editor = app.browser();
    editor.login("pizza-hut").await;
    editor.add_item("pizza-hut", "Hawaiian", "", "13").await;

    let mut visitor = app.browser();
    let page = visitor.get("/pizza-hut").await;
    assert!(!page.body.contains("Hawaiian"));

    let own = editor.get("/pizza-hut").await;
    assert!(own.body.contains("Hawaiian"));
}

#[tokio::test]
async fn test_unknown_restaurant_menu_created_on_first_add() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.login("food-truck").await;

    browser.add_item("food-truck", "Taco", "Carnitas", "3").await;

    let page = browser.get("/food-truck").await;
    assert!(page.body.contains("<h2>food truck</h2>"));
    assert!(page.body.contains("<h4>Taco</h4>"));
    assert!(!page.body.contains("No menu items yet."));

    // Not listed in navigation
    assert!(!page.body.contains(r#"href="/food-truck">"#));
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app
        .request(Request::get("/health").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&response_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["restaurants"], 4);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new();
    let mut browser = app.browser();
    browser.get("/sushi-place").await;

    let visit = browser.get("/metrics").await;
    assert_eq!(visit.status, StatusCode::OK);
    assert!(
        visit
            .content_type
            .as_deref()
            .unwrap()
            .starts_with("text/plain")
    );
    assert!(visit.body.contains("http_requests_total"));
    assert!(visit.body.contains(r#"route="restaurant""#));
}
