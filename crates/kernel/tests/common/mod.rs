#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Tests drive the REAL kernel router through `oneshot`, with the same
//! middleware stack the binary serves. Each [`Browser`] carries its own
//! session cookie, so two browsers never see each other's menu edits.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use menuboard_kernel::catalog::Catalog;
use menuboard_kernel::theme::ThemeEngine;
use menuboard_kernel::{AppState, Config, routes, session};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a test application over the built-in catalog and templates.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// Create a test application over a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let config = Config::default();
        let theme = ThemeEngine::builtin().expect("built-in templates should load");
        let state = AppState::from_parts(catalog, theme);
        let router = routes::build_app(state.clone(), session::create_session_layer(&config));

        Self { router, state }
    }

    /// Start a fresh browser with no session cookie.
    pub fn browser(&self) -> Browser<'_> {
        Browser {
            app: self,
            cookies: String::new(),
        }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }
}

/// A response reduced to what the tests look at.
pub struct Visit {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Visit {
    /// The first CSRF token in the page.
    pub fn csrf_token(&self) -> String {
        extract_csrf_token(&self.body).expect("page should carry a CSRF token")
    }
}

/// One client session against the app.
pub struct Browser<'a> {
    app: &'a TestApp,
    cookies: String,
}

impl Browser<'_> {
    /// GET a path.
    pub async fn get(&mut self, path: &str) -> Visit {
        self.get_with_headers(path, &[]).await
    }

    /// GET a path with extra request headers.
    pub async fn get_with_headers(&mut self, path: &str, headers: &[(&str, &str)]) -> Visit {
        let mut builder = Request::get(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// POST a url-encoded form.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> Visit {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// Open the admin gate for a restaurant via its login form.
    pub async fn login(&mut self, restaurant: &str) {
        let admin = format!("/{restaurant}/admin");
        let token = self.get(&admin).await.csrf_token();
        let visit = self
            .post_form(
                &format!("{admin}/login"),
                &[("_token", &token), ("username", "chef"), ("password", "pw")],
            )
            .await;
        assert_eq!(visit.status, StatusCode::SEE_OTHER);
    }

    /// Submit the add-item form from a fresh dashboard render.
    pub async fn add_item(&mut self, restaurant: &str, name: &str, description: &str, price: &str) {
        let admin = format!("/{restaurant}/admin");
        let token = self.get(&admin).await.csrf_token();
        let visit = self
            .post_form(
                &format!("{admin}/items"),
                &[
                    ("_token", &token),
                    ("name", name),
                    ("description", description),
                    ("price", price),
                ],
            )
            .await;
        assert_eq!(visit.status, StatusCode::SEE_OTHER);
    }

    async fn send(&mut self, mut request: Request<Body>) -> Visit {
        if !self.cookies.is_empty() {
            request.headers_mut().insert(
                header::COOKIE,
                self.cookies.parse().expect("Invalid cookie header"),
            );
        }

        let response = self.app.request(request).await;

        let new_cookies = extract_cookies(&response);
        if !new_cookies.is_empty() {
            self.cookies = new_cookies;
        }

        let header_str = |name: header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let status = response.status();
        let location = header_str(header::LOCATION);
        let content_type = header_str(header::CONTENT_TYPE);
        let body = response_text(response).await;

        Visit {
            status,
            location,
            content_type,
            body,
        }
    }
}

/// Collect the name=value pairs from every Set-Cookie header.
pub fn extract_cookies(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|cookie| {
            // Extract just the cookie name=value, ignoring attributes
            cookie.split(';').next()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub async fn response_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

pub fn extract_csrf_token(html: &str) -> Option<String> {
    let pattern = r#"name="_token" value=""#;
    let start = html.find(pattern)? + pattern.len();
    let end = html[start..].find('"')?;
    Some(html[start..start + end].to_string())
}
