//! Path resolution for page views.
//!
//! Every GET request that is not a kernel endpoint (`/health`, `/metrics`,
//! `/favicon.ico`) is resolved here to one of four views. The restaurant id is whatever
//! single segment the path carries; it is deliberately not checked against
//! the catalog, so unknown restaurants render with an empty menu.

use std::fmt;

use crate::models::RestaurantId;

/// View a path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/{restaurant_id}`
    Restaurant(RestaurantId),
    /// `/{restaurant_id}/admin`
    Admin(RestaurantId),
    /// Anything else.
    NotFound,
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Home,
    Restaurant,
    Admin,
}

/// Patterns in match order. `:id` captures one non-empty segment.
const PATTERNS: &[(&str, Pattern)] = &[
    ("/", Pattern::Home),
    ("/:id", Pattern::Restaurant),
    ("/:id/admin", Pattern::Admin),
];

impl Route {
    /// Resolve a request path (without query string).
    ///
    /// A single trailing slash is ignored. Segments are percent-decoded;
    /// a segment that does not decode to UTF-8 matches nothing. Literal
    /// segments compare case-insensitively.
    pub fn resolve(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };

        for (pattern, kind) in PATTERNS {
            if let Some(capture) = match_pattern(pattern, trimmed) {
                return match (kind, capture) {
                    (Pattern::Home, _) => Route::Home,
                    (Pattern::Restaurant, Some(id)) => Route::Restaurant(id),
                    (Pattern::Admin, Some(id)) => Route::Admin(id),
                    _ => Route::NotFound,
                };
            }
        }

        Route::NotFound
    }

    /// Canonical path of this route; `None` for `NotFound`.
    pub fn path(&self) -> Option<String> {
        match self {
            Route::Home => Some("/".to_string()),
            Route::Restaurant(id) => Some(id.view_path()),
            Route::Admin(id) => Some(id.admin_path()),
            Route::NotFound => None,
        }
    }

    /// Bounded label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Restaurant(_) => "restaurant",
            Route::Admin(_) => "admin",
            Route::NotFound => "not_found",
        }
    }

}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => f.write_str(&path),
            None => f.write_str("<not found>"),
        }
    }
}

/// Match `path` against `pattern`.
///
/// Returns `None` on mismatch, `Some(None)` for a match without capture and
/// `Some(Some(id))` when the `:id` segment matched.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<RestaurantId>> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut capture = None;

    for (pat, actual) in pattern_parts.iter().zip(path_parts.iter()) {
        if pat.starts_with(':') {
            if actual.is_empty() {
                return None;
            }
            let decoded = urlencoding::decode(actual).ok()?;
            capture = Some(RestaurantId::new(decoded.into_owned()));
        } else if !pat.eq_ignore_ascii_case(actual) {
            return None;
        }
    }

    Some(capture)
}
