//! Form handling.
//!
//! Every state-changing form carries a session-bound, single-use CSRF token.

pub mod csrf;

pub use csrf::{generate_csrf_token, verify_csrf_token};
