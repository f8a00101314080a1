//! Menuboard Kernel Library
//!
//! Restaurant catalog, per-session menu editing, and the HTTP surface.
//! The main entry point for running the server is the `menuboard` binary.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod menu;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod route;
pub mod routes;
pub mod session;
pub mod state;
pub mod theme;

pub use config::Config;
pub use state::AppState;
