//! Theme engine and page rendering.
//!
//! Provides Tera-based rendering of the four page views inside a shared
//! layout, with optional on-disk template overrides.

mod engine;
mod page;

pub use engine::ThemeEngine;
pub use page::Page;
