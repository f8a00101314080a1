//! Menu storage.
//!
//! Menus start from the catalog seed and grow by appending, one store per
//! browser session. Nothing here is shared between sessions.

mod store;

pub use store::{MenuStore, SessionMenus};
