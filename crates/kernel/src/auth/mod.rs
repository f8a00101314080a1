//! Mock admin authentication.
//!
//! There are no accounts and no credentials. The admin gate is a per-page
//! flag: any login attempt succeeds, logout always succeeds.

mod gate;

pub use gate::{AdminBinding, AdminGate};
