//! Domain models.

pub mod menu_item;
pub mod restaurant;

pub use menu_item::{InvalidPrice, MenuItem, NewMenuItem, Price};
pub use restaurant::RestaurantId;
