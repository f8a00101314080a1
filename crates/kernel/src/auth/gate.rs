//! Admin gate state machine.

use serde::{Deserialize, Serialize};

use crate::models::RestaurantId;

/// Two-state login flag guarding the admin edit form.
///
/// Transitions are pure: they take the current state and return the next.
/// `login` never fails and checks no credentials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminGate {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl AdminGate {
    #[must_use]
    pub fn login(self) -> Self {
        Self::LoggedIn
    }

    #[must_use]
    pub fn logout(self) -> Self {
        Self::LoggedOut
    }

    pub fn is_logged_in(self) -> bool {
        self == Self::LoggedIn
    }
}

/// An admin gate bound to the admin page of one restaurant.
///
/// A session holds at most one of these. Looking at any other page (or at
/// another restaurant's admin page) finds no matching binding and therefore
/// sees `LoggedOut`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminBinding {
    pub restaurant: RestaurantId,
    pub gate: AdminGate,
}

impl AdminBinding {
    pub fn new(restaurant: RestaurantId, gate: AdminGate) -> Self {
        Self { restaurant, gate }
    }

    /// Gate state as seen from `restaurant`'s admin page.
    pub fn gate_for(binding: Option<&Self>, restaurant: &RestaurantId) -> AdminGate {
        match binding {
            Some(b) if &b.restaurant == restaurant => b.gate,
            _ => AdminGate::LoggedOut,
        }
    }
}
