//! Menu item model.
//!
//! Menu items carry no identity of their own. Two items with the same name
//! are distinct entries, told apart only by their position in the owning
//! restaurant's menu.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single dish on a restaurant menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Dish name as entered.
    pub name: String,

    /// Free-form description (may be empty).
    #[serde(default)]
    pub description: String,

    /// Listed price.
    pub price: Price,
}

impl MenuItem {
    /// Create a menu item.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// Error for a price that is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("price must be a finite number, got {0}")]
pub struct InvalidPrice(pub f64);

/// A finite, non-NaN price.
///
/// Formats the way a JavaScript number prints: `15`, `12.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// A whole-dollar price.
    pub const fn dollars(amount: u32) -> Self {
        Self(amount as f64)
    }

    /// Wrap an amount, rejecting NaN and infinities.
    pub fn new(amount: f64) -> Result<Self, InvalidPrice> {
        if !amount.is_finite() {
            return Err(InvalidPrice(amount));
        }
        // Collapse -0 so it prints as "0"
        Ok(Self(if amount == 0.0 { 0.0 } else { amount }))
    }

    /// Parse user input. Surrounding whitespace is ignored; anything that
    /// is empty or not a finite number yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(|v| Self::new(v).ok())
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidPrice;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw add-item form input, before validation.
///
/// Fields arrive as submitted strings; `price` in particular is whatever the
/// browser's number input produced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMenuItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

impl NewMenuItem {
    /// Turn the submission into a [`MenuItem`].
    ///
    /// Returns `None` when the name is empty or the price is empty or not a
    /// number. The description is optional. The name is kept verbatim.
    pub fn validate(self) -> Option<MenuItem> {
        if self.name.is_empty() {
            return None;
        }
        let price = Price::parse(&self.price)?;
        Some(MenuItem {
            name: self.name,
            description: self.description,
            price,
        })
    }
}
