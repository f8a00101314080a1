//! Built-in restaurant list and seed menus.

use crate::models::{MenuItem, Price, RestaurantId};

/// Seed entry: (id, [(name, description, price)]).
type SeedEntry = (&'static str, &'static [(&'static str, &'static str, u32)]);

const SEED: &[SeedEntry] = &[
    (
        "pizza-hut",
        &[
            ("Pepperoni Pizza", "Classic pepperoni", 12),
            ("Veggie Pizza", "Tomatoes, peppers, onions", 11),
        ],
    ),
    (
        "burger-king",
        &[
            ("Whopper", "Signature burger", 9),
            ("Fries", "Golden fries", 3),
        ],
    ),
    (
        "dominos",
        &[
            ("Pepperoni Pizza", "Hand-tossed pepperoni pizza", 14),
            ("Buffalo Wings", "Spicy buffalo chicken wings", 8),
            ("Garlic Bread", "Fresh baked garlic bread", 5),
            (
                "Chocolate Lava Cake",
                "Warm chocolate cake with molten center",
                6,
            ),
        ],
    ),
    (
        "sushi-place",
        &[
            ("Salmon Roll", "Fresh salmon", 10),
            ("Avocado Roll", "Veggie roll", 8),
        ],
    ),
];

/// Materialize the built-in seed in registry order.
pub(super) fn entries() -> Vec<(RestaurantId, Vec<MenuItem>)> {
    SEED.iter()
        .map(|(id, items)| {
            let menu = items
                .iter()
                .map(|(name, description, price)| {
                    MenuItem::new(*name, *description, Price::dollars(*price))
                })
                .collect();
            (RestaurantId::new(*id), menu)
        })
        .collect()
}
