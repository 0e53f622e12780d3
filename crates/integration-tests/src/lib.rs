//! Integration tests for Cafe World.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cafe-world-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart invariants over generated operation sequences
//! - `catalog_sources` - HTTP (in-process server) and file catalogs
//! - `storefront_session` - Shop → drinks → cart flows through the screens
//!
//! This library only holds shared fixtures.

use cafe_world_core::{CatalogItem, DrinkId, Price, Shop, ShopId};
use serde_json::{Value, json};

/// Drinks served by every fixture catalog.
#[must_use]
pub fn fixture_drinks() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(DrinkId::new(1), "Americano", Price::from_cents(300), "https://img/americano.png"),
        CatalogItem::new(DrinkId::new(2), "Iced Tea", Price::from_cents(150), "https://img/tea.png"),
        CatalogItem::new(DrinkId::new(3), "Espresso", Price::from_cents(250), "https://img/espresso.png"),
    ]
}

/// Shops served by every fixture catalog; shop 2 is closed.
#[must_use]
pub fn fixture_shops() -> Vec<Shop> {
    vec![
        Shop {
            id: ShopId::new(1),
            name: "Bean There".to_string(),
            address: "12 Main St".to_string(),
            image: "https://img/bean.png".to_string(),
            status: "Open".to_string(),
            delivery_time: "15 min".to_string(),
            is_available: true,
        },
        Shop {
            id: ShopId::new(2),
            name: "Night Owl".to_string(),
            address: "3 Dock Rd".to_string(),
            image: "https://img/owl.png".to_string(),
            status: "Closed".to_string(),
            delivery_time: "30 min".to_string(),
            is_available: false,
        },
    ]
}

/// The fixture shops in the API's JSON shape.
#[must_use]
pub fn shops_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Bean There",
            "address": "12 Main St",
            "image": "https://img/bean.png",
            "status": "Open",
            "delivery_time": "15 min",
            "isAvailable": true
        },
        {
            "id": 2,
            "name": "Night Owl",
            "address": "3 Dock Rd",
            "image": "https://img/owl.png",
            "status": "Closed",
            "delivery_time": "30 min",
            "isAvailable": false
        }
    ])
}

/// The fixture drinks in the API's JSON shape, prices as plain numbers.
#[must_use]
pub fn drinks_json() -> Value {
    json!([
        {"id": 1, "name": "Americano", "price": 3, "image": "https://img/americano.png"},
        {"id": 2, "name": "Iced Tea", "price": 1.5, "image": "https://img/tea.png"},
        {"id": 3, "name": "Espresso", "price": 2.5, "image": "https://img/espresso.png"}
    ])
}
