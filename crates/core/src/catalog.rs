//! Catalog records produced by the shop/drink source.
//!
//! These are read-only inputs from the cart's point of view. Field names on
//! the wire follow the catalog API (`delivery_time`, `isAvailable`).

use serde::{Deserialize, Serialize};

use crate::types::{DrinkId, Price, ShopId};

/// A sellable drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: DrinkId,
    pub name: String,
    pub price: Price,
    /// Image URI, passed through to the screens untouched.
    pub image: String,
}

impl CatalogItem {
    /// Create a catalog item.
    #[must_use]
    pub fn new(id: DrinkId, name: impl Into<String>, price: Price, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

/// A shop listed on the "shops near me" screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub image: String,
    /// Free-form status label, e.g. "Open" or "Closed".
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub delivery_time: String,
    /// Only available shops can be opened to browse drinks.
    #[serde(rename = "isAvailable", default)]
    pub is_available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_catalog_item_from_api_json() {
        let json = r#"{"id": 3, "name": "Cold Brew", "price": 2.5, "image": "https://img/cb.png"}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, DrinkId::new(3));
        assert_eq!(item.price.amount(), Decimal::new(25, 1));
    }

    #[test]
    fn test_catalog_item_negative_price_rejected() {
        let json = r#"{"id": 3, "name": "Refund", "price": -1, "image": ""}"#;
        assert!(serde_json::from_str::<CatalogItem>(json).is_err());
    }

    #[test]
    fn test_shop_from_api_json() {
        let json = r#"{
            "id": 1,
            "name": "Bean There",
            "address": "12 Main St",
            "image": "https://img/shop.png",
            "status": "Open",
            "delivery_time": "15 min",
            "isAvailable": true
        }"#;
        let shop: Shop = serde_json::from_str(json).unwrap();
        assert!(shop.is_available);
        assert_eq!(shop.delivery_time, "15 min");
    }

    #[test]
    fn test_shop_missing_availability_defaults_to_closed() {
        let shop: Shop = serde_json::from_str(r#"{"id": 2, "name": "Shut"}"#).unwrap();
        assert!(!shop.is_available);
    }
}
