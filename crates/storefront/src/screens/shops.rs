//! Shops near me.

use cafe_world_core::{Shop, ShopId};

use crate::error::{AppError, Result};
use crate::state::{AppState, Screen};

/// Notice shown when a closed shop is tapped.
pub const CLOSED_NOTICE: &str = "This shop is currently closed.";

/// Shop card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopCardView {
    pub id: ShopId,
    pub name: String,
    pub address: String,
    pub image: String,
    pub status: String,
    pub delivery_time: String,
    pub is_available: bool,
}

impl From<&Shop> for ShopCardView {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name.clone(),
            address: shop.address.clone(),
            image: shop.image.clone(),
            status: shop.status.clone(),
            delivery_time: shop.delivery_time.clone(),
            is_available: shop.is_available,
        }
    }
}

/// What tapping a shop card did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopSelection {
    /// The drink list for this shop is now in front.
    Opened(ShopId),
    /// The shop is closed; a notice was raised and nothing else changed.
    Closed,
}

/// Every shop, in catalog order.
#[must_use]
pub fn view(state: &AppState) -> Vec<ShopCardView> {
    state.catalog().shops.iter().map(ShopCardView::from).collect()
}

/// Tap a shop card.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown shop.
pub fn select(state: &mut AppState, id: ShopId) -> Result<ShopSelection> {
    let shop = state
        .catalog()
        .shop(id)
        .ok_or_else(|| AppError::NotFound(format!("shop {id}")))?;

    if shop.is_available {
        state.navigate(Screen::Drinks { shop: id });
        Ok(ShopSelection::Opened(id))
    } else {
        state.set_notice(CLOSED_NOTICE);
        Ok(ShopSelection::Closed)
    }
}
