//! A single cart line.

use core::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::types::{DrinkId, Price};

/// One entry in the cart: a catalog item plus the requested quantity.
///
/// Fields are only readable from outside the crate; quantities change
/// through [`CartStore`](super::CartStore). The quantity is non-zero by
/// construction, so a line that would drop to zero has to be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineItem {
    id: DrinkId,
    name: String,
    price: Price,
    image: String,
    quantity: NonZeroU32,
}

impl CartLineItem {
    /// Start a new line at quantity 1.
    pub(crate) fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    #[must_use]
    pub const fn id(&self) -> DrinkId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price captured when the line was created.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Current quantity, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `price × quantity`, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity())
    }

    /// Add one unit. Saturates at `u32::MAX`; returns whether it changed.
    pub(crate) fn increment(&mut self) -> bool {
        match self.quantity.checked_add(1) {
            Some(next) => {
                self.quantity = next;
                true
            }
            None => false,
        }
    }

    /// Take one unit away, unless that would leave the line empty.
    pub(crate) fn decrement(&mut self) -> bool {
        match NonZeroU32::new(self.quantity.get() - 1) {
            Some(next) => {
                self.quantity = next;
                true
            }
            None => false,
        }
    }
}
