//! Checkout hook.
//!
//! Payment is not implemented. The cart screen hands an [`OrderSummary`] to
//! a [`CheckoutHook`]; the cart is cleared only when the hook reports the
//! order as completed.

use cafe_world_core::{CartStore, DrinkId};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Errors a checkout attempt can produce.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to pay for.
    #[error("cart is empty")]
    EmptyCart,

    /// The payment provider turned the order down.
    #[error("payment declined: {0}")]
    Declined(String),
}

/// One priced line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub id: DrinkId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// Snapshot of the cart at the moment "pay now" was pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}

impl OrderSummary {
    #[must_use]
    pub fn from_cart(cart: &CartStore) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| OrderLine {
                    id: line.id(),
                    name: line.name().to_owned(),
                    quantity: line.quantity(),
                    unit_price: line.price().amount(),
                    line_total: line.line_total(),
                })
                .collect(),
            total: cart.total(),
        }
    }
}

/// Result of handing an order to the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Paid; the cart should be cleared.
    Completed,
    /// No payment integration is configured; the cart stays as it is.
    Unavailable,
}

/// Where a finished cart goes.
pub trait CheckoutHook {
    /// Attempt to pay for `order`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` if the order cannot be paid.
    fn checkout(&self, order: &OrderSummary) -> Result<CheckoutOutcome, CheckoutError>;
}

/// Accepts nothing and changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCheckout;

impl CheckoutHook for NoopCheckout {
    fn checkout(&self, order: &OrderSummary) -> Result<CheckoutOutcome, CheckoutError> {
        let order_json = serde_json::to_string(order).unwrap_or_default();
        tracing::info!(
            lines = order.lines.len(),
            total = %order.total,
            order = %order_json,
            "Checkout requested but payment is not configured"
        );
        Ok(CheckoutOutcome::Unavailable)
    }
}
