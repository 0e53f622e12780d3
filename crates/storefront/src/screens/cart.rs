//! Cart screen.
//!
//! Lists line items with their prices, the order total, and "pay now".

use cafe_world_core::{CartLineItem, CartStore, DecreaseRequest, DrinkId, format_money};

use super::request_decrease;
use crate::checkout::{CheckoutError, CheckoutHook, CheckoutOutcome, OrderSummary};
use crate::error::{AppError, Result};
use crate::state::{AppState, Screen};

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: DrinkId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    /// Distinct drinks in the cart.
    pub item_count: usize,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id(),
            name: line.name().to_owned(),
            image: line.image().to_owned(),
            quantity: line.quantity(),
            price: line.price().to_string(),
            line_price: format_money(line.line_total()),
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total: format_money(cart.total()),
            item_count: cart.len(),
        }
    }
}

/// Build the cart view.
#[must_use]
pub fn view(state: &AppState) -> CartView {
    CartView::from(state.cart())
}

/// Tap plus on a cart line. Returns the new quantity.
///
/// # Errors
///
/// Returns `AppError::WrongScreen` outside the cart and
/// `AppError::NotFound` for a drink that is not in the cart.
pub fn press_plus(state: &mut AppState, id: DrinkId) -> Result<u32> {
    ensure_on_cart(state)?;
    ensure_in_cart(state, id)?;
    let (cart, _) = state.cart_and_removal();
    cart.increase_quantity(id);
    Ok(cart.get_quantity(id))
}

/// Tap minus on a cart line; at quantity 1 this raises the removal prompt.
///
/// # Errors
///
/// Returns `AppError::WrongScreen` outside the cart and
/// `AppError::NotFound` for a drink that is not in the cart.
pub fn press_minus(state: &mut AppState, id: DrinkId) -> Result<DecreaseRequest> {
    ensure_on_cart(state)?;
    ensure_in_cart(state, id)?;
    Ok(request_decrease(state, id))
}

/// Tap "pay now".
///
/// The cart is cleared only when `hook` reports the order as completed.
///
/// # Errors
///
/// Returns `AppError::Checkout` for an empty cart or a failed payment.
pub fn pay_now<H: CheckoutHook>(state: &mut AppState, hook: &H) -> Result<CheckoutOutcome> {
    ensure_on_cart(state)?;
    if state.cart().is_empty() {
        return Err(CheckoutError::EmptyCart.into());
    }

    let order = OrderSummary::from_cart(state.cart());
    let outcome = hook.checkout(&order)?;
    if outcome == CheckoutOutcome::Completed {
        let (cart, _) = state.cart_and_removal();
        cart.clear_cart();
        tracing::info!(total = %order.total, "Order completed, cart cleared");
    }
    Ok(outcome)
}

fn ensure_on_cart(state: &AppState) -> Result<()> {
    match state.screen() {
        Screen::Cart { .. } => Ok(()),
        _ => Err(AppError::WrongScreen("open the cart first".to_string())),
    }
}

fn ensure_in_cart(state: &AppState, id: DrinkId) -> Result<()> {
    if state.cart().get(id).is_some() {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("drink {id} in cart")))
    }
}
