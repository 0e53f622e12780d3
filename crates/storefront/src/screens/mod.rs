//! Screen controllers.
//!
//! Each screen turns [`AppState`] into a plain view struct and exposes the
//! taps the user can make. Rendering the views is left to the caller.
//!
//! # Screens
//!
//! - [`shops`] - shops near me; opening a closed shop shows a notice
//! - [`drinks`] - drink list with quantity badges and the cart button
//! - [`cart`] - line items, total, and "pay now"
//!
//! The removal prompt raised by a minus tap is shared by the drinks and cart
//! screens and answered through [`confirm_removal`] / [`cancel_removal`].

pub mod cart;
pub mod drinks;
pub mod shops;

use cafe_world_core::{DecreaseRequest, DrinkId};

use crate::error::{AppError, Result};
use crate::state::{AppState, Screen};

/// Route a minus tap through the confirmation flow.
fn request_decrease(state: &mut AppState, id: DrinkId) -> DecreaseRequest {
    let (cart, removal) = state.cart_and_removal();
    removal.request_decrease(cart, id)
}

/// The user confirmed the open removal prompt.
///
/// Returns the removed drink, or `None` when no prompt was open.
pub fn confirm_removal(state: &mut AppState) -> Option<DrinkId> {
    let (cart, removal) = state.cart_and_removal();
    let removed = removal.confirm(cart);
    if let Some(id) = removed {
        tracing::info!(%id, "removal confirmed");
    }
    removed
}

/// The user declined or closed the removal prompt.
pub fn cancel_removal(state: &mut AppState) -> bool {
    let (_, removal) = state.cart_and_removal();
    removal.dismiss()
}

/// Open the cart screen, remembering which drink list it was opened from.
pub fn go_to_cart(state: &mut AppState) {
    let from = match state.screen() {
        Screen::Drinks { shop } => Some(shop),
        Screen::Cart { from } => from,
        Screen::ShopsNearMe => None,
    };
    state.navigate(Screen::Cart { from });
}

/// Step back one screen.
///
/// # Errors
///
/// Returns `AppError::WrongScreen` on the first screen.
pub fn back(state: &mut AppState) -> Result<Screen> {
    let previous = match state.screen() {
        Screen::ShopsNearMe => {
            return Err(AppError::WrongScreen(
                "already at the shop list".to_string(),
            ));
        }
        Screen::Drinks { .. } | Screen::Cart { from: None } => Screen::ShopsNearMe,
        Screen::Cart { from: Some(shop) } => Screen::Drinks { shop },
    };
    state.navigate(previous);
    Ok(previous)
}
