//! Drink list for an open shop.

use cafe_world_core::{CatalogItem, DecreaseRequest, DrinkId, PendingRemoval};

use super::request_decrease;
use crate::error::{AppError, Result};
use crate::state::{AppState, Screen};

/// One row of the drink list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkRowView {
    pub id: DrinkId,
    pub name: String,
    pub price: String,
    pub image: String,
    /// Quantity badge; 0 when the drink is not in the cart.
    pub quantity: u32,
    /// The minus control is disabled while the drink is not in the cart.
    pub minus_enabled: bool,
}

/// Drink list display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinksView {
    pub rows: Vec<DrinkRowView>,
    /// Label of the button that opens the cart.
    pub cart_button: String,
    /// Open removal prompt, if any.
    pub prompt: Option<PendingRemoval>,
}

/// Build the drink list.
#[must_use]
pub fn view(state: &AppState) -> DrinksView {
    let cart = state.cart();
    let rows = state
        .catalog()
        .drinks
        .iter()
        .map(|drink| {
            let quantity = cart.get_quantity(drink.id);
            DrinkRowView {
                id: drink.id,
                name: drink.name.clone(),
                price: drink.price.to_string(),
                image: drink.image.clone(),
                quantity,
                minus_enabled: quantity > 0,
            }
        })
        .collect();

    DrinksView {
        rows,
        cart_button: cart_button_label(cart.len()),
        prompt: state.removal().pending().cloned(),
    }
}

/// "GO TO CART (n)", where n counts distinct drinks.
#[must_use]
pub fn cart_button_label(lines: usize) -> String {
    format!("GO TO CART ({lines})")
}

/// Tap plus on a drink row. Returns the new quantity.
///
/// # Errors
///
/// Returns `AppError::WrongScreen` outside the drink list and
/// `AppError::NotFound` for a drink that is not in the catalog.
pub fn press_plus(state: &mut AppState, id: DrinkId) -> Result<u32> {
    ensure_on_drinks(state)?;
    let item: CatalogItem = state
        .catalog()
        .drink(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("drink {id}")))?;

    let (cart, _) = state.cart_and_removal();
    cart.add_to_cart(&item);
    Ok(cart.get_quantity(id))
}

/// Tap minus on a drink row.
///
/// At quantity 1 this raises the removal prompt instead of changing the cart.
///
/// # Errors
///
/// Returns `AppError::WrongScreen` outside the drink list and
/// `AppError::NotFound` for a drink that is not in the catalog.
pub fn press_minus(state: &mut AppState, id: DrinkId) -> Result<DecreaseRequest> {
    ensure_on_drinks(state)?;
    if state.catalog().drink(id).is_none() {
        return Err(AppError::NotFound(format!("drink {id}")));
    }
    Ok(request_decrease(state, id))
}

fn ensure_on_drinks(state: &AppState) -> Result<()> {
    match state.screen() {
        Screen::Drinks { .. } => Ok(()),
        _ => Err(AppError::WrongScreen("open a shop first".to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cafe_world_core::{Price, ShopId};

    use super::*;
    use crate::catalog::Catalog;
    use crate::screens::{cancel_removal, confirm_removal};

    fn state() -> AppState {
        let mut state = AppState::new(Catalog {
            shops: Vec::new(),
            drinks: vec![
                CatalogItem::new(DrinkId::new(1), "Latte", Price::from_cents(300), "latte.png"),
                CatalogItem::new(DrinkId::new(2), "Tea", Price::from_cents(150), "tea.png"),
            ],
        });
        state.navigate(Screen::Drinks {
            shop: ShopId::new(1),
        });
        state
    }

    #[test]
    fn test_view_badges_and_minus_state() {
        let mut state = state();
        press_plus(&mut state, DrinkId::new(1)).unwrap();
        press_plus(&mut state, DrinkId::new(1)).unwrap();

        let view = view(&state);
        let latte = view.rows.first().unwrap();
        let tea = view.rows.get(1).unwrap();
        assert_eq!(latte.quantity, 2);
        assert!(latte.minus_enabled);
        assert_eq!(latte.price, "$3.00");
        assert_eq!(tea.quantity, 0);
        assert!(!tea.minus_enabled);
        assert_eq!(view.cart_button, "GO TO CART (1)");
        assert!(view.prompt.is_none());
    }

    #[test]
    fn test_minus_at_one_prompts_then_confirm_removes() {
        let mut state = state();
        press_plus(&mut state, DrinkId::new(2)).unwrap();

        let request = press_minus(&mut state, DrinkId::new(2)).unwrap();
        assert!(matches!(request, DecreaseRequest::ConfirmationRequired(_)));
        assert_eq!(view(&state).prompt.unwrap().name, "Tea");
        assert_eq!(state.cart().get_quantity(DrinkId::new(2)), 1);

        assert_eq!(confirm_removal(&mut state), Some(DrinkId::new(2)));
        assert!(state.cart().is_empty());
        assert!(view(&state).prompt.is_none());
    }

    #[test]
    fn test_minus_at_one_then_cancel_keeps_item() {
        let mut state = state();
        press_plus(&mut state, DrinkId::new(2)).unwrap();
        press_minus(&mut state, DrinkId::new(2)).unwrap();

        assert!(cancel_removal(&mut state));
        assert_eq!(state.cart().get_quantity(DrinkId::new(2)), 1);
    }

    #[test]
    fn test_minus_without_item_is_ignored() {
        let mut state = state();
        assert_eq!(
            press_minus(&mut state, DrinkId::new(1)).unwrap(),
            DecreaseRequest::Ignored
        );
    }

    #[test]
    fn test_unknown_drink() {
        let mut state = state();
        assert!(matches!(
            press_plus(&mut state, DrinkId::new(9)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_requires_drinks_screen() {
        let mut state = state();
        state.navigate(Screen::ShopsNearMe);
        assert!(matches!(
            press_plus(&mut state, DrinkId::new(1)),
            Err(AppError::WrongScreen(_))
        ));
    }
}
