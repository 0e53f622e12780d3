//! Session state shared by every screen.

use std::cell::Cell;
use std::rc::Rc;

use cafe_world_core::{CartEvent, CartStore, RemovalConfirmation, ShopId};

use crate::catalog::{Catalog, CatalogSource};
use crate::error::Result;

/// Which screen is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ShopsNearMe,
    Drinks { shop: ShopId },
    /// `from` is the shop whose drink list the user came from, if any.
    Cart { from: Option<ShopId> },
}

/// The single owned state of one storefront session.
///
/// Screens borrow it mutably for each interaction; there is exactly one
/// cart and one pending removal prompt per session.
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    cart: CartStore,
    removal: RemovalConfirmation,
    screen: Screen,
    notice: Option<String>,
    cart_revision: Rc<Cell<u64>>,
}

impl AppState {
    /// Start a session over an already-loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let cart_revision = Rc::new(Cell::new(0));
        let mut cart = CartStore::new();

        let revision = Rc::clone(&cart_revision);
        cart.subscribe(move |event: &CartEvent| {
            revision.set(revision.get() + 1);
            tracing::trace!(?event, revision = revision.get(), "cart changed");
        });

        Self {
            catalog,
            cart,
            removal: RemovalConfirmation::new(),
            screen: Screen::ShopsNearMe,
            notice: None,
            cart_revision,
        }
    }

    /// Fetch the catalog from `source` and start a session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the catalog cannot be loaded.
    pub async fn load<S: CatalogSource + Sync>(source: &S) -> Result<Self> {
        let catalog = Catalog::load(source).await?;
        Ok(Self::new(catalog))
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Cart plus the confirmation flow, borrowed together so a minus tap can
    /// consult one and mutate the other.
    pub fn cart_and_removal(&mut self) -> (&mut CartStore, &mut RemovalConfirmation) {
        (&mut self.cart, &mut self.removal)
    }

    #[must_use]
    pub const fn removal(&self) -> &RemovalConfirmation {
        &self.removal
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    pub(crate) fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;
    }

    /// Counts cart changes; screens compare it to decide whether to redraw.
    #[must_use]
    pub fn cart_revision(&self) -> u64 {
        self.cart_revision.get()
    }

    /// A one-off message for the user, e.g. "this shop is closed".
    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Take the pending notice, leaving none behind.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

#[cfg(test)]
mod tests {
    use cafe_world_core::{CatalogItem, DrinkId, Price};

    use super::*;

    #[test]
    fn test_new_session_starts_on_shops() {
        let state = AppState::new(Catalog::default());
        assert_eq!(state.screen(), Screen::ShopsNearMe);
        assert!(state.cart().is_empty());
        assert!(!state.removal().is_pending());
    }

    #[test]
    fn test_revision_tracks_cart_changes() {
        let latte = CatalogItem::new(DrinkId::new(1), "Latte", Price::from_cents(300), "");
        let mut state = AppState::new(Catalog::default());
        assert_eq!(state.cart_revision(), 0);

        let (cart, _) = state.cart_and_removal();
        cart.add_to_cart(&latte);
        cart.decrease_quantity(latte.id); // no-op at 1
        assert_eq!(state.cart_revision(), 1);
    }

    #[test]
    fn test_notice_is_taken_once() {
        let mut state = AppState::new(Catalog::default());
        state.set_notice("closed");
        assert_eq!(state.take_notice().as_deref(), Some("closed"));
        assert_eq!(state.take_notice(), None);
    }
}
