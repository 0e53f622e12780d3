//! The cart store.

use core::fmt;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::events::{CartEvent, Listener, SubscriptionId};
use super::line_item::CartLineItem;
use crate::catalog::CatalogItem;
use crate::types::DrinkId;

/// Owns the cart line items for one session.
///
/// Every operation is total: unknown IDs are ignored, and a decrease at
/// quantity 1 does nothing. The only ways to drop a line are
/// [`remove_item`](Self::remove_item) and [`clear_cart`](Self::clear_cart).
///
/// ```
/// use cafe_world_core::{CartStore, CatalogItem, DrinkId, Price};
///
/// let latte = CatalogItem::new(DrinkId::new(1), "Latte", Price::from_cents(300), "");
/// let mut cart = CartStore::new();
/// cart.add_to_cart(&latte);
/// cart.add_to_cart(&latte);
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.get_quantity(latte.id), 2);
/// ```
#[derive(Default)]
pub struct CartStore {
    lines: Vec<CartLineItem>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`.
    ///
    /// An existing line keeps the name, price, and image it was created
    /// with; a new line is appended at quantity 1.
    pub fn add_to_cart(&mut self, item: &CatalogItem) {
        if let Some(line) = self.line_mut(item.id) {
            if line.increment() {
                let event = CartEvent::QuantityChanged {
                    id: item.id,
                    quantity: line.quantity(),
                };
                debug!(id = %item.id, quantity = line.quantity(), "added to existing cart line");
                self.notify(&event);
            }
            return;
        }

        self.lines.push(CartLineItem::from_catalog(item));
        debug!(id = %item.id, name = %item.name, "new cart line");
        self.notify(&CartEvent::LineAdded { id: item.id });
    }

    /// Add one unit to an existing line.
    pub fn increase_quantity(&mut self, id: DrinkId) {
        let Some(line) = self.line_mut(id) else {
            warn!(%id, "increase requested for a drink that is not in the cart");
            return;
        };
        if line.increment() {
            let quantity = line.quantity();
            debug!(%id, quantity, "increased quantity");
            self.notify(&CartEvent::QuantityChanged { id, quantity });
        }
    }

    /// Take one unit off a line whose quantity is above 1.
    ///
    /// At quantity 1 this is a no-op; removing the line needs an explicit
    /// [`remove_item`](Self::remove_item), normally after the user confirmed.
    pub fn decrease_quantity(&mut self, id: DrinkId) {
        let Some(line) = self.line_mut(id) else {
            warn!(%id, "decrease requested for a drink that is not in the cart");
            return;
        };
        if line.decrement() {
            let quantity = line.quantity();
            debug!(%id, quantity, "decreased quantity");
            self.notify(&CartEvent::QuantityChanged { id, quantity });
        } else {
            debug!(%id, "decrease at quantity 1 ignored");
        }
    }

    /// Delete the line for `id`, whatever its quantity.
    pub fn remove_item(&mut self, id: DrinkId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        if self.lines.len() == before {
            warn!(%id, "remove requested for a drink that is not in the cart");
            return;
        }
        debug!(%id, "removed cart line");
        self.notify(&CartEvent::LineRemoved { id });
    }

    /// Drop every line.
    pub fn clear_cart(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        debug!("cart cleared");
        self.notify(&CartEvent::Cleared);
    }

    /// Quantity for `id`, or 0 when it is not in the cart.
    #[must_use]
    pub fn get_quantity(&self, id: DrinkId) -> u32 {
        self.get(id).map_or(0, CartLineItem::quantity)
    }

    /// Sum of `price × quantity` over all lines, unrounded.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLineItem::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or(Decimal::MAX)
    }

    /// Line items in the order their drinks were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: DrinkId) -> Option<&CartLineItem> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Register a listener that is called after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Stop notifying a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn line_mut(&mut self, id: DrinkId) -> Option<&mut CartLineItem> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    fn notify(&mut self, event: &CartEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
