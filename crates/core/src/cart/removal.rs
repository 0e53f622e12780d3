//! Confirmation flow for removing a line with the minus control.
//!
//! A minus tap means "decrease" above quantity 1 and "remove" at quantity 1.
//! The second case needs the user to confirm, so the screen that owns the
//! minus control keeps a [`RemovalConfirmation`] next to its view state and
//! routes every minus tap through it. The store itself never deletes on a
//! decrease.

use tracing::debug;

use super::store::CartStore;
use crate::types::DrinkId;

/// A removal waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub id: DrinkId,
    pub name: String,
}

impl PendingRemoval {
    /// Prompt shown to the user, naming the item.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Remove \"{}\" from your order?", self.name)
    }
}

/// What a minus tap did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecreaseRequest {
    /// The drink is not in the cart; the control should have been disabled.
    Ignored,
    /// Quantity went down by one.
    Decreased { quantity: u32 },
    /// Quantity is 1; nothing changed until the prompt is answered.
    ConfirmationRequired(PendingRemoval),
}

/// Caller-owned state machine: `Idle` or waiting on one [`PendingRemoval`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalConfirmation {
    pending: Option<PendingRemoval>,
}

impl RemovalConfirmation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a minus tap for `id`.
    ///
    /// A new request replaces any prompt that is still open.
    pub fn request_decrease(&mut self, cart: &mut CartStore, id: DrinkId) -> DecreaseRequest {
        let Some(line) = cart.get(id) else {
            return DecreaseRequest::Ignored;
        };

        if line.quantity() > 1 {
            cart.decrease_quantity(id);
            return DecreaseRequest::Decreased {
                quantity: cart.get_quantity(id),
            };
        }

        let pending = PendingRemoval {
            id,
            name: line.name().to_owned(),
        };
        debug!(%id, "asking before removing last unit");
        self.pending = Some(pending.clone());
        DecreaseRequest::ConfirmationRequired(pending)
    }

    /// The open prompt, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingRemoval> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The user said yes: remove the pending line and go back to idle.
    ///
    /// Returns the removed drink, or `None` if no prompt was open.
    pub fn confirm(&mut self, cart: &mut CartStore) -> Option<DrinkId> {
        let pending = self.pending.take()?;
        cart.remove_item(pending.id);
        Some(pending.id)
    }

    /// The user said no or closed the prompt. The cart is not touched.
    ///
    /// Returns `false` if no prompt was open.
    pub fn dismiss(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
