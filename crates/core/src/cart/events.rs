//! Change notifications for cart subscribers.

use crate::types::DrinkId;

/// A state change applied by [`CartStore`](super::CartStore).
///
/// Only emitted when something actually changed; no-op calls stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended at quantity 1.
    LineAdded { id: DrinkId },
    /// An existing line moved to `quantity`.
    QuantityChanged { id: DrinkId, quantity: u32 },
    /// A line was deleted.
    LineRemoved { id: DrinkId },
    /// Every line was dropped at once.
    Cleared,
}

/// Handle returned by [`CartStore::subscribe`](super::CartStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub(crate) type Listener = Box<dyn FnMut(&CartEvent)>;
