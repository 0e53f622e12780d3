//! Cart state for the active session.
//!
//! [`CartStore`] is the only mutation surface for line items. The
//! confirmation step that guards removal lives in [`RemovalConfirmation`],
//! which belongs to whichever screen asks for the decrease, not to the store.

mod events;
mod line_item;
mod removal;
mod store;

pub use events::{CartEvent, SubscriptionId};
pub use line_item::CartLineItem;
pub use removal::{DecreaseRequest, PendingRemoval, RemovalConfirmation};
pub use store::CartStore;
