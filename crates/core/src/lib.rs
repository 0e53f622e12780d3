//! Cafe World Core - Cart model and shared catalog types.
//!
//! This crate holds everything the storefront screens agree on:
//! - [`types`] - Newtype wrappers for IDs and prices
//! - [`catalog`] - Shop and drink records as served by the catalog API
//! - [`cart`] - The cart store, its change notifications, and the
//!   confirmation flow that gates removing a line item
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory state - no I/O, no HTTP
//! clients, no async. Screens own a [`CartStore`] and mutate it through its
//! methods; nothing else can reach the line items.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{
    CartEvent, CartLineItem, CartStore, DecreaseRequest, PendingRemoval, RemovalConfirmation,
    SubscriptionId,
};
pub use catalog::{CatalogItem, Shop};
pub use types::*;
