//! Unified error handling.
//!
//! Startup failures (`Config`, `Catalog`) end the session. Everything else
//! is reported back to the user and the session carries on.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog could not be fetched or parsed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Referenced shop or drink does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The action is not available on the current screen.
    #[error("Not available here: {0}")]
    WrongScreen(String),

    /// Malformed input.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
