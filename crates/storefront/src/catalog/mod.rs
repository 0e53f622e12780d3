//! Catalog retrieval: the shops and drinks the screens list.
//!
//! # Sources
//!
//! - [`HttpCatalog`] - `GET {base}/shops` and `GET {base}/drinks`
//! - [`FileCatalog`] - `shops.json` and `drinks.json` in a directory
//! - [`StaticCatalog`] - records already in memory (tests, demos)
//!
//! Every source is read once when a session starts. The cart never waits on
//! a source; it only sees the resolved [`CatalogItem`] values.
//!
//! Both list shapes are accepted: a JSON array of records, or an object
//! keyed by record ID (the realtime-database export format). Object values
//! are sorted by record ID so the listing order is stable.

mod file;
mod http;

use std::future::Future;

use cafe_world_core::{CatalogItem, DrinkId, Shop, ShopId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use file::FileCatalog;
pub use http::HttpCatalog;

use crate::config::{CatalogLocation, StorefrontConfig};

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// Reading a catalog file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A one-shot provider of catalog records.
pub trait CatalogSource {
    /// Fetch every shop.
    fn fetch_shops(&self) -> impl Future<Output = Result<Vec<Shop>, CatalogError>> + Send;

    /// Fetch every drink.
    fn fetch_drinks(&self) -> impl Future<Output = Result<Vec<CatalogItem>, CatalogError>> + Send;
}

/// Resolved catalog for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub shops: Vec<Shop>,
    pub drinks: Vec<CatalogItem>,
}

impl Catalog {
    /// Fetch shops and drinks from `source` concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first error either fetch produced.
    pub async fn load<S: CatalogSource + Sync>(source: &S) -> Result<Self, CatalogError> {
        let (shops, drinks) = tokio::try_join!(source.fetch_shops(), source.fetch_drinks())?;
        tracing::info!(shops = shops.len(), drinks = drinks.len(), "Catalog loaded");
        Ok(Self { shops, drinks })
    }

    #[must_use]
    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|shop| shop.id == id)
    }

    #[must_use]
    pub fn drink(&self, id: DrinkId) -> Option<&CatalogItem> {
        self.drinks.iter().find(|drink| drink.id == id)
    }
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    #[must_use]
    pub const fn new(shops: Vec<Shop>, drinks: Vec<CatalogItem>) -> Self {
        Self {
            catalog: Catalog { shops, drinks },
        }
    }
}

impl CatalogSource for StaticCatalog {
    async fn fetch_shops(&self) -> Result<Vec<Shop>, CatalogError> {
        Ok(self.catalog.shops.clone())
    }

    async fn fetch_drinks(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.catalog.drinks.clone())
    }
}

/// Whichever source the configuration selects.
#[derive(Debug, Clone)]
pub enum ConfiguredCatalog {
    Http(HttpCatalog),
    File(FileCatalog),
}

impl ConfiguredCatalog {
    /// Build the source named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        Ok(match &config.catalog {
            CatalogLocation::Api {
                base_url,
                token,
                timeout,
            } => Self::Http(HttpCatalog::new(base_url, token.clone(), *timeout)?),
            CatalogLocation::Directory(dir) => Self::File(FileCatalog::new(dir)),
        })
    }
}

impl CatalogSource for ConfiguredCatalog {
    async fn fetch_shops(&self) -> Result<Vec<Shop>, CatalogError> {
        match self {
            Self::Http(source) => source.fetch_shops().await,
            Self::File(source) => source.fetch_shops().await,
        }
    }

    async fn fetch_drinks(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        match self {
            Self::Http(source) => source.fetch_drinks().await,
            Self::File(source) => source.fetch_drinks().await,
        }
    }
}

/// Parse a record list served as an array, or as an object keyed by ID.
pub(crate) fn parse_records<T, K>(
    what: &str,
    body: &str,
    sort_key: impl Fn(&T) -> K,
) -> Result<Vec<T>, CatalogError>
where
    T: DeserializeOwned,
    K: Ord,
{
    let parse_error = |source| CatalogError::Parse {
        what: what.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(body).map_err(parse_error)?;
    match value {
        Value::Object(map) => {
            let mut records = map
                .into_iter()
                .map(|(_, record)| serde_json::from_value(record))
                .collect::<Result<Vec<T>, _>>()
                .map_err(parse_error)?;
            records.sort_by_key(|record| sort_key(record));
            Ok(records)
        }
        other => serde_json::from_value(other).map_err(parse_error),
    }
}
