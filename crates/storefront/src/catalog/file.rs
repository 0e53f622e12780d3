//! Catalog read from JSON files on disk.

use std::path::{Path, PathBuf};

use cafe_world_core::{CatalogItem, Shop};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::{CatalogError, CatalogSource, parse_records};

/// Reads `shops.json` and `drinks.json` from one directory.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    dir: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    async fn read_list<T, K>(
        &self,
        collection: &str,
        sort_key: impl Fn(&T) -> K,
    ) -> Result<Vec<T>, CatalogError>
    where
        T: DeserializeOwned,
        K: Ord,
    {
        let path = self.dir.join(format!("{collection}.json"));
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
        parse_records(collection, &body, sort_key)
    }
}

impl CatalogSource for FileCatalog {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn fetch_shops(&self) -> Result<Vec<Shop>, CatalogError> {
        self.read_list("shops", |shop: &Shop| shop.id.as_i32()).await
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn fetch_drinks(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        self.read_list("drinks", |drink: &CatalogItem| drink.id.as_i32())
            .await
    }
}
