//! Catalog API client.

use std::sync::Arc;
use std::time::Duration;

use cafe_world_core::{CatalogItem, Shop};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::{CatalogError, CatalogSource, parse_records};

/// Client for the catalog JSON API.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct HttpCatalog {
    inner: Arc<HttpCatalogInner>,
}

struct HttpCatalogInner {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl HttpCatalog {
    /// Create a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &Url,
        token: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: Arc::new(HttpCatalogInner {
                client,
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
                token,
            }),
        })
    }

    /// Full URL for a collection, e.g. `http://localhost:5000/drinks`.
    #[must_use]
    pub fn endpoint(&self, collection: &str) -> String {
        format!("{}/{collection}", self.inner.base_url)
    }

    /// GET a collection and parse it.
    async fn get_list<T, K>(
        &self,
        collection: &str,
        sort_key: impl Fn(&T) -> K,
    ) -> Result<Vec<T>, CatalogError>
    where
        T: DeserializeOwned,
        K: Ord,
    {
        let endpoint = self.endpoint(collection);

        let mut request = self
            .inner
            .client
            .get(&endpoint)
            .header("Accept", "application/json");
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        debug!(bytes = body.len(), "Catalog response received");
        parse_records(collection, &body, sort_key)
    }
}

impl std::fmt::Debug for HttpCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalog")
            .field("base_url", &self.inner.base_url)
            .field("token", &self.inner.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl CatalogSource for HttpCatalog {
    #[instrument(skip(self), fields(base_url = %self.inner.base_url))]
    async fn fetch_shops(&self) -> Result<Vec<Shop>, CatalogError> {
        self.get_list("shops", |shop: &Shop| shop.id.as_i32()).await
    }

    #[instrument(skip(self), fields(base_url = %self.inner.base_url))]
    async fn fetch_drinks(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        self.get_list("drinks", |drink: &CatalogItem| drink.id.as_i32())
            .await
    }
}
