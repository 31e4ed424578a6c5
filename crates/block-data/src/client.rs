//! Product clients.

use async_trait::async_trait;
use block_core::url_encode;
use serde::de::DeserializeOwned;

use crate::model::{Product, SearchQuery, SearchResponse};

/// Error type for product fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product search returned no items")]
    EmptySearch,

    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// The host's product catalog.
///
/// Hosts run blocks on a single thread, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait ProductClient {
    /// Fetch one product by id.
    async fn get_by_id(&self, id: &str) -> Result<Product, FetchError>;

    /// Search the catalog.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError>;
}

/// Catalog client over a JSON HTTP API.
///
/// Uses Spin outbound HTTP; on other targets every request fails with
/// `FetchError::Unsupported`.
#[derive(Debug, Clone)]
pub struct HttpProductClient {
    base_url: String,
}

impl HttpProductClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of a single product.
    pub fn product_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.base_url, url_encode(id))
    }

    /// URL of a search.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        let mut params = Vec::new();
        if let Some(q) = &query.q {
            params.push(format!("q={}", url_encode(q)));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={}", limit));
        }

        if params.is_empty() {
            format!("{}/products", self.base_url)
        } else {
            format!("{}/products?{}", self.base_url, params.join("&"))
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let req = spin_sdk::http::Request::get(url);
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = resp.status();
        if *status == 404 {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if *status >= 400 {
            return Err(FetchError::Http {
                status: *status,
                url: url.to_string(),
            });
        }

        Ok(serde_json::from_slice(resp.body())?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        Err(FetchError::Unsupported(format!(
            "outbound HTTP needs the Spin runtime: {url}"
        )))
    }
}

#[async_trait(?Send)]
impl ProductClient for HttpProductClient {
    async fn get_by_id(&self, id: &str) -> Result<Product, FetchError> {
        self.get_json(&self.product_url(id)).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError> {
        self.get_json(&self.search_url(query)).await
    }
}

/// In-memory catalog for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProductClient {
    products: Vec<Product>,
}

impl StaticProductClient {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load products from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

#[async_trait(?Send)]
impl ProductClient for StaticProductClient {
    async fn get_by_id(&self, id: &str) -> Result<Product, FetchError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.to_string()))
    }

    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError> {
        let needle = query.q.as_deref().unwrap_or("").to_lowercase();
        let matches = self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle));
        let items: Vec<Product> = match query.limit {
            Some(limit) => matches.take(limit as usize).cloned().collect(),
            None => matches.cloned().collect(),
        };
        Ok(SearchResponse {
            total: Some(items.len() as u32),
            items,
        })
    }
}
