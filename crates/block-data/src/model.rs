//! Product data models.

use serde::{Deserialize, Serialize};

/// Size token for the main product image.
pub const MAIN_IMAGE_SIZE: &str = "w_500";

/// Size token for thumbnails.
pub const THUMBNAIL_SIZE: &str = "w_100";

/// Product as returned by the host's catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    /// HTML description.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// Product image, served from a CDN base or an absolute URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub uri_base: Option<String>,
    #[serde(default)]
    pub full_uri: Option<String>,
}

impl ProductImage {
    /// Image URL at `size` (e.g. `w_500`).
    ///
    /// With a CDN base the URL is `{uri_base}{size}/{image_path}`; otherwise
    /// the absolute `full_uri`, or an empty string when there is none.
    pub fn url(&self, size: &str) -> String {
        match self.uri_base.as_deref().filter(|base| !base.is_empty()) {
            Some(base) => format!("{}{}/{}", base, size, self.image_path),
            None => self.full_uri.clone().unwrap_or_default(),
        }
    }
}

/// Product search parameters. The default is the empty search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Product search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Product>,
    #[serde(default)]
    pub total: Option<u32>,
}
