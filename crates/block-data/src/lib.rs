//! Product data access for page-builder blocks.
//!
//! This crate provides:
//! - `Product` / `ProductImage` - Catalog models as the host API returns them
//! - `ProductClient` trait - The host's product lookup and search
//! - `HttpProductClient` / `StaticProductClient` - Outbound HTTP and in-memory clients
//! - `get_data_props` - Resolves the product a block renders

mod accessor;
mod client;
mod model;

pub use accessor::*;
pub use client::*;
pub use model::*;
