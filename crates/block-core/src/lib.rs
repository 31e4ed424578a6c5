//! Core abstractions for page-builder blocks.
//!
//! This crate provides the fundamental types and traits:
//! - `RequestContext` - Request path and raw query parameters
//! - `QueryParams` - Typed query state used by AMP rendering
//! - `HostUtils` trait - Render mode and canonical URL helpers supplied by the host
//! - `BlockConfig` / `ConfigSpec` - Block configuration and its editor schema

mod config;
mod context;
mod error;
mod host;
mod query;

pub use config::*;
pub use context::*;
pub use error::*;
pub use host::*;
pub use query::*;
