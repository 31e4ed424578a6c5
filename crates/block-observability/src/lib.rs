//! Observability for page-builder blocks.
//!
//! This crate provides:
//! - `StructuredLogger` - Request-scoped structured logging emitted through `tracing`
//! - `LoggerConfig` - Level and format settings read from host configuration

mod logging;

pub use logging::*;

// Re-export RequestId from block-core for convenience
pub use block_core::RequestId;
