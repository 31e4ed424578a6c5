//! Markup primitives for server-rendered blocks.
//!
//! This crate provides:
//! - `Node` / `Element` - Markup tree carrying typed event bindings
//! - `ActionBinding` - Click callback or self-link, chosen by render mode
//! - `StyleSheet` - Generated class names and collected CSS
//! - `Button` - Shared button primitive from the component registry
//! - `Shell` - Full-page wrapper for interactive and AMP documents

mod action;
mod button;
mod node;
mod shell;
mod style;

pub use action::*;
pub use button::*;
pub use node::*;
pub use shell::*;
pub use style::*;
