//! Dual-mode action bindings.

use block_core::{HostUtils, RenderMode, UrlParams};

use crate::node::{Element, Event};

/// How a control triggers a state change.
///
/// Interactive pages bind a click message; AMP pages cannot run script, so
/// the control becomes a link back to the same page with query parameters
/// that seed the next render.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionBinding<M> {
    Callback(M),
    LinkWithParams(UrlParams),
}

impl<M> ActionBinding<M> {
    /// Choose the binding for `mode`.
    pub fn for_mode(mode: RenderMode, message: M, params: impl FnOnce() -> UrlParams) -> Self {
        match mode {
            RenderMode::Interactive => ActionBinding::Callback(message),
            RenderMode::Amp => ActionBinding::LinkWithParams(params()),
        }
    }

    /// Attach the binding to `element`: a click handler or an `href`.
    pub fn bind(self, element: Element<M>, utils: &dyn HostUtils) -> Element<M> {
        match self {
            ActionBinding::Callback(message) => element.on(Event::Click, message),
            ActionBinding::LinkWithParams(params) => {
                element.attr("href", utils.canonical_url(&params))
            }
        }
    }
}
