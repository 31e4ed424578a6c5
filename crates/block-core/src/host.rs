//! Host-supplied utilities: render mode and canonical URLs.

use crate::context::{url_encode, RawQuery, RequestContext};
use crate::error::BlockError;

/// How the host renders the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Client script runs; state changes are click bindings.
    #[default]
    Interactive,
    /// AMP page; state changes are self-links carrying query parameters.
    Amp,
}

impl RenderMode {
    /// Pick the mode from the host's AMP flag.
    pub fn from_amp_flag(is_amp: bool) -> Self {
        if is_amp {
            Self::Amp
        } else {
            Self::Interactive
        }
    }

    /// Whether this is an AMP request.
    pub fn is_amp(self) -> bool {
        matches!(self, Self::Amp)
    }
}

/// Ordered query parameters to merge into a canonical URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams(Vec<(String, String)>);

impl UrlParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Utilities the host platform hands to every block.
pub trait HostUtils {
    /// Rendering mode of the current request.
    fn render_mode(&self) -> RenderMode;

    /// Whether the host is rendering a published page (as opposed to the editor).
    fn is_rendering(&self) -> bool;

    /// Build a self-referencing URL with `params` merged into the current query.
    fn canonical_url(&self, params: &UrlParams) -> String;

    /// URL of the current page without its query string.
    fn page_url(&self) -> String;

    /// Whether this is an AMP request.
    fn is_amp_request(&self) -> bool {
        self.render_mode().is_amp()
    }
}

/// `HostUtils` backed by the incoming request.
#[derive(Debug, Clone)]
pub struct RequestUtils {
    path: String,
    query: RawQuery,
    origin: Option<String>,
    mode: RenderMode,
    rendering: bool,
}

impl RequestUtils {
    /// Create utilities for a request.
    pub fn new(ctx: &RequestContext, mode: RenderMode) -> Self {
        Self {
            path: ctx.path.clone(),
            query: ctx.query.clone(),
            origin: None,
            mode,
            rendering: true,
        }
    }

    /// Prefix canonical URLs with an absolute origin such as `https://shop.example.com`.
    pub fn with_origin(mut self, origin: &str) -> Result<Self, BlockError> {
        let uri: http::Uri = origin
            .parse()
            .map_err(|e: http::uri::InvalidUri| BlockError::InvalidUrl(format!("{origin}: {e}")))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(BlockError::InvalidUrl(format!(
                "{origin}: origin needs a scheme and host"
            )));
        }
        self.origin = Some(origin.trim_end_matches('/').to_string());
        Ok(self)
    }

    /// Mark whether the host is rendering a published page.
    pub fn with_rendering(mut self, rendering: bool) -> Self {
        self.rendering = rendering;
        self
    }
}

impl HostUtils for RequestUtils {
    fn render_mode(&self) -> RenderMode {
        self.mode
    }

    fn is_rendering(&self) -> bool {
        self.rendering
    }

    fn canonical_url(&self, params: &UrlParams) -> String {
        let mut merged = self.query.clone();
        for (key, value) in params.iter() {
            merged.insert(key.to_string(), value.to_string());
        }

        let mut url = self.page_url();
        if !merged.is_empty() {
            let query: Vec<String> = merged
                .iter()
                .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }

    fn page_url(&self) -> String {
        match &self.origin {
            Some(origin) => format!("{}{}", origin, self.path),
            None => self.path.clone(),
        }
    }
}
