//! Full-page rendering for one request.

use std::rc::Rc;

use anyhow::Context;
use block_core::{BlockConfig, QueryParams, RenderMode, RequestContext, RequestId, RequestUtils};
use block_data::ProductClient;
use block_markup::{escape_html, GlobalStyles};
use block_observability::{LoggerConfig, StructuredLogger};

use crate::{BlockFactory, Host, BLOCK_NAME};

/// An incoming page request as the host hands it over.
#[derive(Debug, Clone, Default)]
pub struct PageRequest<'a> {
    /// Request path with query, e.g. `/product/7?incrementQty=true`.
    pub path_with_query: &'a str,
    /// Block configuration JSON stored by the editor.
    pub config_json: &'a str,
    pub amp: bool,
    /// Absolute origin for canonical URLs.
    pub origin: Option<&'a str>,
    /// Site theme the host applies to every block.
    pub theme: GlobalStyles,
    /// Reuse the host's request id instead of generating one.
    pub request_id: Option<RequestId>,
    pub logging: LoggerConfig,
}

/// Product id from a `/product/{id}` path.
pub fn extract_product_id(path: &str) -> Option<&str> {
    path.strip_prefix("/product/")
        .and_then(|s| s.split('?').next())
        .and_then(|s| s.split('/').next())
        .filter(|s| !s.is_empty())
}

/// Headers sent with every rendered page.
pub fn response_headers(request_id: &RequestId) -> Vec<(String, Vec<u8>)> {
    vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
    ]
}

/// Minimal page shown when rendering fails.
pub fn error_document(err: &anyhow::Error) -> String {
    format!(
        "<!DOCTYPE html>\n<html><body><p>{}</p></body></html>",
        escape_html(&format!("{err:#}"))
    )
}

/// Parse the request, fetch the product and render the document.
pub async fn render_page(
    request: &PageRequest<'_>,
    client: &dyn ProductClient,
) -> anyhow::Result<String> {
    let mut ctx = RequestContext::from_path_with_query(request.path_with_query);
    if let Some(id) = &request.request_id {
        ctx = ctx.with_request_id(id.clone());
    }

    let mut utils = RequestUtils::new(&ctx, RenderMode::from_amp_flag(request.amp));
    if let Some(origin) = request.origin {
        utils = utils.with_origin(origin).context("Invalid origin")?;
    }

    let config = BlockConfig::from_json(request.config_json).context("Invalid block config")?;

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_block(BLOCK_NAME)
        .with_route(&ctx.path)
        .with_config(request.logging);
    logger
        .info_builder("Block render started")
        .field_bool("amp", request.amp)
        .emit();

    let host =
        Host::new(Rc::new(utils), logger.clone()).with_global_styles(request.theme.clone());
    let block = BlockFactory::new(host, config)
        .load(client, QueryParams::from_query(&ctx.query))
        .await
        .context("Failed to load product")?;

    let html = block.render_document(&block.product().name);
    logger
        .info_builder("Block render complete")
        .field_i64("bytes", html.len() as i64)
        .emit();
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_headers_carry_request_id() {
        let headers = response_headers(&RequestId::from_string("req-9"));
        assert_eq!(headers[0].0, "content-type");
        assert_eq!(headers[1], ("x-request-id".to_owned(), b"req-9".to_vec()));
    }

    #[test]
    fn test_error_document_escapes_message() {
        let err = anyhow::anyhow!("no <product>").context("Failed to load product");
        assert_eq!(
            error_document(&err),
            "<!DOCTYPE html>\n<html><body><p>Failed to load product: no &lt;product&gt;</p></body></html>"
        );
    }

    #[test]
    fn test_extract_product_id() {
        assert_eq!(extract_product_id("/product/lamp"), Some("lamp"));
        assert_eq!(extract_product_id("/product/lamp/reviews"), Some("lamp"));
        assert_eq!(extract_product_id("/product/lamp?amp=1"), Some("lamp"));
        assert_eq!(extract_product_id("/product/"), None);
        assert_eq!(extract_product_id("/search"), None);
    }
}
