//! Spin HTTP entry point.

use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use block_core::RequestContext;
use block_data::HttpProductClient;
use block_observability::{LogFormat, LogLevel, LoggerConfig, StructuredLogger};

use crate::page::{error_document, extract_product_id, render_page, response_headers, PageRequest};
use crate::BLOCK_NAME;

/// Product API base URL (in production, this would be configured)
const API_BASE: &str = "https://api.example.com/v1";

/// Serves `/product/{id}`; `?amp=1` selects the AMP rendering.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::from_path_with_query(&path);
    let logging = LoggerConfig {
        level: LogLevel::Debug,
        format: LogFormat::Human,
    };
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_block(BLOCK_NAME)
        .with_route(&ctx.path)
        .with_config(logging);

    let config_json = match extract_product_id(&ctx.path) {
        Some(id) => serde_json::json!({ "productId": id }).to_string(),
        None => "{}".to_string(),
    };
    let amp = ctx
        .query_param("amp")
        .is_some_and(|v| v != "0" && v != "false");

    let request = PageRequest {
        path_with_query: &path,
        config_json: &config_json,
        amp,
        request_id: Some(ctx.request_id.clone()),
        logging,
        ..PageRequest::default()
    };
    let client = HttpProductClient::new(API_BASE);

    let (status, html) = match render_page(&request, &client).await {
        Ok(html) => (200, html),
        Err(e) => {
            logger
                .warn_builder("Block render failed")
                .field("error", format!("{e:#}"))
                .emit();
            (502, error_document(&e))
        }
    };

    let headers = Fields::from_list(&response_headers(&ctx.request_id)).unwrap_or_else(|e| {
        logger
            .warn_builder("Invalid response headers")
            .field("error", format!("{e:?}"))
            .emit();
        Fields::new()
    });
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(status).is_err() {
        logger
            .warn_builder("Invalid response status")
            .field_i64("status", i64::from(status))
            .emit();
    }

    let mut body = response.take_body();
    response_out.set(response);
    if let Err(e) = body.send(html.into_bytes()).await {
        logger
            .warn_builder("Failed to write response body")
            .field("error", e.to_string())
            .emit();
    }
}
