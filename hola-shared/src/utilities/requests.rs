use std::collections::HashMap;
use lambda_http::request::RequestContext as LambdaRequestContext;
use lambda_http::{Request, RequestExt};
use crate::models::events::InboundRequest;

const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Converts a runtime request into an `InboundRequest`.
///
/// Header values that are not visible ASCII are dropped and a body that is
/// not UTF-8 is decoded lossily; both cases are logged.
pub fn to_inbound_request(event: &Request) -> InboundRequest {
    let headers: HashMap<String, String> = event
        .headers()
        .iter()
        .filter_map(|(name, value)| match value.to_str() {
            Ok(value) => Some((name.as_str().to_string(), value.to_string())),
            Err(_) => {
                log::warn!("Dropping header {}: value is not visible ASCII ({} bytes)", name, value.len());
                None
            }
        })
        .collect();

    let raw_body: &[u8] = event.body().as_ref();
    let body = match std::str::from_utf8(raw_body) {
        Ok(text) => text.to_string(),
        Err(e) => {
            log::warn!("Body is not valid UTF-8 ({}); raw size = {} bytes.", e, raw_body.len());
            String::from_utf8_lossy(raw_body).into_owned()
        }
    };

    InboundRequest::new(headers, body, extract_request_id(event))
}

/// Gateway request id, falling back to the Lambda invocation id.
pub fn extract_request_id(event: &Request) -> String {
    let gateway_id = event.request_context_ref().and_then(|context| match context {
        LambdaRequestContext::ApiGatewayV1(ctx) => ctx.request_id.clone(),
        LambdaRequestContext::ApiGatewayV2(ctx) => ctx.request_id.clone(),
        _ => None,
    });

    gateway_id
        .or_else(|| event.lambda_context_ref().map(|ctx| ctx.request_id.clone()))
        .unwrap_or_else(|| UNKNOWN_REQUEST_ID.to_string())
}

/// Raw Authorization header value, empty when absent.
pub fn authorization_header(request: &InboundRequest) -> &str {
    request.header("Authorization").unwrap_or("")
}
