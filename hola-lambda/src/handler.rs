use std::collections::HashMap;
use http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use hola_shared::models::events::{InboundRequest, OutboundResponse};
use hola_shared::utilities::logging::{log_error, log_info};
use hola_shared::utilities::requests::to_inbound_request;
use hola_shared::utilities::responses::into_lambda_response;
use hola_shared::utilities::token_decoding::get_claims;

pub const GREETING: &str = "Hola mundo v0.0.1";

// Narrower than the shared response builder's CORS set.
fn greeting_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ("Access-Control-Allow-Methods".to_string(), "GET".to_string()),
    ])
}

/// Logs the request and answers with the fixed greeting. Never fails.
pub fn handle_request(request: &InboundRequest) -> OutboundResponse {
    log::info!("Processing request data for request {}.", request.request_id());
    log::info!("Body size = {}.", request.body.len());

    let mut headers: Vec<(&String, &String)> = request.headers.iter().collect();
    headers.sort();
    log::info!("Headers:");
    for (key, value) in headers {
        log::info!("    {}: {}", key, value);
    }

    match get_claims(request) {
        Ok(claims) => log_info(request.request_id(), "claims", &format!("sub={}", claims.sub)),
        Err(e) => log::debug!("No claims for request {}: {}", request.request_id(), e),
    }

    OutboundResponse {
        status_code: StatusCode::OK.as_u16(),
        headers: greeting_headers(),
        body: GREETING.to_string(),
    }
}

pub async fn handle_lambda(event: Request) -> Result<Response<Body>, Error> {
    let request = to_inbound_request(&event);
    let response = handle_request(&request);

    into_lambda_response(response)
        .inspect_err(|e| log_error(request.request_id(), "response", &e.to_string()))
}
