use std::collections::HashMap;
use http::StatusCode;
use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::json;
use crate::models::errors::ResponseError;
use crate::models::events::OutboundResponse;

pub const MARSHALLING_ERROR: &str = "error marshalling response";

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_CREDENTIALS: &str = "true";

fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Access-Control-Allow-Origin".to_string(), ALLOW_ORIGIN.to_string()),
        ("Access-Control-Allow-Methods".to_string(), ALLOW_METHODS.to_string()),
        ("Access-Control-Allow-Credentials".to_string(), ALLOW_CREDENTIALS.to_string()),
    ])
}

/// `{"message": msg}` with status 200.
pub fn success(msg: &str) -> OutboundResponse {
    response_msg(msg, StatusCode::OK)
}

pub fn response_msg(msg: &str, code: StatusCode) -> OutboundResponse {
    json_response(json!({ "message": msg }), code)
}

/// Serializes `data` as the body. A payload that cannot be serialized turns
/// into the fixed 500 from `error`, dropping the requested status.
pub fn json_response<T: Serialize>(data: T, code: StatusCode) -> OutboundResponse {
    try_json_response(data, code).unwrap_or_else(|e| {
        log::error!("Failed to serialize response: {}", e);
        error(MARSHALLING_ERROR)
    })
}

pub fn try_json_response<T: Serialize>(data: T, code: StatusCode) -> Result<OutboundResponse, ResponseError> {
    let body = serde_json::to_string(&data)?;
    Ok(OutboundResponse {
        status_code: code.as_u16(),
        headers: cors_headers(),
        body,
    })
}

/// Status 500 with `msg` as a plain text body.
pub fn error(msg: &str) -> OutboundResponse {
    OutboundResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        headers: cors_headers(),
        body: msg.to_string(),
    }
}

pub fn into_lambda_response(response: OutboundResponse) -> Result<Response<Body>, lambda_http::Error> {
    log::info!("Response Code:{}\nBody: {}", response.status_code, response.body);
    let builder = response
        .headers
        .iter()
        .fold(Response::builder().status(response.status_code), |builder, (name, value)| {
            builder.header(name.as_str(), value.as_str())
        });

    builder
        .body(Body::Text(response.body))
        .map_err(|e| {
            log::error!("Failed to build response: {:?}", e);
            lambda_http::Error::from("Failed to construct HTTP response")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::Serializer;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    fn assert_full_cors(response: &OutboundResponse) {
        assert_eq!(response.headers.len(), 3);
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(response.headers["Access-Control-Allow-Methods"], "GET, POST, PUT, DELETE, OPTIONS");
        assert_eq!(response.headers["Access-Control-Allow-Credentials"], "true");
    }

    #[test]
    fn test_success() {
        let response = success("ok");

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"ok"}"#);
        assert_full_cors(&response);
    }

    #[test]
    fn test_response_msg_keeps_status() {
        let response = response_msg("missing", StatusCode::NOT_FOUND);

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"message":"missing"}"#);
        assert_full_cors(&response);
    }

    #[test]
    fn test_json_response_payload() {
        #[derive(Serialize)]
        struct Balance {
            amount: u64,
            currency: &'static str,
        }

        let response = json_response(Balance { amount: 10, currency: "EUR" }, StatusCode::CREATED);

        assert_eq!(response.status_code, 201);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({ "amount": 10, "currency": "EUR" }));
    }

    #[test]
    fn test_json_response_serialization_failure_falls_back() {
        let response = json_response(Unserializable, StatusCode::ACCEPTED);

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, MARSHALLING_ERROR);
        assert_full_cors(&response);
    }

    #[test]
    fn test_json_response_non_string_map_keys_fall_back() {
        let data = HashMap::from([((1, 2), "pair")]);
        let response = json_response(data, StatusCode::OK);

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, MARSHALLING_ERROR);
    }

    #[test]
    fn test_try_json_response_surfaces_error() {
        let result = try_json_response(Unserializable, StatusCode::OK);
        assert!(matches!(result, Err(ResponseError::SerializationError(_))));
    }

    #[test]
    fn test_error_is_plain_text() {
        let response = error("boom");

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "boom");
        assert_full_cors(&response);
    }

    #[test]
    fn test_into_lambda_response() {
        let response = into_lambda_response(success("hi")).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Access-Control-Allow-Credentials"], "true");
        match response.body() {
            Body::Text(body) => assert_eq!(body, r#"{"message":"hi"}"#),
            _ => panic!("Response body is not text"),
        }
    }

    #[test]
    fn test_into_lambda_response_invalid_status() {
        let response = OutboundResponse { status_code: 42, ..Default::default() };
        assert!(into_lambda_response(response).is_err());
    }
}
