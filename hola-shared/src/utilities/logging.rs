use serde_json::{json, Value};
use log::{info, error};

fn event_line(request_id: &str, event: &str, field: &str, text: &str) -> Value {
    let mut line = json!({
        "requestId": request_id,
        "event": event,
    });
    line[field] = Value::String(text.to_string());
    line
}

/// Logs an informational event for one invocation in JSON format.
pub fn log_info(request_id: &str, event: &str, message: &str) {
    info!("{}", event_line(request_id, event, "message", message));
}

/// Logs an error event for one invocation in JSON format.
pub fn log_error(request_id: &str, event: &str, error_message: &str) {
    error!("{}", event_line(request_id, event, "error", error_message));
}
