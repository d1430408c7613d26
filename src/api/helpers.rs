//! Response builders for the API handler.

use serde::Serialize;
use serde_json::{Value, json};

/// Returns a response with the given status code and a JSON-encoded body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({ "statusCode": status_code, "body": body }),
        Err(e) => err_response(500, &format!("Failed to serialize response: {e}")),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
