use reqwest::StatusCode;

use crate::error::WalletError;

/// walletd ignores the id and answers one request per POST, so it stays fixed.
pub(super) const REQUEST_ID: u64 = 0;

/// Longest slice of a response body echoed back inside an error.
const BODY_EXCERPT_CHARS: usize = 256;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) password: &'a str,
    pub(super) method: &'a str,
    pub(super) params: serde_json::Value,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Turn a raw HTTP exchange into the `result` value of the envelope.
///
/// A missing or null `result` comes back as `Value::Null`; the per-method
/// parser decides whether that is meaningful.
pub(super) fn decode_envelope(
    method: &'static str,
    status: StatusCode,
    body: &str,
) -> Result<serde_json::Value, WalletError> {
    let decoded = parse_envelope(body);

    if !status.is_success() {
        // An error envelope is more useful than the bare status.
        if let Ok(JsonRpcResponse {
            error: Some(err), ..
        }) = decoded
        {
            return Err(parse_jsonrpc_error(method, err));
        }
        return Err(WalletError::HttpStatus {
            status: status.as_u16(),
            body: excerpt(body),
        });
    }

    let decoded = decoded.map_err(|e| {
        WalletError::decode(
            method,
            format!("decode JSON-RPC response: {e}; body={}", excerpt(body)),
        )
    })?;

    if let Some(err) = decoded.error {
        return Err(parse_jsonrpc_error(method, err));
    }

    Ok(decoded.result.unwrap_or(serde_json::Value::Null))
}

/// Decode a body that must be a JSON object.
///
/// Derived structs also accept arrays and fill fields by position, so the
/// object check has to happen before `from_value`.
fn parse_envelope(body: &str) -> Result<JsonRpcResponse, String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err(format!("expected a JSON object, got {}", json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

pub(super) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Parse a JSON-RPC error value into a `WalletError`.
///
/// walletd sends `{"code": <int>, "message": <string>}`; a bare string is
/// accepted as the message. Anything else is a decode failure.
pub(super) fn parse_jsonrpc_error(method: &'static str, err: serde_json::Value) -> WalletError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: Option<i64>,
        message: String,
    }

    if let serde_json::Value::String(message) = err {
        return WalletError::Daemon {
            code: None,
            message,
        };
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => WalletError::Daemon {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => WalletError::decode(method, format!("non-standard JSON-RPC error: {err}")),
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_CHARS {
        return body.to_owned();
    }
    let mut cut: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_walletd_envelope() {
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            password: "pw",
            method: "getStatus",
            params: serde_json::json!({}),
        };
        let value = serde_json::to_value(&req).expect("request must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 0,
                "password": "pw",
                "method": "getStatus",
                "params": {}
            })
        );
    }

    #[test]
    fn result_is_returned() {
        let result = decode_envelope("getStatus", StatusCode::OK, r#"{"result":{"peerCount":5}}"#)
            .expect("should decode");
        assert_eq!(result, serde_json::json!({"peerCount": 5}));
    }

    #[test]
    fn null_or_missing_result_is_null() {
        let null = decode_envelope("getTransactions", StatusCode::OK, r#"{"result":null}"#)
            .expect("should decode");
        assert!(null.is_null());
        let missing =
            decode_envelope("getTransactions", StatusCode::OK, "{}").expect("should decode");
        assert!(missing.is_null());
    }

    #[test]
    fn error_envelope_wins_over_result() {
        let body = r#"{"error":{"code":-32700,"message":"Wrong amount"},"result":{"transactionHash":"ab"}}"#;
        let err = decode_envelope("sendTransaction", StatusCode::OK, body).expect_err("must fail");
        assert!(matches!(
            err,
            WalletError::Daemon { code: Some(-32700), ref message } if message == "Wrong amount"
        ));
    }

    #[test]
    fn null_error_is_ignored() {
        let result = decode_envelope("save", StatusCode::OK, r#"{"error":null,"result":{}}"#)
            .expect("null error is not an error");
        assert_eq!(result, serde_json::json!({}));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode_envelope("getStatus", StatusCode::OK, "<html>").expect_err("must fail");
        assert!(matches!(err, WalletError::Decode { method: "getStatus", .. }));
    }

    #[test]
    fn non_object_body_is_decode_error() {
        let err = decode_envelope("getStatus", StatusCode::OK, "42").expect_err("must fail");
        assert!(matches!(err, WalletError::Decode { .. }));
    }

    #[test]
    fn array_body_is_decode_error() {
        let err = decode_envelope("save", StatusCode::OK, "[null, null]").expect_err("must fail");
        assert!(matches!(err, WalletError::Decode { method: "save", .. }));
        assert!(err.to_string().contains("expected a JSON object, got an array"));
    }

    #[test]
    fn array_error_body_on_failure_status_is_http_status() {
        let err = decode_envelope("save", StatusCode::BAD_GATEWAY, r#"[null, {"message":"x"}]"#)
            .expect_err("must fail");
        assert!(matches!(err, WalletError::HttpStatus { status: 502, .. }));
    }

    #[test]
    fn non_success_status_without_envelope() {
        let err = decode_envelope("getStatus", StatusCode::BAD_GATEWAY, "upstream down")
            .expect_err("must fail");
        assert!(matches!(
            err,
            WalletError::HttpStatus { status: 502, ref body } if body == "upstream down"
        ));
    }

    #[test]
    fn non_success_status_with_error_envelope() {
        let body = r#"{"error":{"code":-32600,"message":"Invalid password"}}"#;
        let err = decode_envelope("getBalance", StatusCode::UNAUTHORIZED, body)
            .expect_err("must fail");
        assert_eq!(err.daemon_message(), Some("Invalid password"));
    }

    #[test]
    fn string_error_becomes_message() {
        let err = parse_jsonrpc_error("save", serde_json::json!("wallet busy"));
        assert_eq!(err.daemon_message(), Some("wallet busy"));
    }

    #[test]
    fn odd_error_shape_is_decode_error() {
        let err = parse_jsonrpc_error("save", serde_json::json!(42));
        assert!(matches!(err, WalletError::Decode { .. }));
    }

    #[test]
    fn long_bodies_are_cut() {
        let body = "x".repeat(BODY_EXCERPT_CHARS * 2);
        let cut = excerpt(&body);
        assert_eq!(cut.len(), BODY_EXCERPT_CHARS + 3);
        assert!(cut.ends_with("..."));
    }
}
