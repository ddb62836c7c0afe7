//! 基础请求验证逻辑

use serde_json::Value;

use super::models::HttpServerError;

/// 验证trace payload大小上限（10MB）
const MAX_TRACE_BYTES: usize = 10 * 1024 * 1024;

/// 验证config/task必须是JSON对象
pub fn validate_payload_object(name: &str, value: &Value) -> Result<(), HttpServerError> {
    if !value.is_object() {
        return Err(HttpServerError::InvalidRequest(format!(
            "{name} must be a json object"
        )));
    }
    Ok(())
}

/// 验证trace文本大小
pub fn validate_trace_size(jsonl: &str) -> Result<(), HttpServerError> {
    if jsonl.len() > MAX_TRACE_BYTES {
        return Err(HttpServerError::InvalidRequest(format!(
            "trace too large ({} bytes, max {MAX_TRACE_BYTES})",
            jsonl.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_payload_object_success() {
        assert!(validate_payload_object("config", &json!({})).is_ok());
        assert!(validate_payload_object("task", &json!({"input": "hi"})).is_ok());
    }

    #[test]
    fn test_validate_payload_object_rejects_non_objects() {
        for bad in [json!([]), json!("x"), json!(1), json!(null)] {
            let result = validate_payload_object("config", &bad);
            match result {
                Err(HttpServerError::InvalidRequest(msg)) => {
                    assert!(msg.contains("config"));
                    assert!(msg.contains("object"));
                }
                _ => panic!("Expected InvalidRequest error"),
            }
        }
    }

    #[test]
    fn test_validate_trace_size_boundary() {
        assert!(validate_trace_size("").is_ok());
        assert!(validate_trace_size(&"x".repeat(1024)).is_ok());

        // 边界值测试：刚好在上限内
        assert!(validate_trace_size(&"x".repeat(MAX_TRACE_BYTES)).is_ok());
    }

    #[test]
    fn test_validate_trace_size_rejects_oversized_payload() {
        let oversized = "x".repeat(MAX_TRACE_BYTES + 1);
        match validate_trace_size(&oversized) {
            Err(HttpServerError::InvalidRequest(msg)) => {
                assert!(msg.contains("trace too large"));
                assert!(msg.contains(&MAX_TRACE_BYTES.to_string()));
            }
            _ => panic!("Expected InvalidRequest error"),
        }
    }
}
