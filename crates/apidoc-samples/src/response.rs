use apidoc_core::ResponseExample;
use apidoc_core::error::RenderError;

/// Fixed `metadata.date_time` so generated output is reproducible.
pub const EXAMPLE_TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

pub const STATUS_LINE: &str = "HTTP/1.1 200 OK";

/// The generic success body shown under every request sample.
pub fn example_response(timestamp: &str) -> Result<ResponseExample, RenderError> {
    let body = serde_json::json!({
        "data": {
            "message": "Operation completed successfully",
            "id": "12345"
        },
        "metadata": {
            "message": "success",
            "http_code": 200,
            "status": "ok",
            "date_time": timestamp
        }
    });
    let body = serde_json::to_string_pretty(&body).map_err(|e| RenderError::Template {
        target: "response".to_string(),
        message: e.to_string(),
    })?;
    Ok(ResponseExample {
        status_line: STATUS_LINE.to_string(),
        format: "JSON".to_string(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_body() {
        let example = example_response(EXAMPLE_TIMESTAMP).unwrap();
        assert_eq!(example.status_line, "HTTP/1.1 200 OK");
        insta::assert_snapshot!(example.body, @r#"
{
  "data": {
    "message": "Operation completed successfully",
    "id": "12345"
  },
  "metadata": {
    "message": "success",
    "http_code": 200,
    "status": "ok",
    "date_time": "2024-01-01T00:00:00.000Z"
  }
}
"#);
    }
}
