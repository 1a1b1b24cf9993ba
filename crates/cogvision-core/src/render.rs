//! Pretty-printing of response documents.

use serde_json::Value;

/// Pretty-print a response document with two-space indentation.
pub fn render_document(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}

/// Pretty-print a raw body if it is JSON, otherwise return it trimmed.
pub fn render_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(document) => render_document(&document),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_round_trip() {
        let document = json!({
            "language": "en",
            "textAngle": 0.0,
            "orientation": "Up",
            "regions": [{"boundingBox": "21,16,304,451", "lines": []}]
        });
        let rendered = render_document(&document);
        assert!(rendered.contains('\n'));
        let reparsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn test_render_body_non_json() {
        assert_eq!(render_body("  <html>oops</html>\n"), "<html>oops</html>");
    }

    #[test]
    fn test_render_body_json() {
        assert_eq!(render_body(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
    }
}
