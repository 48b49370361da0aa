use thiserror::Error;

/// Shown when a failure response carries no parsable JSON body.
pub const NO_DETAIL_FALLBACK: &str = "No JSON in error response";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service responded with a non-success status. The message is the
    /// extracted error detail, shown to the user verbatim.
    #[error("{0}")]
    Status(String),
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service responded, but the body was not the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Banner text for this failure. Server errors surface their detail
    /// as-is; transport errors collapse to a generic line (the underlying
    /// cause goes to the log, not the user).
    pub fn banner_message(&self) -> String {
        match self {
            ApiError::Status(detail) => detail.clone(),
            ApiError::Transport(_) => "Request failed: service unreachable".to_string(),
            ApiError::Decode(_) => "Request failed: unexpected response from service".to_string(),
        }
    }
}

/// Extract a human-readable message from a failure response body.
///
/// A string `detail` field is used verbatim. A structured `detail` (or, when
/// there is no `detail` at all, the whole body) is rendered as compact JSON.
/// A body that is not JSON yields a fixed fallback.
pub fn extract_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return NO_DETAIL_FALLBACK.to_string();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        assert_eq!(
            extract_detail(r#"{"detail":"amp_number already exists"}"#),
            "amp_number already exists"
        );
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let message = extract_detail(r#"{"detail":[{"loc":["body","amp_number"]}]}"#);
        assert_eq!(message, r#"[{"loc":["body","amp_number"]}]"#);
    }

    #[test]
    fn body_without_detail_is_rendered_whole() {
        assert_eq!(extract_detail(r#"{"error":"boom"}"#), r#"{"error":"boom"}"#);
    }

    #[test]
    fn non_json_body_falls_back() {
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), NO_DETAIL_FALLBACK);
    }

    #[test]
    fn status_banner_is_the_detail_verbatim() {
        let status = ApiError::Status("nope".to_string());
        assert_eq!(status.banner_message(), "nope");
    }
}
