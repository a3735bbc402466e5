use thiserror::Error;

/// Every way a background request can fail.
///
/// Features never branch on the variant beyond logging it: any failure collapses to
/// the feature's generic user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("API Error: {status} {reason}")]
    Status { status: u16, reason: String },
    /// The body was not the JSON the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The request URL could not be resolved against the page origin.
    #[error("invalid request url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    pub fn status(status: u16) -> Self {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string();
        Self::Status { status, reason }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_carries_reason_phrase() {
        let err = ApiError::status(404);
        assert_eq!(err.to_string(), "API Error: 404 Not Found");
    }

    #[test]
    fn test_unknown_status_has_empty_reason() {
        let err = ApiError::status(599);
        assert_eq!(
            err,
            ApiError::Status {
                status: 599,
                reason: String::new()
            }
        );
    }
}
