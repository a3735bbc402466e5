use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse};

/// In-memory HttpClient for testing: answers from a FIFO of canned outcomes and
/// records every request it was asked to send.
#[derive(Clone, Debug, Default)]
pub struct ScriptedClient {
    outcomes: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(&self, reason: &str) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedClient {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::search_people;

    #[tokio::test]
    async fn test_answers_in_order_and_records() {
        let client = ScriptedClient::new();
        client.respond(200, "[]").fail("offline");

        let request = search_people("/api/people/search", "ab", None);
        let first = client.send(&request).await;
        let second = client.send(&request).await;
        let third = client.send(&request).await;

        assert_eq!(first, Ok(ApiResponse::new(200, "[]")));
        assert_eq!(second, Err(ApiError::Transport("offline".to_string())));
        assert!(third.is_err());
        assert_eq!(client.requests().len(), 3);
    }
}
