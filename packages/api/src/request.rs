//! Request/response values and the per-endpoint builders.
//!
//! Builders never touch the network and never fail: URLs stay exactly as relative or
//! absolute as the page gave them, and resolution happens in the client.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::form::FormQuery;
use crate::REQUESTED_WITH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request ready to hand to an [`HttpClient`](crate::HttpClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Form-encoded body, sent as `application/x-www-form-urlencoded`.
    pub form: Option<FormQuery>,
}

impl ApiRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: vec![(REQUESTED_WITH.0.to_string(), REQUESTED_WITH.1.to_string())],
            form: None,
        }
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fails with [`ApiError::Status`] on anything but 2xx.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::status(self.status))
        }
    }

    /// Checks the status, then decodes the body.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.ensure_success()?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// `GET <endpoint>?query=<q>&service_id=<id>`.
///
/// `service_id` is left out entirely when the search input has none.
pub fn search_people(endpoint: &str, query: &str, service_id: Option<&str>) -> ApiRequest {
    let mut params = FormQuery::new().with("query", query);
    if let Some(id) = service_id {
        params.push("service_id", id);
    }
    ApiRequest::new(Method::Get, params.url_with(endpoint, &[]))
        .header("Content-Type", "application/json")
}

/// `POST <action>` with every form field form-encoded.
pub fn submit_attendance(action: &str, fields: FormQuery) -> ApiRequest {
    let mut request = ApiRequest::new(Method::Post, action.to_string());
    request.form = Some(fields);
    request
}

/// `GET <action>?<fields>&ajax=true`.
pub fn load_filtered(action: &str, fields: &FormQuery) -> ApiRequest {
    ApiRequest::new(Method::Get, fields.url_with(action, &[("ajax", "true")]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchResult;

    #[test]
    fn test_search_request() {
        let request = search_people("/api/people/search", "ab", Some("12"));
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "/api/people/search?query=ab&service_id=12");
        assert!(request
            .headers
            .contains(&("X-Requested-With".to_string(), "XMLHttpRequest".to_string())));
    }

    #[test]
    fn test_search_request_without_service() {
        let request = search_people("/api/people/search", "Ama K", None);
        assert_eq!(request.url, "/api/people/search?query=Ama+K");
    }

    #[test]
    fn test_attendance_request_keeps_repeated_ids() {
        let fields = FormQuery::new()
            .with("person_ids", "3")
            .with("person_ids", "9");
        let request = submit_attendance("/attendance/5/mark", fields);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/attendance/5/mark");
        assert_eq!(
            request.form.unwrap().to_query_string(),
            "person_ids=3&person_ids=9"
        );
    }

    #[test]
    fn test_filter_request_flags_background() {
        let fields = FormQuery::new().with("region_id", "1").with("name_search", "");
        let request = load_filtered("/saints", &fields);
        assert_eq!(request.url, "/saints?region_id=1&name_search=&ajax=true");
    }

    #[test]
    fn test_json_rejects_error_status() {
        let response = ApiResponse::new(500, "[]");
        assert_eq!(
            response.json::<Vec<SearchResult>>(),
            Err(ApiError::status(500))
        );
    }

    #[test]
    fn test_json_reports_bad_body() {
        let response = ApiResponse::new(200, "<html>");
        assert!(matches!(
            response.json::<Vec<SearchResult>>(),
            Err(ApiError::Decode(_))
        ));
    }
}
