use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};
use ureq::Agent;

use crate::createmeta::CreateMetaService;
use crate::error::{CreateMetaError, Result};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Blocking Jira REST client
pub struct JiraClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl JiraClient {
    /// Create a new Jira client with Basic Auth
    ///
    /// For Jira Cloud, use your email and an API token.
    /// For Jira Server, use your username and password.
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            // Status codes are mapped in check_response
            .http_status_as_error(false)
            .build()
            .into();

        let credentials = format!("{}:{}", username, password);
        let auth_header = format!("Basic {}", STANDARD.encode(credentials));

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        }
    }

    /// Create-metadata operations backed by this client
    pub fn create_meta(&self) -> CreateMetaService<'_, Self> {
        CreateMetaService::new(self)
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!(
            "{}/{}",
            self.base_url,
            request.path_and_query().trim_start_matches('/')
        )
    }

    /// Read the body and turn non-2xx statuses into errors
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;

        if (200..300).contains(&status) {
            return Ok(ApiResponse { status, body });
        }

        warn!(status, "Jira request failed");

        if status == 401 {
            return Err(CreateMetaError::Unauthorized);
        }

        Err(CreateMetaError::Api {
            status,
            message: error_message(status, body),
        })
    }
}

impl Transport for JiraClient {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url(request);
        debug!(method = %request.method(), %url, "sending request");

        let builder = match request.method() {
            Method::Get => self.agent.get(&url),
        };

        let response = builder
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        self.check_response(response)
    }
}

/// Jira error format: {"errorMessages":["..."], "errors":{"field":"..."}}
fn error_message(status: u16, body: String) -> String {
    let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) else {
        return if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };
    };

    let mut messages = Vec::new();

    if let Some(errors) = error_response
        .get("errorMessages")
        .and_then(|e| e.as_array())
    {
        messages.extend(errors.iter().filter_map(|e| e.as_str()).map(String::from));
    }

    if let Some(errors) = error_response.get("errors").and_then(|e| e.as_object()) {
        for (field, msg) in errors {
            if let Some(s) = msg.as_str() {
                messages.push(format!("{}: {}", field, s));
            }
        }
    }

    if messages.is_empty() {
        body
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = JiraClient::new("https://jira.example.com/", "user", "pass");
        let request = ApiRequest::get("rest/api/2/project/PC").query("expand", "issuetypes");

        assert_eq!(
            client.url(&request),
            "https://jira.example.com/rest/api/2/project/PC?expand=issuetypes"
        );
    }

    #[test]
    fn test_basic_auth_header() {
        let client = JiraClient::new("https://jira.example.com", "test@test.com", "test-token");
        assert_eq!(client.auth_header, "Basic dGVzdEB0ZXN0LmNvbTp0ZXN0LXRva2Vu");
    }

    #[test]
    fn test_error_message_from_jira_body() {
        let body = r#"{"errorMessages":["No project could be found with key 'NOPE'."],"errors":{"project":"invalid"}}"#;

        assert_eq!(
            error_message(404, body.to_string()),
            "No project could be found with key 'NOPE'.; project: invalid"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(502, String::new()), "HTTP 502");
        assert_eq!(error_message(500, "oops".to_string()), "oops");
        assert_eq!(error_message(500, "{}".to_string()), "{}");
    }
}
