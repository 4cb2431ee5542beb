//! Seam between the metadata fetcher and whatever performs HTTP.
//!
//! Authentication, connection reuse and timeouts belong to the
//! [`Transport`] implementation. [`crate::JiraClient`] is the bundled one.

use std::fmt;

use crate::error::Result;

/// HTTP method of an [`ApiRequest`]; the metadata endpoints are read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
        }
    }
}

/// Request relative to the Jira base URL (e.g. `rest/api/2/project/PC`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn extend_query<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query.extend(pairs);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Path followed by the percent-encoded query string, if any
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Successful response with its raw body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Executes requests against a Jira instance.
///
/// Implementations return `Err` for network failures and non-2xx statuses.
pub trait Transport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_query() {
        let request = ApiRequest::get("rest/api/2/project/PC");

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.path_and_query(), "rest/api/2/project/PC");
    }

    #[test]
    fn test_query_is_encoded_in_order() {
        let request = ApiRequest::get("rest/api/2/project/PC")
            .query("expand", "projects.issuetypes.fields")
            .extend_query(vec![("projectKeys".to_string(), "PC,OPS & more".to_string())]);

        assert_eq!(request.query_pairs().len(), 2);
        assert_eq!(
            request.path_and_query(),
            "rest/api/2/project/PC?expand=projects.issuetypes.fields&projectKeys=PC%2COPS%20%26%20more"
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
    }
}
