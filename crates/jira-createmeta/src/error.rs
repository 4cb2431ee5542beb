use thiserror::Error;

use crate::fields::FieldError;

#[derive(Error, Debug)]
pub enum CreateMetaError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Field schema error: {0}")]
    Field(#[from] FieldError),

    #[error("IssueType with name {0} not found")]
    NotFound(String),

    #[error("Field metadata at index {index} has no string fieldId")]
    MalformedField { index: usize },

    #[error("Required fields missing: {}", .missing.join(", "))]
    MissingRequiredFields { missing: Vec<String> },

    #[error("Fields not available in Jira: {}", .unknown.join(", "))]
    UnknownFields { unknown: Vec<String> },
}

impl CreateMetaError {
    /// True for failures raised by the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Unauthorized | Self::Api { .. } | Self::Io(_)
        )
    }

    /// True when a response or field schema did not have the expected shape
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::Field(_) | Self::MalformedField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CreateMetaError>;
