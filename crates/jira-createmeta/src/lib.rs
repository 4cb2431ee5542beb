//! Helpers for Jira's create-issue metadata endpoints.
//!
//! Fetch a project's issue types, fetch the field schema of one issue type,
//! and check a candidate set of fields against it before creating an issue.

pub mod client;
pub mod createmeta;
pub mod error;
pub mod fields;
pub mod models;
pub mod transport;
mod validate;


pub use client::JiraClient;
pub use createmeta::CreateMetaService;
pub use error::{CreateMetaError, Result};
pub use fields::{FieldError, FieldMap};
pub use models::*;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use validate::FieldNames;
