use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{CreateMetaError, Result};
use crate::models::{IssueTypeSummary, MetaIssueType, MetaProject, QueryOptions};
use crate::transport::{ApiRequest, Transport};

/// Body of the issue type field endpoint
#[derive(Debug, Deserialize)]
struct IssueTypeMetaResponse {
    /// Absent and null both mean no fields
    #[serde(default)]
    values: Option<Vec<Value>>,
}

/// Fetches create-metadata through an injected [`Transport`]
pub struct CreateMetaService<'a, T: Transport + ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> CreateMetaService<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Execute `request` and decode the JSON body
    fn send<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R> {
        let response = self.transport.execute(request)?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Project metadata, including its issue types
    pub fn get_create_meta(&self, project_key: &str) -> Result<MetaProject> {
        self.get_create_meta_with_options(project_key, &QueryOptions::default())
    }

    pub fn get_create_meta_with_options(
        &self,
        project_key: &str,
        options: &QueryOptions,
    ) -> Result<MetaProject> {
        let request = ApiRequest::get(format!(
            "rest/api/2/project/{}",
            urlencoding::encode(project_key)
        ))
        .extend_query(options.to_query_pairs());

        let project: MetaProject = self.send(&request)?;
        debug!(
            project = %project.key,
            issue_types = project.issue_types.len(),
            "fetched create metadata"
        );
        Ok(project)
    }

    /// Field schemas for one issue type of a project
    pub fn get_issue_type_meta(
        &self,
        project_key: &str,
        issue_type: &IssueTypeSummary,
    ) -> Result<MetaIssueType> {
        self.get_issue_type_meta_with_options(project_key, issue_type, &QueryOptions::default())
    }

    /// Field schemas for one issue type, keyed by each blob's `fieldId`.
    ///
    /// Fails with [`CreateMetaError::MalformedField`] when a returned blob is
    /// not an object or has no string `fieldId`.
    pub fn get_issue_type_meta_with_options(
        &self,
        project_key: &str,
        issue_type: &IssueTypeSummary,
        options: &QueryOptions,
    ) -> Result<MetaIssueType> {
        let request = ApiRequest::get(format!(
            "rest/api/2/issue/createmeta/{}/issuetypes/{}",
            urlencoding::encode(project_key),
            urlencoding::encode(&issue_type.id)
        ))
        .extend_query(options.to_query_pairs());

        let content: IssueTypeMetaResponse = self.send(&request)?;

        let mut meta = MetaIssueType::from_summary(issue_type);
        for (index, field) in content.values.unwrap_or_default().into_iter().enumerate() {
            let field_id = field
                .get("fieldId")
                .and_then(Value::as_str)
                .ok_or(CreateMetaError::MalformedField { index })?
                .to_string();
            meta.fields.insert(field_id, field);
        }

        debug!(
            issue_type = %meta.name,
            fields = meta.fields.len(),
            "fetched issue type metadata"
        );
        Ok(meta)
    }
}
