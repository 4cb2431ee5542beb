use serde::{Deserialize, Serialize};

use crate::fields::FieldMap;
use crate::models::IssueTypeSummary;

/// Issue type together with the schema of every field it accepts on create.
///
/// `fields` is keyed by field ID (`summary`, `customfield_10806`, ...). Each
/// value is the schema blob Jira returned for that field, holding at least
/// `required` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaIssueType {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub description: String,
    pub icon_url: String,
    pub name: String,
    pub subtask: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    pub fields: FieldMap,
}

impl MetaIssueType {
    /// Empty metadata carrying the identity of `issue_type`
    pub fn from_summary(issue_type: &IssueTypeSummary) -> Self {
        Self {
            self_url: issue_type.self_url.clone(),
            id: issue_type.id.clone(),
            description: issue_type.description.clone(),
            icon_url: issue_type.icon_url.clone(),
            name: issue_type.name.clone(),
            subtask: issue_type.subtask,
            expand: None,
            fields: FieldMap::new(),
        }
    }

    /// Identity of this issue type without its fields
    pub fn summary(&self) -> IssueTypeSummary {
        IssueTypeSummary {
            self_url: self.self_url.clone(),
            id: self.id.clone(),
            description: self.description.clone(),
            icon_url: self.icon_url.clone(),
            name: self.name.clone(),
            subtask: self.subtask,
        }
    }
}
