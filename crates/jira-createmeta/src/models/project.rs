use serde::{Deserialize, Serialize};

use crate::error::{CreateMetaError, Result};

/// Project as returned by the create-metadata project endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetaProject {
    /// Self URL
    #[serde(rename = "self")]
    pub self_url: String,
    /// Internal ID
    pub id: String,
    /// Project key (e.g., "PROJ")
    pub key: String,
    /// Project name
    pub name: String,
    /// Issue types available in the project, in server order
    #[serde(rename = "issuetypes")]
    pub issue_types: Vec<IssueTypeSummary>,
}

/// Issue type identity, enough to resolve a name to an ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueTypeSummary {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub description: String,
    pub icon_url: String,
    pub name: String,
    /// Whether this is a subtask type
    pub subtask: bool,
}

impl MetaProject {
    /// Find an issue type by name, ignoring case.
    ///
    /// Characters are compared one by one after case folding, so "ΣΑΣ",
    /// "σασ" and "σας" all match. When several issue types share a name
    /// the first one in `issue_types` order is returned.
    pub fn issue_type_with_name(&self, name: &str) -> Result<&IssueTypeSummary> {
        self.issue_types
            .iter()
            .find(|issue_type| eq_fold(&issue_type.name, name))
            .ok_or_else(|| CreateMetaError::NotFound(name.to_string()))
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.chars().flat_map(fold_char).eq(b.chars().flat_map(fold_char))
}

/// Simple case fold: round trip through the single-char uppercase form so
/// variants like final sigma and the Kelvin sign land on one lowercase char.
fn fold_char(c: char) -> std::char::ToLowercase {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u.to_lowercase(),
        _ => c.to_lowercase(),
    }
}
