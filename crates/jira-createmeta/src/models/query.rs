/// Optional query parameters accepted by the create-metadata endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Comma separated list of fields to return
    pub fields: Option<String>,
    /// Comma separated list of entities to expand (e.g. "projects.issuetypes.fields")
    pub expand: Option<String>,
    pub properties: Option<String>,
    /// Interpret `fields` as field keys rather than IDs
    pub fields_by_keys: bool,
    pub update_history: bool,
    pub project_keys: Option<String>,
}

impl QueryOptions {
    /// Query pairs using Jira's parameter names. Unset options are left out.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        let strings = [
            ("fields", &self.fields),
            ("expand", &self.expand),
            ("properties", &self.properties),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                pairs.push((name.to_string(), value.clone()));
            }
        }

        if self.fields_by_keys {
            pairs.push(("fieldsByKeys".to_string(), "true".to_string()));
        }
        if self.update_history {
            pairs.push(("updateHistory".to_string(), "true".to_string()));
        }
        if let Some(project_keys) = &self.project_keys {
            pairs.push(("projectKeys".to_string(), project_keys.clone()));
        }

        pairs
    }
}
