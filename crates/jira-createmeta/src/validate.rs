use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::{CreateMetaError, Result};
use crate::models::MetaIssueType;

/// Set of field names a caller intends to send when creating an issue
pub trait FieldNames {
    fn contains_name(&self, name: &str) -> bool;

    fn names(&self) -> Vec<&str>;
}

impl<V> FieldNames for BTreeMap<String, V> {
    fn contains_name(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl<V, S: BuildHasher> FieldNames for HashMap<String, V, S> {
    fn contains_name(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl MetaIssueType {
    /// Required fields as display name → field key.
    ///
    /// if a field returned by the api was:
    ///
    /// ```json
    /// "customfield_10806": {
    ///     "required": true,
    ///     "schema": { "type": "any", "custom": "com.pyxis.greenhopper.jira:gh-epic-link", "customId": 10806 },
    ///     "name": "Epic Link",
    ///     "hasDefaultValue": false,
    ///     "operations": ["set"]
    /// }
    /// ```
    ///
    /// the returned map would have "Epic Link" as the key and
    /// "customfield_10806" as value. Every field must carry a boolean
    /// `required`; a missing one is an error, not `false`.
    pub fn mandatory_fields(&self) -> Result<BTreeMap<String, String>> {
        let mut mandatory = BTreeMap::new();
        for key in self.fields.keys() {
            if self.fields.get_bool_at(&[key.as_str(), "required"])? {
                let name = self.fields.get_str_at(&[key.as_str(), "name"])?;
                mandatory
                    .entry(name.to_string())
                    .or_insert_with(|| key.clone());
            }
        }
        Ok(mandatory)
    }

    /// Every field, required or not, as display name → field key.
    ///
    /// Keys are visited in ascending order. When two fields share a display
    /// name the first wins, unless a later one is required and the recorded
    /// one is not. Each value of [`mandatory_fields`](Self::mandatory_fields)
    /// is therefore also a value here.
    pub fn all_fields(&self) -> Result<BTreeMap<String, String>> {
        let mut all = BTreeMap::new();
        for key in self.fields.keys() {
            let name = self.fields.get_str_at(&[key.as_str(), "name"])?;
            match all.entry(name.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(key.clone());
                }
                Entry::Occupied(mut slot) => {
                    if !self.is_required(slot.get()) && self.is_required(key) {
                        slot.insert(key.clone());
                    }
                }
            }
        }
        Ok(all)
    }

    /// Check that `candidate` names every mandatory field and nothing Jira
    /// does not offer for this issue type.
    ///
    /// Missing mandatory fields are reported before unknown ones.
    pub fn check_complete_and_available<C>(&self, candidate: &C) -> Result<bool>
    where
        C: FieldNames + ?Sized,
    {
        let mandatory = self.mandatory_fields()?;
        let all = self.all_fields()?;

        let missing: Vec<String> = mandatory
            .keys()
            .filter(|name| !candidate.contains_name(name.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(CreateMetaError::MissingRequiredFields { missing });
        }

        let mut unknown: Vec<String> = candidate
            .names()
            .into_iter()
            .filter(|name| !all.contains_key(*name))
            .map(String::from)
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(CreateMetaError::UnknownFields { unknown });
        }

        Ok(true)
    }

    fn is_required(&self, key: &str) -> bool {
        self.fields
            .get_bool_at(&[key, "required"])
            .unwrap_or(false)
    }
}
