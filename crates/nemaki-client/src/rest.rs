//! NemakiWare REST endpoints: repositories, ACLs, users and groups.

use nemaki_core::principal::{Acl, Group, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::nemaki_result;
use crate::{ClientError, CmisClient};

/// One entry of `/rest/all/repositories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CmisClient {
    /// Repositories hosted by the server. Does not require a session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, ClientError> {
        let data = self.get_json(&self.rest_all_url("repositories")).await?;
        Ok(parse_repositories(&data))
    }

    /// ACL of one object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the envelope reports
    /// failure.
    pub async fn get_acl(&self, object_id: &str) -> Result<Acl, ClientError> {
        let url = self.rest_repo_url(&format!("node/{}/acl", urlencoding::encode(object_id)));
        let data = nemaki_result(self.get_json(&url).await?)?;
        let acl = data
            .pointer("/result/acl")
            .or_else(|| data.get("acl"))
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        serde_json::from_value(acl).map_err(|e| ClientError::Parse(format!("acl: {e}")))
    }

    /// # Errors
    ///
    /// See [`Self::get_acl`].
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let data = nemaki_result(self.get_json(&self.rest_repo_url("user/list")).await?)?;
        decode_list(&data, "users")
    }

    /// # Errors
    ///
    /// See [`Self::get_acl`].
    pub async fn list_groups(&self) -> Result<Vec<Group>, ClientError> {
        let data = nemaki_result(self.get_json(&self.rest_repo_url("group/list")).await?)?;
        decode_list(&data, "groups")
    }
}

/// Accepts `[{id, ...}]`, `{repositories: [{id}]}` and `{repositories: ["id"]}`.
fn parse_repositories(data: &Value) -> Vec<RepositorySummary> {
    let entries = match data {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("repositories")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(id) => Some(RepositorySummary {
                id: id.clone(),
                name: None,
                description: None,
            }),
            other => serde_json::from_value(other.clone()).ok(),
        })
        .collect()
}

fn decode_list<T: serde::de::DeserializeOwned>(data: &Value, key: &str) -> Result<Vec<T>, ClientError> {
    match data.get(key) {
        Some(list) => serde_json::from_value(list.clone())
            .map_err(|e| ClientError::Parse(format!("{key}: {e}"))),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn repositories_accept_both_shapes() {
        let from_array = parse_repositories(&json!([{"id": "bedroom", "name": "Bedroom"}, {"name": "no id"}]));
        assert_eq!(from_array.len(), 1);
        assert_eq!(from_array[0].name.as_deref(), Some("Bedroom"));

        let from_ids = parse_repositories(&json!({"repositories": ["bedroom", "canopy"]}));
        let ids: Vec<&str> = from_ids.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["bedroom", "canopy"]);

        assert!(parse_repositories(&json!("nope")).is_empty());
    }
}
