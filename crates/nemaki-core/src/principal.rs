//! Users, groups and access control entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "userId")]
    pub id: String,
    #[serde(default, alias = "userName")]
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "isAdmin")]
    pub admin: bool,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(alias = "groupId")]
    pub id: String,
    #[serde(default, alias = "groupName")]
    pub name: String,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
}

/// One access control entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ace {
    #[serde(alias = "principal")]
    pub principal_id: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default = "default_direct", alias = "isDirect")]
    pub direct: bool,
}

const fn default_direct() -> bool {
    true
}

const fn default_true() -> bool {
    true
}

/// ACL as returned by `/node/{id}/acl`. The server names the entry list
/// `permissions`; both flags default to `true` when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acl {
    #[serde(default, alias = "permissions")]
    pub aces: Vec<Ace>,
    /// Whether the object inherits ACEs from its parent.
    #[serde(default = "default_true", alias = "aclInherited")]
    pub inherited: bool,
    #[serde(default = "default_true")]
    pub is_exact: bool,
}

impl Default for Acl {
    fn default() -> Self {
        Self {
            aces: Vec::new(),
            inherited: true,
            is_exact: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_accepts_rest_aliases() {
        let user: User = serde_json::from_value(json!({
            "userId": "admin",
            "name": "Administrator",
            "isAdmin": true
        }))
        .expect("decode");
        assert_eq!(user.id, "admin");
        assert!(user.admin);
        assert!(user.email.is_none());
    }

    #[test]
    fn ace_defaults_to_direct() {
        let ace: Ace = serde_json::from_value(json!({
            "principalId": "GROUP_EVERYONE",
            "permissions": ["cmis:read"]
        }))
        .expect("decode");
        assert!(ace.direct);
    }

    #[test]
    fn acl_reads_rest_field_names() {
        let acl: Acl = serde_json::from_value(json!({
            "permissions": [
                {"principalId": "admin", "permissions": ["cmis:all"], "direct": true},
                {"principalId": "GROUP_EVERYONE", "permissions": ["cmis:read"], "direct": false}
            ],
            "aclInherited": false
        }))
        .expect("decode");
        assert_eq!(acl.aces.len(), 2);
        assert!(!acl.aces[1].direct);
        assert!(!acl.inherited);
        assert!(acl.is_exact);
    }

    #[test]
    fn group_reads_rest_field_names() {
        let group: Group = serde_json::from_value(json!({
            "groupId": "editors",
            "groupName": "Editors",
            "users": ["alice", "bob"],
            "groups": []
        }))
        .expect("decode");
        assert_eq!(group.name, "Editors");
        assert_eq!(group.users.len(), 2);
    }
}
