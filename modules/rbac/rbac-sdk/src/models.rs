use serde::{Deserialize, Serialize};

/// One permission granted by a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// e.g. `node_groups`, `tasks`, `environment`
    pub object_type: String,
    /// e.g. `view`, `run`, `deploy_code`
    pub action: String,
    /// Instance identifier, `*` for every instance
    pub instance: String,
}

impl Permission {
    #[must_use]
    pub fn new(
        object_type: impl Into<String>,
        action: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            action: action.into(),
            instance: instance.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub display_name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
    pub user_ids: Vec<String>,
    pub group_ids: Vec<String>,
}

/// Body of a role creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRole {
    pub display_name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
    pub user_ids: Vec<String>,
    pub group_ids: Vec<String>,
}

/// A local user, remote user or remote group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct User {
    pub id: String,
    pub login: String,
    pub email: String,
    pub display_name: String,
    pub role_ids: Vec<u64>,
    pub inherited_role_ids: Vec<u64>,
    pub group_ids: Vec<String>,
    pub is_group: bool,
    pub is_remote: bool,
    pub is_superuser: bool,
    pub is_revoked: bool,
    /// ISO-8601 timestamp, absent for users that never logged in
    #[serde(default)]
    pub last_login: Option<String>,
}
