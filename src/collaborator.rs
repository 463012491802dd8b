//! I define types to handle the collaborator listings returned by the GitHub API
//! (`GET /repos/{owner}/{repo}/collaborators`).

use serde::{Deserialize, Serialize};

/// The only value of `type` that is kept when converting.
pub const USER_TYPE: &str = "User";

#[derive(Clone, Debug, Deserialize)]
/// JSON structure describing a collaborator of a github repository
pub struct CollaboratorRecord {
    /// The github login of this collaborator
    pub login: String,
    /// The kind of account ("User", "Bot", "Organization"...)
    #[serde(rename = "type")]
    pub kind: String,
    /// The permissions granted to this collaborator
    pub permissions: Permissions,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
/// JSON structure describing the permission flags of a collaborator.
///
/// All five flags are required.
pub struct Permissions {
    pub admin: bool,
    pub maintain: bool,
    pub push: bool,
    pub triage: bool,
    pub pull: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// The effective access tier of a collaborator, as written in the YAML files.
pub enum PermissionLevel {
    Admin,
    Maintain,
    Write,
    Read,
    /// No flag set; serialized as an empty string
    #[serde(rename = "")]
    Unset,
}

impl PermissionLevel {
    /// The first flag set, in decreasing order of privilege, determines the level.
    pub fn resolve(permissions: &Permissions) -> Self {
        if permissions.admin {
            Self::Admin
        } else if permissions.maintain {
            Self::Maintain
        } else if permissions.push || permissions.triage {
            Self::Write
        } else if permissions.pull {
            Self::Read
        } else {
            Self::Unset
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Maintain => "maintain",
            Self::Write => "write",
            Self::Read => "read",
            Self::Unset => "",
        }
    }
}

impl From<&Permissions> for PermissionLevel {
    fn from(permissions: &Permissions) -> Self {
        Self::resolve(permissions)
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
