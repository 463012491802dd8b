use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    collaborator::{CollaboratorRecord, PermissionLevel, USER_TYPE},
    error::ConvertError,
};

/// The content of a `<repository>.yaml` file:
/// repository name → collaborator login → entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CollabYamlDocument(BTreeMap<String, BTreeMap<String, CollaboratorEntry>>);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CollaboratorEntry {
    pub permissions: PermissionLevel,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    User,
}

impl CollabYamlDocument {
    /// Build the document of `repository` from its raw collaborator records.
    ///
    /// Records that are not of type "User" are ignored.
    /// Returns `None` if no record is kept.
    ///
    /// # Errors
    /// Any "User" record that can not be read as a [`CollaboratorRecord`]
    /// (missing login, missing permission flag...) invalidates the whole document.
    pub fn build(repository: &str, records: &[Value]) -> Result<Option<Self>, ConvertError> {
        let mut collaborators = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            if !is_user(record) {
                log::debug!("Skipping collaborator #{index} of {repository}, not a user");
                continue;
            }
            if record.get("login").is_none() {
                return Err(ConvertError::schema(repository, index, "missing field `login`"));
            }
            let collab = CollaboratorRecord::deserialize(record)
                .map_err(|err| ConvertError::schema(repository, index, err))?;
            log::debug!(
                "{repository}: {} {} has {:?}",
                collab.kind,
                collab.login,
                collab.permissions
            );
            let entry = CollaboratorEntry {
                permissions: PermissionLevel::resolve(&collab.permissions),
                kind: EntryKind::User,
            };
            if collaborators.insert(collab.login, entry).is_some() {
                log::warn!("Collaborator #{index} of {repository} is listed more than once");
            }
        }
        if collaborators.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self(BTreeMap::from([(
            repository.to_string(),
            collaborators,
        )]))))
    }

    /// The repository described by this document.
    pub fn repository(&self) -> &str {
        self.0.keys().next().map(String::as_str).unwrap_or_default()
    }

    pub fn collaborators(&self) -> impl Iterator<Item = (&str, &CollaboratorEntry)> {
        self.0
            .values()
            .flatten()
            .map(|(login, entry)| (login.as_str(), entry))
    }
}

fn is_user(record: &Value) -> bool {
    record.get("type").and_then(Value::as_str) == Some(USER_TYPE)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn user(login: &str, push: bool, pull: bool) -> Value {
        json!({
            "login": login,
            "type": "User",
            "permissions": {"admin": false, "maintain": false, "push": push, "triage": false, "pull": pull},
        })
    }

    #[test]
    fn single_user() {
        let doc = CollabYamlDocument::build("repo-x", &[user("alice", true, true)])
            .unwrap()
            .unwrap();
        assert_eq!(doc.repository(), "repo-x");
        let yaml = serde_yaml::to_value(&doc).unwrap();
        let expected: serde_yaml::Value = serde_yaml::from_str(
            "repo-x:\n  alice:\n    type: user\n    permissions: write\n",
        )
        .unwrap();
        assert_eq!(yaml, expected);
    }

    #[test]
    fn all_users_are_kept() {
        let records = [
            user("carol", false, true),
            user("alice", true, true),
            user("bob", false, false),
        ];
        let doc = CollabYamlDocument::build("repo", &records).unwrap().unwrap();
        let got: Vec<_> = doc
            .collaborators()
            .map(|(login, entry)| (login, entry.permissions))
            .collect();
        assert_eq!(
            got,
            vec![
                ("alice", PermissionLevel::Write),
                ("bob", PermissionLevel::Unset),
                ("carol", PermissionLevel::Read),
            ]
        );
    }

    #[test]
    fn non_users_are_skipped() {
        let records = [
            json!({"login": "dependabot", "type": "Bot", "permissions": {}}),
            json!({"login": "w3c", "type": "Organization"}),
            json!({"login": "untyped"}),
            json!("not even an object"),
            user("alice", false, true),
        ];
        let doc = CollabYamlDocument::build("repo", &records).unwrap().unwrap();
        let logins: Vec<_> = doc.collaborators().map(|(login, _)| login).collect();
        assert_eq!(logins, vec!["alice"]);
    }

    #[test]
    fn only_bots() {
        let records = [json!({"login": "bob", "type": "Bot", "permissions": {"admin": true}})];
        assert!(CollabYamlDocument::build("repo-y", &records).unwrap().is_none());
        assert!(CollabYamlDocument::build("repo-y", &[]).unwrap().is_none());
    }

    #[test]
    fn missing_login_abandons_document() {
        let records = [
            user("alice", true, true),
            json!({"type": "User", "permissions": {"admin": true, "maintain": true, "push": true, "triage": true, "pull": true}}),
        ];
        let err = CollabYamlDocument::build("repo", &records).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::SchemaViolation { index: 1, ref reason, .. } if reason.contains("login")
        ));
    }

    #[test]
    fn missing_flag_abandons_document() {
        let records = [json!({
            "login": "alice",
            "type": "User",
            "permissions": {"admin": false, "maintain": false, "triage": false, "pull": true},
        })];
        let err = CollabYamlDocument::build("repo", &records).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::SchemaViolation { index: 0, ref reason, .. } if reason.contains("push")
        ));
    }

    #[test]
    fn duplicate_login_last_wins() {
        let records = [user("alice", false, true), user("alice", true, true)];
        let doc = CollabYamlDocument::build("repo", &records).unwrap().unwrap();
        let got: Vec<_> = doc.collaborators().collect();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].1.permissions, PermissionLevel::Write);
    }
}
