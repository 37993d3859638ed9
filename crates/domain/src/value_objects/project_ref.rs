//! ProjectRef - classified project identity
//!
//! An identifier is either a remote token (24 hexadecimal characters, the
//! format of the remote API's object ids) or the path of a local project
//! that exists at classification time. There is no third state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StorageType;
use crate::errors::{ProjectError, ProjectResult};
use crate::repositories::LocalProjectStore;

const REMOTE_TOKEN_LEN: usize = 24;

/// Identifier of a project held by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteToken(String);

impl RemoteToken {
    /// Parse a remote token, returning `None` when the format does not match
    pub fn parse(value: &str) -> Option<Self> {
        ProjectRef::is_remote_id(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Path of a project file in the local store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalPath(String);

impl LocalPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Project identity together with the backend it resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    Remote(RemoteToken),
    Local(LocalPath),
}

impl ProjectRef {
    /// Classify a raw identifier.
    ///
    /// Remote tokens are recognised by format alone, regardless of what the
    /// local file system holds. Anything else must be an existing local path.
    pub fn classify(id: &str, local: &dyn LocalProjectStore) -> ProjectResult<Self> {
        if let Some(token) = RemoteToken::parse(id) {
            return Ok(ProjectRef::Remote(token));
        }

        if local.exists(id) {
            Ok(ProjectRef::Local(LocalPath(id.to_string())))
        } else {
            Err(ProjectError::InvalidIdentifier(id.to_string()))
        }
    }

    /// Case-insensitive check for a 24 character hexadecimal token
    pub fn is_remote_id(value: &str) -> bool {
        value.len() == REMOTE_TOKEN_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            ProjectRef::Remote(_) => StorageType::Remote,
            ProjectRef::Local(_) => StorageType::Local,
        }
    }

    /// The raw identifier this reference was classified from
    pub fn as_str(&self) -> &str {
        match self {
            ProjectRef::Remote(token) => token.as_str(),
            ProjectRef::Local(path) => path.as_str(),
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.storage_type(), self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockLocalProjectStore;
    use proptest::prelude::*;

    fn store_reporting(exists: bool) -> MockLocalProjectStore {
        let mut store = MockLocalProjectStore::new();
        store.expect_exists().return_const(exists);
        store
    }

    #[test]
    fn test_mongo_style_id_is_remote() {
        let store = store_reporting(false);
        let reference = ProjectRef::classify("507f1f77bcf86cd799439011", &store).unwrap();
        assert_eq!(reference.storage_type(), StorageType::Remote);
        assert_eq!(reference.as_str(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_uppercase_hex_is_remote() {
        assert!(ProjectRef::is_remote_id("507F1F77BCF86CD799439011"));
    }

    #[test]
    fn test_wrong_length_or_alphabet_is_not_remote() {
        assert!(!ProjectRef::is_remote_id("507f1f77bcf86cd79943901"));
        assert!(!ProjectRef::is_remote_id("507f1f77bcf86cd7994390111"));
        assert!(!ProjectRef::is_remote_id("507f1f77bcf86cd79943901g"));
        assert!(!ProjectRef::is_remote_id(""));
    }

    #[test]
    fn test_existing_path_is_local() {
        let mut store = MockLocalProjectStore::new();
        store
            .expect_exists()
            .withf(|path| path == "./my-project")
            .times(1)
            .return_const(true);

        let reference = ProjectRef::classify("./my-project", &store).unwrap();
        assert_eq!(reference, ProjectRef::Local(LocalPath("./my-project".to_string())));
    }

    #[test]
    fn test_missing_path_is_invalid() {
        let store = store_reporting(false);
        let err = ProjectRef::classify("./my-project", &store).unwrap_err();
        assert_eq!(err, ProjectError::InvalidIdentifier("./my-project".to_string()));
    }

    #[test]
    fn test_remote_token_never_consults_local_store() {
        let mut store = MockLocalProjectStore::new();
        store.expect_exists().never();
        assert!(ProjectRef::classify("aaaaaaaaaaaaaaaaaaaaaaaa", &store).is_ok());
    }

    proptest! {
        #[test]
        fn prop_hex_tokens_are_remote_regardless_of_fs(
            token in "[a-fA-F0-9]{24}",
            exists in any::<bool>(),
        ) {
            let store = store_reporting(exists);
            let reference = ProjectRef::classify(&token, &store).unwrap();
            prop_assert_eq!(reference.storage_type(), StorageType::Remote);
        }

        #[test]
        fn prop_non_tokens_are_local_iff_they_exist(
            id in "[g-z./_-]{1,40}",
            exists in any::<bool>(),
        ) {
            let store = store_reporting(exists);
            match ProjectRef::classify(&id, &store) {
                Ok(reference) => {
                    prop_assert!(exists);
                    prop_assert_eq!(reference.storage_type(), StorageType::Local);
                }
                Err(err) => {
                    prop_assert!(!exists);
                    prop_assert_eq!(err, ProjectError::InvalidIdentifier(id.clone()));
                }
            }
        }
    }
}
