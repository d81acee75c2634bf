//! Identifier types for palisade.
//!
//! Both identifiers are opaque wrappers around application-assigned
//! strings. Palisade never interprets their contents; a `SubjectId`
//! might be a database primary key, a username, or an LDAP DN, and a
//! `RoleId` whatever the backing data source calls its roles.

use serde::{Deserialize, Serialize};

/// Identifier for a subject (authenticated principal) within a realm's
/// data source.
///
/// A subject identifier is **application-defined**: palisade treats it
/// as an opaque key that is stable and unique within the data source a
/// realm fronts. Two realms may use entirely different identifier
/// schemes for the same human user.
///
/// # Equality Semantics
///
/// `PartialEq`/`Hash` compare the raw string. There is no
/// normalization; `"Alice"` and `"alice"` are different subjects unless
/// the data source says otherwise.
///
/// # Example
///
/// ```
/// use palisade_types::SubjectId;
///
/// let alice = SubjectId::new("alice");
/// assert_eq!(alice.as_str(), "alice");
/// assert_eq!(format!("{alice}"), "subject:alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    /// Creates a new [`SubjectId`] from an application-defined key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subject:{}", self.0)
    }
}

/// Identifier for a role within a realm's security model.
///
/// Role membership is a binary relation owned by the realm's data
/// source: a subject either holds a role or it does not. Palisade
/// does not model role hierarchies; if the data source has them, the
/// realm implementation flattens them when answering membership
/// queries.
///
/// # Example
///
/// ```
/// use palisade_types::RoleId;
///
/// let admin = RoleId::new("admin");
/// assert_eq!(admin.as_str(), "admin");
/// assert_eq!(format!("{admin}"), "role:admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(String);

impl RoleId {
    /// Creates a new [`RoleId`] from an application-defined role name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw role name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "role:{}", self.0)
    }
}

// Tests are in lib.rs as integration tests for public API
