//! Testing fixture for [`Realm`] implementations and consumers.
//!
//! Provides [`FixtureRealm`], an in-memory realm populated through a
//! builder API. It is the contract's reference implementor: only the
//! three required operations are defined, so every derived batch,
//! aggregate, and enforcement method exercises the provided defaults.
//!
//! # Example
//!
//! ```
//! use palisade_realm::testing::FixtureRealm;
//! use palisade_realm::{Realm, WildcardPermission};
//! use palisade_types::{RoleId, SubjectId};
//!
//! let bob = SubjectId::new("bob");
//! let realm = FixtureRealm::new("fixture")
//!     .grant_role(&bob, &RoleId::new("operator"))
//!     .grant_permission(&bob, "file:read:*".parse::<WildcardPermission>()?);
//!
//! assert!(realm.has_role(&bob, &RoleId::new("operator")));
//! assert!(realm.is_permitted(&bob, &"file:read:42".parse()?));
//! assert!(!realm.is_permitted(&bob, &"file:write:42".parse()?));
//! # Ok::<(), palisade_realm::PermissionParseError>(())
//! ```

use crate::{Permission, Realm};
use palisade_types::{RoleId, SubjectId};
use std::collections::{HashMap, HashSet};

/// In-memory [`Realm`] for tests and examples.
///
/// Role memberships and permission grants live in plain maps; the
/// fixture is immutable once built, matching the contract's
/// stateless-per-call model.
#[derive(Debug)]
pub struct FixtureRealm<P> {
    /// Realm name, fixed at construction.
    name: String,
    /// Role memberships per subject.
    roles: HashMap<SubjectId, HashSet<RoleId>>,
    /// Permission grants per subject.
    grants: HashMap<SubjectId, Vec<P>>,
}

impl<P: Permission> FixtureRealm<P> {
    /// Creates an empty fixture realm with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: HashMap::new(),
            grants: HashMap::new(),
        }
    }

    /// Records `subject` as a member of `role`.
    #[must_use]
    pub fn grant_role(mut self, subject: &SubjectId, role: &RoleId) -> Self {
        self.roles
            .entry(subject.clone())
            .or_default()
            .insert(role.clone());
        self
    }

    /// Associates `permission` with `subject`.
    #[must_use]
    pub fn grant_permission(mut self, subject: &SubjectId, permission: P) -> Self {
        self.grants
            .entry(subject.clone())
            .or_default()
            .push(permission);
        self
    }
}

impl<P: Permission> Realm for FixtureRealm<P> {
    type Permission = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn has_role(&self, subject: &SubjectId, role: &RoleId) -> bool {
        self.roles
            .get(subject)
            .is_some_and(|held| held.contains(role))
    }

    fn is_permitted(&self, subject: &SubjectId, permission: &Self::Permission) -> bool {
        self.grants
            .get(subject)
            .is_some_and(|granted| granted.iter().any(|grant| grant.implies(permission)))
    }
}
