//! The realm contract.
//!
//! A [`Realm`] is a named, stateless query facade over one
//! application-specific security data source. Implementations translate
//! subject/role/permission identifiers into queries against their
//! backing store (relational, directory, file-backed, ...); the derived
//! batch, aggregate, and enforcement semantics are provided here so
//! every implementor inherits the same contract.
//!
//! # Architecture
//!
//! ```text
//! Realm trait (palisade-realm)        ← contract (THIS MODULE)
//!      │
//!      ├── FixtureRealm (testing)     ← in-memory reference impl
//!      │
//!      └── (application realms: SQL, LDAP, flat-file, ...)
//! ```
//!
//! A security-manager collaborator holds realms keyed by [`name`]
//! (`Realm::name`) and routes checks to whichever realm(s) a subject's
//! context selects; aggregation across realms is the manager's concern,
//! not specified here.
//!
//! [`name`]: Realm::name

use crate::{AuthorizationError, Permission};
use palisade_types::{RoleId, SubjectId};

/// A named, stateless facade answering role and permission questions
/// against one security data source.
///
/// Only three operations touch the data source: [`name`](Self::name),
/// [`has_role`](Self::has_role), and [`is_permitted`](Self::is_permitted).
/// Everything else is derived from them, though implementations may
/// override the batch methods with a single combined query as long as
/// per-index equivalence with the single-item operations is preserved.
///
/// # Contract
///
/// - Unknown subjects and roles resolve to `false`, never an error.
/// - Batch outputs have the same length and positional order as their
///   input slice.
/// - "all" aggregates over an empty slice are vacuously `true`.
/// - Only the `check_*` operations fail; boolean queries never raise
///   [`AuthorizationError`].
///
/// # Thread Safety
///
/// Realms are invoked concurrently for different (and the same)
/// subjects over their lifetime. Implementations must be `Send + Sync`,
/// hold no call-scoped mutable state, and treat every call as
/// independent. Timeouts and cancellation are caller concerns.
///
/// # Example
///
/// ```
/// use palisade_realm::testing::FixtureRealm;
/// use palisade_realm::{Realm, WildcardPermission};
/// use palisade_types::{RoleId, SubjectId};
///
/// let alice = SubjectId::new("alice");
/// let realm = FixtureRealm::<WildcardPermission>::new("corporate")
///     .grant_role(&alice, &RoleId::new("admin"));
///
/// assert_eq!(realm.name(), "corporate");
/// assert!(realm.has_role(&alice, &RoleId::new("admin")));
/// assert!(!realm.has_role(&alice, &RoleId::new("guest")));
/// ```
pub trait Realm: Send + Sync {
    /// The permission model this realm evaluates grants against.
    type Permission: Permission;

    /// Returns the unique name of this realm.
    ///
    /// The name is assigned at construction, never changes during the
    /// realm's lifetime, and must be unique among the realms registered
    /// with the owning security context.
    fn name(&self) -> &str;

    /// Returns `true` if the data source records `subject` as a member
    /// of `role`.
    ///
    /// Unknown subjects or roles resolve to `false`.
    fn has_role(&self, subject: &SubjectId, role: &RoleId) -> bool;

    /// Returns `true` if some permission already associated with
    /// `subject` in the data source implies `permission`.
    ///
    /// Implication, not equality: a broader grant subsumes a narrower
    /// request (see [`Permission::implies`]).
    fn is_permitted(&self, subject: &SubjectId, permission: &Self::Permission) -> bool;

    /// Checks several roles at once.
    ///
    /// Returns one boolean per role, where element `i` equals
    /// `has_role(subject, &roles[i])`. This is a batching hook to avoid
    /// one data-source round trip per role; overriding implementations
    /// must preserve that per-index equivalence.
    fn has_roles(&self, subject: &SubjectId, roles: &[RoleId]) -> Vec<bool> {
        roles.iter().map(|role| self.has_role(subject, role)).collect()
    }

    /// Returns `true` if `subject` holds every role in `roles`.
    ///
    /// Vacuously `true` for an empty slice. Short-circuits on the first
    /// missing role.
    fn has_all_roles(&self, subject: &SubjectId, roles: &[RoleId]) -> bool {
        roles.iter().all(|role| self.has_role(subject, role))
    }

    /// Checks several permissions at once.
    ///
    /// Returns one boolean per permission, where element `i` equals
    /// `is_permitted(subject, &permissions[i])`. Same batching and
    /// per-index equivalence rules as [`has_roles`](Self::has_roles).
    fn is_permitted_each(
        &self,
        subject: &SubjectId,
        permissions: &[Self::Permission],
    ) -> Vec<bool> {
        permissions
            .iter()
            .map(|permission| self.is_permitted(subject, permission))
            .collect()
    }

    /// Returns `true` if `subject` is permitted every permission in
    /// `permissions`.
    ///
    /// Vacuously `true` for an empty slice. Short-circuits on the first
    /// denial.
    fn is_permitted_all(&self, subject: &SubjectId, permissions: &[Self::Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.is_permitted(subject, permission))
    }

    /// Ensures `subject` is permitted `permission`, failing otherwise.
    ///
    /// Convenience wrapper for callers that need a hard stop rather
    /// than a boolean to branch on.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::PermissionDenied`] when
    /// [`is_permitted`](Self::is_permitted) would return `false`.
    fn check_permission(
        &self,
        subject: &SubjectId,
        permission: &Self::Permission,
    ) -> Result<(), AuthorizationError> {
        if self.is_permitted(subject, permission) {
            return Ok(());
        }

        tracing::debug!(
            realm = self.name(),
            subject = %subject,
            permission = %permission,
            "permission check denied"
        );
        Err(AuthorizationError::PermissionDenied {
            subject: subject.as_str().to_string(),
            permission: permission.to_string(),
        })
    }

    /// Ensures `subject` is permitted every permission in
    /// `permissions`, failing otherwise.
    ///
    /// Unlike [`is_permitted_all`](Self::is_permitted_all) this does
    /// not short-circuit: every permission is evaluated so the error
    /// enumerates the complete denied subset. Succeeds vacuously for an
    /// empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::PermissionsDenied`] listing every
    /// permission not covered by the subject's grants.
    fn check_permissions(
        &self,
        subject: &SubjectId,
        permissions: &[Self::Permission],
    ) -> Result<(), AuthorizationError> {
        let results = self.is_permitted_each(subject, permissions);
        let denied: Vec<String> = permissions
            .iter()
            .zip(&results)
            .filter(|(_, permitted)| !**permitted)
            .map(|(permission, _)| permission.to_string())
            .collect();

        if denied.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            realm = self.name(),
            subject = %subject,
            denied = denied.len(),
            checked = permissions.len(),
            "permissions check denied"
        );
        Err(AuthorizationError::PermissionsDenied {
            subject: subject.as_str().to_string(),
            checked: permissions.len(),
            denied,
        })
    }
}
