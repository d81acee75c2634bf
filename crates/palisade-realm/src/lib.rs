//! Security realm contract for palisade.
//!
//! A **realm** is a pluggable security component that answers
//! authorization questions — role membership and permission coverage —
//! against one application-specific data source. Realms usually have a
//! 1-to-1 correspondence with a data source such as a relational
//! database, a directory service, or a flat file; implementations use
//! data-source-specific APIs to answer the queries while this crate
//! pins down the semantics every implementation shares.
//!
//! # Two Relations, One Facade
//!
//! ```text
//! Effective Answer = RoleMembership(stored) | PermissionImplication(modeled)
//! ```
//!
//! | Question | Relation | Operations |
//! |----------|----------|------------|
//! | "is alice an admin?" | binary membership, owned by the data source | `has_role`, `has_roles`, `has_all_roles` |
//! | "may bob read file 42?" | implication preorder, owned by the permission model | `is_permitted`, `is_permitted_each`, `is_permitted_all` |
//! | "stop bob unless permitted" | enforcement over implication | `check_permission`, `check_permissions` |
//!
//! # Crate Architecture
//!
//! ```text
//! palisade-types  (SubjectId, RoleId)
//!       ↑
//! palisade-realm  (Permission, Realm, AuthorizationError)  ◄── THIS CRATE
//!       ↑
//! (application realms + a security-manager holding them by name)
//! ```
//!
//! # Design Principles
//!
//! - **Trait definitions here, implementations in consumers** — data
//!   sources plug in behind [`Realm`] without the owning manager
//!   knowing their concrete type
//! - **Absence is `false`, not failure** — boolean queries never error;
//!   only the `check_*` enforcement wrappers raise
//!   [`AuthorizationError`]
//! - **Derived semantics are provided** — batch, aggregate, and
//!   enforcement methods come with the trait so per-index equivalence
//!   and vacuous truth hold for every implementor
//!
//! # Example
//!
//! ```
//! use palisade_realm::testing::FixtureRealm;
//! use palisade_realm::{Realm, WildcardPermission};
//! use palisade_types::SubjectId;
//!
//! let bob = SubjectId::new("bob");
//! let realm = FixtureRealm::new("files")
//!     .grant_permission(&bob, "file:read:*".parse::<WildcardPermission>()?);
//!
//! // Boolean query: branch on it.
//! assert!(realm.is_permitted(&bob, &"file:read:42".parse()?));
//!
//! // Enforcement: hard stop with diagnostic context.
//! let err = realm
//!     .check_permission(&bob, &"file:write:42".parse()?)
//!     .unwrap_err();
//! assert_eq!(err.subject(), "bob");
//! # Ok::<(), palisade_realm::PermissionParseError>(())
//! ```

pub mod error;
pub mod permission;
pub mod realm;
pub mod testing;

pub use error::AuthorizationError;
pub use permission::{Permission, PermissionParseError, WildcardPermission};
pub use realm::Realm;

// Re-export identifier types from palisade_types for convenience
pub use palisade_types::{RoleId, SubjectId};
