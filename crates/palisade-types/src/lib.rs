//! Core identifier types for palisade.
//!
//! This crate provides the identity primitives shared by every palisade
//! realm: who is being checked ([`SubjectId`]) and which role is being
//! asked about ([`RoleId`]).
//!
//! # Crate Architecture
//!
//! ```text
//! palisade-types   : SubjectId, RoleId          ◄── HERE
//!       ↑
//! palisade-realm   : Permission, Realm, AuthorizationError
//!       ↑
//! (application realms: relational, directory, file-backed, ...)
//! ```
//!
//! # Why a Separate Crate?
//!
//! Identifiers are pure identity with no authorization logic:
//!
//! - **Data-source bindings** need the ID types without pulling in the
//!   permission model
//! - **No circular dependency**: the realm contract depends on
//!   identity, never the reverse
//! - **Serialization**: first-class serde support so identifiers can
//!   cross process boundaries unchanged
//!
//! # Identifier Design
//!
//! Both types wrap application-assigned strings rather than generated
//! UUIDs: a realm fronts an *existing* data source, so the data source
//! owns identifier assignment and palisade only carries the keys.
//!
//! # Example
//!
//! ```
//! use palisade_types::{RoleId, SubjectId};
//!
//! let subject = SubjectId::new("user-4217");
//! let role = RoleId::new("auditor");
//!
//! assert_eq!(subject.as_str(), "user-4217");
//! assert_eq!(role.as_str(), "auditor");
//! ```

mod id;

pub use id::{RoleId, SubjectId};
