//! Enforcement failure type.
//!
//! [`AuthorizationError`] is raised only by the enforcement operations
//! ([`Realm::check_permission`](crate::Realm::check_permission) and
//! [`Realm::check_permissions`](crate::Realm::check_permissions)).
//! Boolean queries represent a missing grant as `false`, never as an
//! error; data-source failures (connectivity, malformed records) belong
//! to the implementing realm's own error channel and must not be
//! translated into this type.

use thiserror::Error;

/// Failure signal from enforcement operations.
///
/// Carries enough context for an actionable diagnostic: the subject
/// that was checked and the canonical text of every permission that was
/// not covered by the subject's grants.
///
/// # Example
///
/// ```
/// use palisade_realm::AuthorizationError;
///
/// let err = AuthorizationError::PermissionDenied {
///     subject: "bob".to_string(),
///     permission: "file:write:42".to_string(),
/// };
///
/// assert_eq!(err.subject(), "bob");
/// assert!(err.to_string().contains("file:write:42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// A single-permission check failed.
    #[error("subject '{subject}' is not permitted '{permission}'")]
    PermissionDenied {
        /// The subject that was checked.
        subject: String,
        /// Canonical text of the denied permission.
        permission: String,
    },

    /// A multi-permission check failed.
    ///
    /// `denied` lists **every** permission the subject lacked, in the
    /// order they appeared in the checked collection, so callers can
    /// report the complete gap rather than the first miss.
    #[error(
        "subject '{subject}' lacks {} of {checked} required permissions: [{}]",
        .denied.len(),
        .denied.join(", ")
    )]
    PermissionsDenied {
        /// The subject that was checked.
        subject: String,
        /// How many permissions were checked in total.
        checked: usize,
        /// Canonical text of each denied permission, in input order.
        denied: Vec<String>,
    },
}

impl AuthorizationError {
    /// Returns the subject identifier the failed check was about.
    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::PermissionDenied { subject, .. } | Self::PermissionsDenied { subject, .. } => {
                subject
            }
        }
    }

    /// Returns the canonical text of each denied permission.
    #[must_use]
    pub fn denied(&self) -> Vec<&str> {
        match self {
            Self::PermissionDenied { permission, .. } => vec![permission.as_str()],
            Self::PermissionsDenied { denied, .. } => denied.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_display() {
        let err = AuthorizationError::PermissionDenied {
            subject: "bob".to_string(),
            permission: "file:write:42".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("bob"), "got: {msg}");
        assert!(msg.contains("file:write:42"), "got: {msg}");
        assert_eq!(err.subject(), "bob");
        assert_eq!(err.denied(), vec!["file:write:42"]);
    }

    #[test]
    fn permissions_denied_display_lists_every_miss() {
        let err = AuthorizationError::PermissionsDenied {
            subject: "bob".to_string(),
            checked: 3,
            denied: vec!["file:write:42".to_string(), "file:delete:42".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains("2 of 3"), "got: {msg}");
        assert!(msg.contains("file:write:42"), "got: {msg}");
        assert!(msg.contains("file:delete:42"), "got: {msg}");
        assert_eq!(err.denied().len(), 2);
    }

    #[test]
    fn subject_accessor_covers_both_variants() {
        let single = AuthorizationError::PermissionDenied {
            subject: "alice".to_string(),
            permission: "a".to_string(),
        };
        let multi = AuthorizationError::PermissionsDenied {
            subject: "alice".to_string(),
            checked: 1,
            denied: vec!["a".to_string()],
        };

        assert_eq!(single.subject(), "alice");
        assert_eq!(multi.subject(), "alice");
    }
}
