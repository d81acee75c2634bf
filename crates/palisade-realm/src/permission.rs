//! Permission model: the implication relation and a wildcard
//! implementation.
//!
//! A [`Permission`] is a capability descriptor. The only operation the
//! realm layer needs from it is *implication*: does a stored grant
//! cover a requested action? That relation is supplied by the
//! permission model itself — realms evaluate membership against it but
//! never compute it.
//!
//! # Architecture
//!
//! ```text
//! Permission trait (implies)        ← contract (THIS MODULE)
//!          │
//!          ├── WildcardPermission   ← colon-delimited model (THIS MODULE)
//!          │
//!          └── (application models: URL patterns, row-level grants, ...)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// A capability descriptor participating in an implication relation.
///
/// Implication is a **preorder**: reflexive (`p.implies(p)`) and
/// transitive (`p.implies(q)` and `q.implies(r)` give `p.implies(r)`).
/// It is *not* symmetric — a broad grant implies a narrow request, not
/// the other way around.
///
/// The `Display` bound exists so enforcement errors can name the denied
/// permission in diagnostics; render the canonical descriptor text.
///
/// # Example
///
/// ```
/// use palisade_realm::{Permission, WildcardPermission};
///
/// let grant: WildcardPermission = "file:read:*".parse()?;
/// let request: WildcardPermission = "file:read:42".parse()?;
///
/// assert!(grant.implies(&request));
/// assert!(!request.implies(&grant));
/// # Ok::<(), palisade_realm::PermissionParseError>(())
/// ```
pub trait Permission: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Returns `true` if anything granted by `self` covers `other`.
    fn implies(&self, other: &Self) -> bool;
}

// ─── Wildcard model ─────────────────────────────────────────────────

/// Errors from parsing a wildcard permission descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionParseError {
    /// The descriptor was empty or all whitespace.
    #[error("permission descriptor is empty")]
    Empty,

    /// A colon-delimited part contained no tokens.
    #[error("permission '{descriptor}' has an empty part at position {index}")]
    EmptyPart {
        /// The offending descriptor.
        descriptor: String,
        /// Zero-based index of the empty part.
        index: usize,
    },
}

/// One colon-delimited part of a [`WildcardPermission`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// `*` — matches any token set.
    Any,
    /// An explicit, comma-separated token set.
    Tokens(BTreeSet<String>),
}

impl Part {
    fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns `true` if every token `other` names is granted by `self`.
    fn covers(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Any, _) => true,
            (Self::Tokens(_), Self::Any) => false,
            (Self::Tokens(mine), Self::Tokens(theirs)) => theirs.is_subset(mine),
        }
    }

    fn canonical(&self) -> String {
        match self {
            Self::Any => "*".to_string(),
            Self::Tokens(tokens) => tokens.iter().cloned().collect::<Vec<_>>().join(","),
        }
    }
}

/// A colon-delimited permission descriptor with wildcard support.
///
/// The descriptor is a sequence of parts separated by `:`; each part is
/// either `*` or a comma-separated set of tokens. Examples:
///
/// - `file:read:42` — read file 42
/// - `file:read,write:42` — read or write file 42
/// - `file:read:*` — read any file
/// - `file` — anything under `file`
///
/// # Implication Rules
///
/// A grant implies a request when, part by part:
///
/// 1. `*` in the grant covers any request part
/// 2. an explicit grant part covers a request part whose tokens are a
///    subset of the grant's tokens
/// 3. a grant with **fewer** parts than the request leaves the tail
///    unconstrained (`file:read` implies `file:read:42`)
/// 4. a grant with **more** parts than the request implies it only if
///    every surplus part is `*` (`file:read:*` implies `file:read`)
///
/// Tokens are compared case-sensitively after whitespace trimming.
///
/// # Example
///
/// ```
/// use palisade_realm::{Permission, WildcardPermission};
///
/// let grant: WildcardPermission = "file:read,write".parse()?;
///
/// assert!(grant.implies(&"file:read:42".parse()?));
/// assert!(grant.implies(&"file:write".parse()?));
/// assert!(!grant.implies(&"file:delete".parse()?));
/// assert!(!grant.implies(&"printer:read".parse()?));
/// # Ok::<(), palisade_realm::PermissionParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WildcardPermission {
    /// Canonical descriptor text (tokens trimmed and sorted).
    source: String,
    /// Parsed parts, outermost first.
    parts: Vec<Part>,
}

impl WildcardPermission {
    /// Parses a descriptor into a [`WildcardPermission`].
    ///
    /// # Errors
    ///
    /// Returns [`PermissionParseError`] if the descriptor is empty or
    /// any part has no tokens (`"file::42"`, `"file:read,"`).
    ///
    /// # Example
    ///
    /// ```
    /// use palisade_realm::WildcardPermission;
    ///
    /// assert!(WildcardPermission::try_new("file:read:*").is_ok());
    /// assert!(WildcardPermission::try_new("").is_err());
    /// assert!(WildcardPermission::try_new("file::42").is_err());
    /// ```
    pub fn try_new(descriptor: impl AsRef<str>) -> Result<Self, PermissionParseError> {
        let descriptor = descriptor.as_ref().trim();
        if descriptor.is_empty() {
            return Err(PermissionParseError::Empty);
        }

        let mut parts = Vec::new();
        for (index, raw) in descriptor.split(':').enumerate() {
            let raw = raw.trim();
            if raw == "*" {
                parts.push(Part::Any);
                continue;
            }

            let tokens: BTreeSet<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if tokens.is_empty() {
                return Err(PermissionParseError::EmptyPart {
                    descriptor: descriptor.to_string(),
                    index,
                });
            }
            parts.push(Part::Tokens(tokens));
        }

        let source = parts
            .iter()
            .map(Part::canonical)
            .collect::<Vec<_>>()
            .join(":");
        Ok(Self { source, parts })
    }

    /// Returns the canonical descriptor text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Permission for WildcardPermission {
    fn implies(&self, other: &Self) -> bool {
        for (i, requested) in other.parts.iter().enumerate() {
            match self.parts.get(i) {
                // Grant is shorter than the request: the tail is
                // unconstrained, everything below it is covered.
                None => return true,
                Some(granted) => {
                    if !granted.covers(requested) {
                        return false;
                    }
                }
            }
        }

        // Grant is longer than the request: surplus parts must all be
        // wildcards ("file:read:*" implies "file:read", "file:read:42"
        // does not).
        self.parts[other.parts.len()..].iter().all(Part::is_any)
    }
}

impl FromStr for WildcardPermission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for WildcardPermission {
    type Error = PermissionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<WildcardPermission> for String {
    fn from(permission: WildcardPermission) -> Self {
        permission.source
    }
}

impl std::fmt::Display for WildcardPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
