//! Thing identifiers
//!
//! Every object handed to the registry is keyed by a `ThingId`. Objects that
//! need to refer to one another store `ThingId` values instead of owning
//! references, so links between objects never form ownership cycles.

use crate::error::CodexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a registered object
///
/// A ThingId is a wrapper around a UUID v4. Uniqueness is probabilistic:
/// nothing checks for collisions, and the space is large enough that none
/// is expected over the life of a process.
///
/// The canonical string form is the lowercase hyphenated UUID
/// (`xxxxxxxx-xxxx-4xxx-xxxx-xxxxxxxxxxxx`), which is also what `Display`
/// produces and what the registry listing prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThingId(Uuid);

impl ThingId {
    /// Create a new random ThingId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ThingId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a ThingId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the raw bytes of this ThingId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for ThingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ThingId {
    type Err = CodexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s).ok_or_else(|| CodexError::InvalidId(s.to_string()))
    }
}

impl From<Uuid> for ThingId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
