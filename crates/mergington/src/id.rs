//! Typed identifiers for the Mergington application.
//!
//! Activity names and participant identifiers are both plain strings on the
//! wire. Wrapping them in marker-typed [`Id`]s keeps the registry API from
//! accepting one where the other is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::RegistryError;

/// A type-safe wrapper around string identifiers.
///
/// The wrapped value is opaque: it is compared by exact string match and is
/// never normalized.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just a string
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(value).map_err(serde::de::Error::custom)
    }
}

impl<T> Id<T> {
    /// Wraps a value without validating it.
    ///
    /// # Example
    /// ```
    /// use mergington::id::ActivityName;
    ///
    /// let name = ActivityName::from_string("Chess Club".to_string());
    /// assert_eq!(name.as_str(), "Chess Club");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Wraps a value, rejecting only the empty string.
    ///
    /// # Example
    /// ```
    /// use mergington::id::ParticipantId;
    ///
    /// assert!(ParticipantId::parse("emma@mergington.edu").is_ok());
    /// assert!(ParticipantId::parse("").is_err());
    /// ```
    pub fn parse(value: impl Into<String>) -> Result<Self, RegistryError> {
        let value = value.into();
        if value.is_empty() {
            return Err(RegistryError::EmptyParticipant);
        }
        Ok(Self::from_string(value))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> PartialEq<str> for Id<T> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<T> PartialEq<&str> for Id<T> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantMarker;

/// The unique name of an activity, also its registry key.
pub type ActivityName = Id<ActivityMarker>;

/// An enrolled person, usually their school email address.
pub type ParticipantId = Id<ParticipantMarker>;
