//! Caller identity.
//!
//! The host environment supplies an opaque identifier for the entity making
//! the current request. The core never interprets it: authorization is a
//! direct equality comparison between the caller and a record's creator.
//! There are no roles, groups or capabilities.

use std::fmt;

/// Opaque identity of a calling principal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
