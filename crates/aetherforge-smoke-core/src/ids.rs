//! Opaque identifiers returned by the application under test.
//!
//! The harness never interprets ids beyond what it needs to build request
//! paths, so both types are thin string wrappers. Parsing rejects values that
//! could not be spliced into a path segment as-is.
//!
//! # Macro-based ID Types
//!
//! `opaque_id_type!` generates the shared trait implementations: serde as a
//! plain string, `FromStr`, `Display`, `Debug`, `AsRef<str>` and the
//! `String` conversions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Artifact ids must be strictly longer than ten characters.
pub const MIN_ARTIFACT_ID_LEN: usize = 11;

/// Errors produced when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The id is empty.
    #[error("identifier is empty")]
    Empty,

    /// The id is shorter than the minimum length.
    #[error("identifier too short: {len} characters, expected at least {min}")]
    TooShort {
        /// Observed length in characters.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// The id contains a character that is not safe in a path segment.
    #[error("identifier contains invalid character {0:?}")]
    InvalidCharacter(char),
}

fn validate_segment(s: &str, min_len: usize) -> Result<(), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if let Some(c) = s
        .chars()
        .find(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control())
    {
        return Err(IdError::InvalidCharacter(c));
    }
    let len = s.chars().count();
    if len < min_len {
        return Err(IdError::TooShort { len, min: min_len });
    }
    Ok(())
}

macro_rules! opaque_id_type {
    ($name:ident, $min_len:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Borrow the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate_segment(s, $min_len)?;
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                validate_segment(&value, $min_len)?;
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id_type!(
    ArtifactId,
    MIN_ARTIFACT_ID_LEN,
    "Identifier of a generated concept-graph artifact.\n\nOwned by the user who generated it; other users must never see it."
);
opaque_id_type!(
    ConceptId,
    1,
    "Identifier of one concept inside an artifact's concept graph."
);
