//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are caller-chosen codes (e.g. `"E1"`, `"S-042"`). They are
//! stored exactly as given, but lookups compare them case-insensitively.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Common behaviour of textual identifiers.
pub trait Identifier: Clone + Eq + core::hash::Hash + core::fmt::Debug {
    /// The identifier as it was originally supplied.
    fn as_str(&self) -> &str;

    /// Case-insensitive match against a raw lookup key.
    fn matches(&self, key: &str) -> bool {
        eq_ignore_case(self.as_str(), key)
    }
}

/// Compare two strings ignoring case (full Unicode lowercase folding).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Identifier of an inventory item (unique across the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

/// Identifier of a staff member (unique across the directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StaffId(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, trimming surrounding whitespace.
            ///
            /// Blank input is rejected.
            pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
                let raw = raw.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{} cannot be blank", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl Identifier for $t {
            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_code_newtype!(ItemId, "ItemId");
impl_code_newtype!(StaffId, "StaffId");
