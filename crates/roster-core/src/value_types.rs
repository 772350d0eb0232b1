//! Strongly-typed value types with validation for roster primitives.
//!
//! Each type can only be built through a checking constructor, so a value
//! that exists is always in range.
//!
//! # Example
//!
//! ```ignore
//! use roster_core::value_types::{Capacity, ClassCode, Email, Modality};
//!
//! let email: Email = "ana@example.com".parse()?;
//! let code = ClassCode::new(1)?;
//! let capacity = Capacity::new(10)?;
//! let modality: Modality = "remote".parse()?;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

use crate::errors::RosterError;

// ============================================================================
// Email
// ============================================================================

/// A validated email address. Identifies a student within a class.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    pub fn new(email: impl Into<String>) -> Result<Self, RosterError> {
        let email = email.into();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(email: &str) -> Result<(), RosterError> {
        if email.is_empty() {
            return Err(RosterError::validation("email cannot be empty"));
        }

        if !email.validate_email() {
            return Err(RosterError::validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// ClassCode
// ============================================================================

/// Numeric class code, unique within a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClassCode(u8);

impl ClassCode {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(code: u8) -> Result<Self, RosterError> {
        if !(Self::MIN..=Self::MAX).contains(&code) {
            return Err(RosterError::validation(format!(
                "class code must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                code
            )));
        }
        Ok(Self(code))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ClassCode {
    type Error = RosterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ClassCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Self::new(code).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Capacity
// ============================================================================

/// Maximum number of students a class accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Capacity(u8);

impl Capacity {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 10;

    pub fn new(maximum: u8) -> Result<Self, RosterError> {
        if !(Self::MIN..=Self::MAX).contains(&maximum) {
            return Err(RosterError::validation(format!(
                "class capacity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                maximum
            )));
        }
        Ok(Self(maximum))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let maximum = u8::deserialize(deserializer)?;
        Self::new(maximum).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Modality
// ============================================================================

/// Enrollment mode of a student or class. Must match between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    InPerson,
    Remote,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InPerson => "in-person",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-person" | "in_person" | "inperson" => Ok(Self::InPerson),
            "remote" => Ok(Self::Remote),
            other => Err(RosterError::validation(format!(
                "unknown modality '{}', expected 'in-person' or 'remote'",
                other
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
