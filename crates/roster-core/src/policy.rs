//! What happens when a student is given more grades than the roster keeps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RosterError;

/// Maximum number of grades stored per student.
pub const MAX_GRADES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradePolicy {
    /// Fail with a validation error.
    #[default]
    Reject,
    /// Keep the first [`MAX_GRADES`] grades.
    Truncate,
    /// Keep none of the supplied grades.
    Discard,
}

impl GradePolicy {
    /// Apply the policy to a supplied grade list.
    pub fn apply(self, mut grades: Vec<f64>) -> Result<Vec<f64>, RosterError> {
        if grades.len() <= MAX_GRADES {
            return Ok(grades);
        }

        match self {
            Self::Reject => Err(RosterError::validation(format!(
                "a student can have at most {} grades, got {}",
                MAX_GRADES,
                grades.len()
            ))),
            Self::Truncate => {
                grades.truncate(MAX_GRADES);
                Ok(grades)
            }
            Self::Discard => Ok(Vec::new()),
        }
    }
}

impl fmt::Display for GradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reject => "reject",
            Self::Truncate => "truncate",
            Self::Discard => "discard",
        };
        f.write_str(name)
    }
}

impl FromStr for GradePolicy {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "truncate" => Ok(Self::Truncate),
            "discard" => Ok(Self::Discard),
            other => Err(RosterError::validation(format!(
                "unknown grade policy '{}'",
                other
            ))),
        }
    }
}
