use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Self-described gender shown on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Gender {
    Man,
    Woman,
    NonBinary,
}

impl Gender {
    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Man => "Man",
            Self::Woman => "Woman",
            Self::NonBinary => "Non-binary",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Man" => Ok(Self::Man),
            "Woman" => Ok(Self::Woman),
            "Non-binary" => Ok(Self::NonBinary),
            _ => Err(CoreError::InvalidGender {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        Self::from_str(&value)
    }
}

impl From<Gender> for &'static str {
    fn from(gender: Gender) -> Self {
        gender.as_str()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
