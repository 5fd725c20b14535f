use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Who a user wants to be matched with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DatingPreference {
    Men,
    Women,
    Everyone,
}

impl DatingPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Everyone => "Everyone",
        }
    }
}

impl FromStr for DatingPreference {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Men" => Ok(Self::Men),
            "Women" => Ok(Self::Women),
            "Everyone" => Ok(Self::Everyone),
            _ => Err(CoreError::InvalidDatingPreference {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<String> for DatingPreference {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        Self::from_str(&value)
    }
}

impl From<DatingPreference> for &'static str {
    fn from(preference: DatingPreference) -> Self {
        preference.as_str()
    }
}

impl std::fmt::Display for DatingPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
