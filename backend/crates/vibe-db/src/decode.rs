use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(column: &'static str, raw: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DbError::Decode {
        column,
        message: format!("invalid UUID: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn timestamp(column: &'static str, secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        column,
        message: format!("timestamp out of range: {}", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
