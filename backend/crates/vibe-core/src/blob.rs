//! JSON-encoded blob columns.
//!
//! Structured scalar fields (work info, last played song) are persisted as a
//! single JSON text column. An unset value is stored as SQL `NULL`; legacy rows
//! may also hold an empty string or the literal `null`, which all decode to
//! `None`.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[track_caller]
pub fn decode<T: DeserializeOwned>(
    column: &'static str,
    raw: Option<&str>,
) -> CoreErrorResult<Option<T>> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };

    if raw.is_empty() || raw == "null" {
        return Ok(None);
    }

    serde_json::from_str(raw)
        .map(Some)
        .map_err(|source| CoreError::BlobDecode {
            column,
            source,
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
pub fn encode<T: Serialize>(
    column: &'static str,
    value: Option<&T>,
) -> CoreErrorResult<Option<String>> {
    value
        .map(|v| {
            serde_json::to_string(v).map_err(|source| CoreError::BlobEncode {
                column,
                source,
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
}
