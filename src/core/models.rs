use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::UserError;

/// Access level of a user. Stored and exchanged as `ADMIN`, `READER` or `WRITER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Reader,
    Writer,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Reader => "READER",
            Role::Writer => "WRITER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "READER" => Ok(Role::Reader),
            "WRITER" => Ok(Role::Writer),
            _ => Err(UserError::InputValidation(format!(
                "unknown role '{s}', expected one of ADMIN, READER, WRITER"
            ))),
        }
    }
}

/// The validated, fully populated user entity.
///
/// Only the entity factory assigns `id` and the timestamps; there is no update path,
/// so `updated_at` always equals `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(with = "iso_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new user. Identity and timestamps are never accepted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUsersByRoleInput {
    pub role: Role,
}

impl GetUsersByRoleInput {
    /// # Errors
    ///
    /// Returns `UserError::InputValidation` if `role` is not a known role.
    pub fn parse(role: &str) -> Result<Self, UserError> {
        Ok(Self { role: role.parse()? })
    }
}

/// Renders a timestamp the way it is stored: `2023-01-01T00:00:00.000Z`.
///
/// Millisecond precision is the minimum; finer sub-second digits are kept as-is.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_nanos() % 1_000_000 == 0 {
        SecondsFormat::Millis
    } else {
        SecondsFormat::AutoSi
    };
    timestamp.to_rfc3339_opts(format, true)
}

/// Parses a stored timestamp. Only UTC (`Z`) designators are accepted.
///
/// # Errors
///
/// Returns a description of the problem if `value` is not an RFC 3339 UTC datetime.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    if !value.ends_with('Z') {
        return Err(format!("'{value}' is not a UTC datetime"));
    }
    if value.as_bytes().get(10) != Some(&b'T') {
        return Err(format!("'{value}' must separate date and time with 'T'"));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| format!("'{value}' is not a valid datetime: {e}"))
}

mod iso_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(D::Error::custom)
    }
}
