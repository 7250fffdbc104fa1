//! User record processing
//!
//! Records are fixed-field structs, so a literal record can never lack a
//! field. Untyped JSON records still can, and [`UserRecord::from_value`]
//! reports that as [`Error::MissingField`].

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::common::{Error, Result};

/// Age at which a user counts as an adult
pub const ADULT_AGE: u32 = 18;

/// A raw user record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

/// Adult/minor classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Adult,
    Minor,
}

/// A record derived from a [`UserRecord`] for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub name: String,
    pub age: u32,
    pub status: Status,
}

impl UserRecord {
    pub fn new(first_name: &str, last_name: &str, age: u32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
        }
    }

    /// Build a record from an untyped JSON object
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(record_error)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Split serde's missing-field failures from other malformed records
fn record_error(e: serde_json::Error) -> Error {
    let message = e.to_string();
    match message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        Some(field) => Error::missing_field(field),
        None => Error::InvalidRecord(message),
    }
}

impl Status {
    pub fn for_age(age: u32) -> Self {
        if age >= ADULT_AGE {
            Status::Adult
        } else {
            Status::Minor
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Adult => write!(f, "Adult"),
            Status::Minor => write!(f, "Minor"),
        }
    }
}

impl From<&UserRecord> for DisplayRecord {
    fn from(user: &UserRecord) -> Self {
        Self {
            name: user.full_name(),
            age: user.age,
            status: Status::for_age(user.age),
        }
    }
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} years old ({})", self.name, self.age, self.status)
    }
}

/// Process a list of user records into display records, preserving order
pub fn process_user_data(users: &[UserRecord]) -> Vec<DisplayRecord> {
    users.iter().map(DisplayRecord::from).collect()
}

/// Process untyped JSON user records
///
/// Fails on the first record lacking `first_name`, `last_name` or `age`.
pub fn process_raw_users(users: &[Value]) -> Result<Vec<DisplayRecord>> {
    let users = users
        .iter()
        .map(UserRecord::from_value)
        .collect::<Result<Vec<_>>>()?;
    Ok(process_user_data(&users))
}
