use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Row id assigned by the storage layer. Stable across edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContactId(i64);

impl ContactId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactIdParseError {
    #[error("contact id must contain only decimal digits")]
    NotNumeric,
    #[error("contact id out of range: {0}")]
    OutOfRange(String),
}

impl FromStr for ContactId {
    type Err = ContactIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactIdParseError::NotNumeric);
        }
        s.parse::<i64>()
            .map(ContactId)
            .map_err(|_| ContactIdParseError::OutOfRange(s.to_string()))
    }
}

/// The four editable contact attributes, selected by the 1-4 menu tokens
/// in the edit loop. Each variant maps to one fixed UPDATE statement in
/// the storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Address,
    Phone,
    Email,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Address, Field::Phone, Field::Email];

    pub fn from_selector(token: &str) -> Option<Field> {
        match token {
            "1" => Some(Field::Name),
            "2" => Some(Field::Address),
            "3" => Some(Field::Phone),
            "4" => Some(Field::Email),
            _ => None,
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Field::Name => "1",
            Field::Address => "2",
            Field::Phone => "3",
            Field::Email => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Address => "Address",
            Field::Phone => "Phone Number",
            Field::Email => "Email Address",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub details: ContactDetails,
}
