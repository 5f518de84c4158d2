use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DirectoryError, Result};

/// A single directory entry.
///
/// The `id` is caller-supplied and immutable once the record is stored;
/// `name` and `address` can be replaced through an update. Timestamps are
/// bookkeeping for display only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Build a record from raw field values. Every field is trimmed and must
    /// be non-empty afterwards, so a record with a blank mandatory field can
    /// never exist.
    pub fn new(id: &str, name: &str, address: &str) -> Result<Self> {
        let id = required("id", id)?;
        let fields = EmployeeFields::new(name, address)?;
        let now = Utc::now();
        Ok(Self {
            id,
            name: fields.name,
            address: fields.address,
            created_at: now,
            updated_at: now,
        })
    }

    pub(crate) fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.address = fields.address;
        self.updated_at = Utc::now();
    }
}

/// The mutable half of a record: everything except the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub address: String,
}

impl EmployeeFields {
    pub fn new(name: &str, address: &str) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            address: required("address", address)?,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
