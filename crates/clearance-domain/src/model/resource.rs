//! Resources guarded by a required access level.

use std::fmt;

use crate::error::DomainResult;
use crate::model::{validate_level, validate_name};

/// A named resource demanding a minimum access level.
///
/// Immutable by convention; the setters exist for the same validated
/// mutation surface users have and enforce the same invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    required_access_level: i64,
}

impl Resource {
    /// Creates a resource, validating the name and required level.
    pub fn new(name: impl Into<String>, required_access_level: i64) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name, "resource")?;
        validate_level(required_access_level)?;
        Ok(Self {
            name,
            required_access_level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_access_level(&self) -> i64 {
        self.required_access_level
    }

    /// Renames the resource. Fails on an empty name.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name, "resource")?;
        self.name = name;
        Ok(())
    }

    /// Changes the required level. Fails on a negative level.
    pub fn set_required_access_level(&mut self, level: i64) -> DomainResult<()> {
        validate_level(level)?;
        self.required_access_level = level;
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resource: {}, required access level: {}",
            self.name, self.required_access_level
        )
    }
}
