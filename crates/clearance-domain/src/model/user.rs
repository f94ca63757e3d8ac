//! Users over a closed set of roles.

use std::fmt;

use crate::error::DomainResult;
use crate::model::resource::Resource;
use crate::model::{validate_level, validate_name};

/// The closed set of user kinds, each carrying its own field set.
///
/// The type tag used in persisted records is carried by the variant itself
/// (see [`Role::tag`]); nothing in the system recovers a kind by runtime
/// type inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// A student enrolled in a study group.
    Student { group: String },
    /// A teacher attached to a department.
    Teacher { department: String },
    /// An administrator. No extra fields.
    Administrator,
}

impl Role {
    /// The tag identifying this kind in persisted records.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Student { .. } => "Student",
            Role::Teacher { .. } => "Teacher",
            Role::Administrator => "Administrator",
        }
    }

    /// The variant-specific field (group or department), if the kind has one.
    pub fn extra(&self) -> Option<&str> {
        match self {
            Role::Student { group } => Some(group),
            Role::Teacher { department } => Some(department),
            Role::Administrator => None,
        }
    }
}

/// A user with a caller-assigned id, an access level, and a concrete role.
///
/// Invariants, enforced at construction and on every mutating setter:
/// the name is non-empty and the access level is non-negative. Ids carry
/// no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    id: i64,
    access_level: i64,
    role: Role,
}

impl User {
    /// Creates a user, validating the name and access level.
    pub fn new(
        name: impl Into<String>,
        id: i64,
        access_level: i64,
        role: Role,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name, "user")?;
        validate_level(access_level)?;
        Ok(Self {
            name,
            id,
            access_level,
            role,
        })
    }

    /// Creates a student in the given study group.
    pub fn student(
        name: impl Into<String>,
        id: i64,
        access_level: i64,
        group: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            id,
            access_level,
            Role::Student {
                group: group.into(),
            },
        )
    }

    /// Creates a teacher in the given department.
    pub fn teacher(
        name: impl Into<String>,
        id: i64,
        access_level: i64,
        department: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            id,
            access_level,
            Role::Teacher {
                department: department.into(),
            },
        )
    }

    /// Creates an administrator.
    pub fn administrator(
        name: impl Into<String>,
        id: i64,
        access_level: i64,
    ) -> DomainResult<Self> {
        Self::new(name, id, access_level, Role::Administrator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn access_level(&self) -> i64 {
        self.access_level
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Renames the user. Fails on an empty name, leaving the user unchanged.
    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name, "user")?;
        self.name = name;
        Ok(())
    }

    /// Reassigns the id. Ids are caller-assigned and not guaranteed unique,
    /// so no validation applies.
    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    /// Changes the access level. Fails on a negative level, leaving the
    /// user unchanged.
    pub fn set_access_level(&mut self, level: i64) -> DomainResult<()> {
        validate_level(level)?;
        self.access_level = level;
        Ok(())
    }

    /// The authorization predicate, defined once for every kind: access is
    /// granted when the user's level meets the resource's required level.
    pub fn can_access(&self, resource: &Resource) -> bool {
        self.access_level >= resource.required_access_level()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.role {
            Role::Student { group } => write!(
                f,
                "Student: {}, ID: {}, group: {}, access level: {}",
                self.name, self.id, group, self.access_level
            ),
            Role::Teacher { department } => write!(
                f,
                "Teacher: {}, ID: {}, department: {}, access level: {}",
                self.name, self.id, department, self.access_level
            ),
            Role::Administrator => write!(
                f,
                "Administrator: {}, ID: {}, access level: {}",
                self.name, self.id, self.access_level
            ),
        }
    }
}
