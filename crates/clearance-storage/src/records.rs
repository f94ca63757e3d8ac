//! Capability and record implementations for the domain entities.
//!
//! User records carry an explicit type tag as their first field:
//!
//! ```text
//! Student,Alice,1,2,CS-101
//! Teacher,Dr. Smith,2,5,Computer Science
//! Administrator,Root,3,10
//! ```
//!
//! Resource directories are homogeneous, so resource records carry no tag:
//!
//! ```text
//! Library,3
//! ```

use clearance_domain::{Resource, Role, User};

use crate::traits::{Entity, Identified, Record, RecordError};

impl Entity for User {
    fn name(&self) -> &str {
        User::name(self)
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        User::id(self)
    }
}

impl Entity for Resource {
    fn name(&self) -> &str {
        Resource::name(self)
    }
}

impl Record for User {
    fn encode(&self, fields: &mut Vec<String>) {
        fields.push(self.role().tag().to_string());
        fields.push(self.name().to_string());
        fields.push(self.id().to_string());
        fields.push(self.access_level().to_string());
        if let Some(extra) = self.role().extra() {
            fields.push(extra.to_string());
        }
    }

    fn decode(fields: &[String]) -> Result<Self, RecordError> {
        if fields.len() < 4 {
            return Err(RecordError::new(format!(
                "truncated user record: expected at least 4 fields, got {}",
                fields.len()
            )));
        }
        if fields.len() > 5 {
            return Err(RecordError::new(format!(
                "user record has {} fields, expected 4 or 5",
                fields.len()
            )));
        }

        let tag = fields[0].as_str();
        let extra = fields.get(4).cloned();
        let role = match (tag, extra) {
            ("Student", Some(group)) => Role::Student { group },
            ("Teacher", Some(department)) => Role::Teacher { department },
            ("Administrator", None) => Role::Administrator,
            ("Student" | "Teacher", None) => {
                return Err(RecordError::new(format!(
                    "{tag} record is missing its extra field"
                )))
            }
            ("Administrator", Some(_)) => {
                return Err(RecordError::new(
                    "Administrator record has a trailing field",
                ))
            }
            _ => {
                return Err(RecordError::new(format!(
                    "unrecognized user type tag: {tag:?}"
                )))
            }
        };

        let id = parse_int(&fields[2], "id")?;
        let access_level = parse_int(&fields[3], "access level")?;
        User::new(&fields[1], id, access_level, role)
            .map_err(|e| RecordError::new(e.to_string()))
    }
}

impl Record for Resource {
    fn encode(&self, fields: &mut Vec<String>) {
        fields.push(self.name().to_string());
        fields.push(self.required_access_level().to_string());
    }

    fn decode(fields: &[String]) -> Result<Self, RecordError> {
        if fields.len() != 2 {
            return Err(RecordError::new(format!(
                "resource record has {} fields, expected 2",
                fields.len()
            )));
        }
        let required = parse_int(&fields[1], "required access level")?;
        Resource::new(&fields[0], required).map_err(|e| RecordError::new(e.to_string()))
    }
}

fn parse_int(field: &str, what: &str) -> Result<i64, RecordError> {
    field
        .parse()
        .map_err(|_| RecordError::new(format!("invalid {what}: {field:?}")))
}
