//! Capability traits the directory and archive are generic over.
//!
//! The store does not know concrete entity types; it holds anything that
//! can identify, display, and persist itself through these traits.

use std::fmt;

/// An entity that can live in a directory: it renders itself through
/// [`std::fmt::Display`] and carries a name for exact lookups.
pub trait Entity: fmt::Display {
    /// The entity's name. Name lookups match it exactly, case-sensitively.
    fn name(&self) -> &str;
}

/// An entity with a caller-assigned numeric id.
///
/// Ids are not guaranteed unique; id lookups return the first match in
/// store order.
pub trait Identified: Entity {
    fn id(&self) -> i64;
}

/// An entity that persists as one line of comma-separated fields.
///
/// Implementations see fields in their decoded form; delimiter escaping is
/// the archive layer's concern.
pub trait Record: Sized {
    /// Appends the entity's fields in record order.
    fn encode(&self, fields: &mut Vec<String>);

    /// Reconstructs the entity from one record's fields.
    fn decode(fields: &[String]) -> Result<Self, RecordError>;
}

/// A record-level failure, without line position. The archive layer
/// attaches the line number when surfacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub message: String,
}

impl RecordError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RecordError {}
