//! clearance-storage: Directory and archive layer
//!
//! This crate provides the in-memory collection store and its persistence:
//! - Capability traits the store is generic over
//! - An ordered directory of one entity kind
//! - A line-oriented, type-tagged text archive format
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              clearance-storage              │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs    - Entity capability traits    │
//! │  directory.rs - Ordered in-memory store     │
//! │  codec.rs     - Field escaping/splitting    │
//! │  records.rs   - Record impls for entities   │
//! │  archive.rs   - Save/load with count header │
//! └─────────────────────────────────────────────┘
//! ```

pub mod archive;
mod codec;
pub mod directory;
pub mod error;
pub mod records;
pub mod traits;

// Re-export commonly used types
pub use directory::{Directory, DISPLAY_DELIMITER};
pub use error::{ArchiveError, ArchiveResult};
pub use traits::{Entity, Identified, Record, RecordError};
