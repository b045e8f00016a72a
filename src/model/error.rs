//! Error types for schema building

use thiserror::Error;

/// Errors that can occur while building schemas
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A navigation property targets an entity type no definition registered
    #[error("Unknown EntitySet {entity_type}")]
    UnknownEntitySet { entity_type: String },
}
