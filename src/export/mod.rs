//! Export functionality
//!
//! Provides exporters for:
//! - CSDL/EDMX XML metadata documents (OData `$metadata`)

pub mod metadata;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use metadata::{METADATA_CONTENT_TYPE, MetadataExporter};
