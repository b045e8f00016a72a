//! Import functionality
//!
//! Provides parsers for importing model definitions from:
//! - JSON documents
//! - YAML documents

pub mod definitions;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("IO error: {0}")]
    IoError(String),
}

// Re-export for convenience
pub use definitions::DefinitionImporter;
