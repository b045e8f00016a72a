//! EDM Metadata SDK - OData Entity Data Model construction and `$metadata` rendering
//!
//! Provides unified interfaces for:
//! - Declaring entity models as ordered, loosely-typed definitions
//! - Building namespace-scoped EDM schemas with resolved navigation bindings
//! - Rendering schemas as CSDL/EDMX XML documents
//! - Importing model definitions from JSON and YAML documents

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod models;

pub use config::{EdmConfig, EdmConfigBuilder};
pub use error::EdmError;
pub use export::{ExportError, ExportResult, METADATA_CONTENT_TYPE, MetadataExporter};
pub use import::{DefinitionImporter, ImportError};
pub use model::{BuildError, EdmBuilder, build_entity_type, to_edm_type};

// Re-export models
pub use models::{
    EntityContainer, EntitySet, EntityType, ModelDefinition, NavigationProperty,
    NavigationPropertyBinding, Property, PropertyDescriptor, RESERVED_FIELDS, Schema,
};
