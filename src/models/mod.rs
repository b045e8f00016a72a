//! Models module for the SDK
//!
//! Defines the data structures shared between the schema builder and the
//! metadata exporter:
//! - Model definitions (the loosely-typed input)
//! - EDM schemas, entity types and entity sets (the normalized output)

pub mod definition;
pub mod schema;

pub use definition::{ModelDefinition, PropertyDescriptor, RESERVED_FIELDS, is_reserved_field};
pub use schema::{
    EntityContainer, EntitySet, EntityType, NavigationProperty, NavigationPropertyBinding,
    Property, Schema,
};
