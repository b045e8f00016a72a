//! Schema building functionality
//!
//! Turns accumulated model definitions into EDM schemas:
//! - Type mapping from logical type names to EDM primitive types
//! - Entity type construction from a single definition
//! - Namespace grouping and navigation binding resolution

pub mod builder;
pub mod entity;
pub mod error;
pub mod types;

pub use builder::EdmBuilder;
pub use entity::build_entity_type;
pub use error::BuildError;
pub use types::{EDM_TYPE_TABLE, is_primitive_type, to_edm_type};
