//! EDM schema model for the SDK
//!
//! These records are produced by [`EdmBuilder`](crate::model::EdmBuilder) and
//! consumed by [`MetadataExporter`](crate::export::MetadataExporter).

use serde::{Deserialize, Serialize};

/// Primitive (or pass-through) property of an entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    /// EDM type name, e.g. `Edm.Int32`
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub nullable: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable,
        }
    }
}

/// Relationship from one entity type to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationProperty {
    pub name: String,
    /// Full name of the target entity type
    #[serde(rename = "type")]
    pub ty: String,
}

impl NavigationProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Named structured type with properties, keys and navigation properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    pub name: String,
    /// Key property names in declaration order
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
            properties: Vec::new(),
            navigation_properties: Vec::new(),
        }
    }

    /// Find a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Navigation property resolved to the entity set it points into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPropertyBinding {
    /// Navigation property name on the source entity type
    pub path: String,
    /// Name of the target entity set
    pub target: String,
}

impl NavigationPropertyBinding {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

/// Queryable collection of instances of one entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub name: String,
    /// Full name of the entity type, `namespace.entityName`
    pub entity_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation_property_bindings: Vec<NavigationPropertyBinding>,
}

impl EntitySet {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            navigation_property_bindings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityContainer {
    pub name: String,
    #[serde(default)]
    pub entity_sets: Vec<EntitySet>,
}

impl EntityContainer {
    pub fn new(name: impl Into<String>, entity_sets: Vec<EntitySet>) -> Self {
        Self {
            name: name.into(),
            entity_sets,
        }
    }
}

/// Namespace-scoped EDM schema
///
/// `None` marks a collection the schema does not carry at all, which is
/// different from an empty one: namespace schemas built by
/// [`EdmBuilder`](crate::model::EdmBuilder) carry entity types only, while the
/// synthetic container schema carries the container only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<Vec<EntityType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_container: Option<EntityContainer>,
}

impl Schema {
    /// Create a schema with an empty entity type list and no container
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entity_types: Some(Vec::new()),
            entity_container: None,
        }
    }

    /// Create a schema carrying only an entity container
    pub fn container(namespace: impl Into<String>, container: EntityContainer) -> Self {
        Self {
            namespace: namespace.into(),
            entity_types: None,
            entity_container: Some(container),
        }
    }

    /// Attach an entity container, returning the schema for chaining
    pub fn with_container(mut self, container: EntityContainer) -> Self {
        self.entity_container = Some(container);
        self
    }

    /// Entity sets of the container, if the schema carries one
    pub fn entity_sets(&self) -> Option<&[EntitySet]> {
        self.entity_container
            .as_ref()
            .map(|container| container.entity_sets.as_slice())
    }

    /// Find an entity type by its short name
    pub fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entity_types
            .as_deref()
            .and_then(|types| types.iter().find(|t| t.name == name))
    }

    /// Find an entity set by name
    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets()
            .and_then(|sets| sets.iter().find(|s| s.name == name))
    }
}
