//! Model definition for the SDK
//!
//! A model definition is a flat, ordered list of fields. Three reserved
//! fields name the entity; every other field describes a property or a
//! navigation property. Field order is significant: it drives the order of
//! properties and keys in the built entity type.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Field names that identify the entity rather than describe a property
pub const RESERVED_FIELDS: [&str; 3] = ["namespace", "entityName", "entitySetName"];

/// Whether `name` is one of [`RESERVED_FIELDS`]
pub fn is_reserved_field(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

/// Descriptor of a single non-reserved field
///
/// All members are optional; absent flags are treated as `false` and an
/// absent type as `string` (or as an empty target for navigation fields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Logical type name, or the target entity type full name for navigation fields
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<bool>,
}

impl PropertyDescriptor {
    /// Create an empty descriptor (a non-nullable `string` property)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a descriptor for a property of the given logical type
    ///
    /// # Example
    ///
    /// ```rust
    /// use edm_metadata_sdk::models::PropertyDescriptor;
    ///
    /// let id = PropertyDescriptor::of_type("int32").key(true);
    /// assert!(id.is_key());
    /// ```
    pub fn of_type(ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Create a navigation descriptor targeting an entity type full name
    pub fn navigation_to(target: impl Into<String>) -> Self {
        Self {
            ty: Some(target.into()),
            navigation: Some(true),
            ..Self::default()
        }
    }

    /// Set the nullable flag
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    /// Set the key flag
    pub fn key(mut self, key: bool) -> Self {
        self.key = Some(key);
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable == Some(true)
    }

    pub fn is_key(&self) -> bool {
        self.key == Some(true)
    }

    pub fn is_navigation(&self) -> bool {
        self.navigation == Some(true)
    }
}

/// Declarative definition of one entity
///
/// # Example
///
/// ```rust
/// use edm_metadata_sdk::models::{ModelDefinition, PropertyDescriptor};
///
/// let person = ModelDefinition::new("NS", "Person", "People")
///     .property("Id", PropertyDescriptor::of_type("int32").key(true))
///     .property("Name", PropertyDescriptor::of_type("string"));
///
/// assert_eq!(person.full_name(), "NS.Person");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelDefinition {
    pub namespace: String,
    pub entity_name: String,
    pub entity_set_name: String,
    /// Non-reserved fields in declaration order
    pub fields: Vec<(String, PropertyDescriptor)>,
}

impl ModelDefinition {
    pub fn new(
        namespace: impl Into<String>,
        entity_name: impl Into<String>,
        entity_set_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            entity_name: entity_name.into(),
            entity_set_name: entity_set_name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field, returning the definition for chaining
    pub fn property(mut self, name: impl Into<String>, descriptor: PropertyDescriptor) -> Self {
        self.set_property(name, descriptor);
        self
    }

    /// Add a field, or replace the descriptor of an existing field in place
    pub fn set_property(&mut self, name: impl Into<String>, descriptor: PropertyDescriptor) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = descriptor,
            None => self.fields.push((name, descriptor)),
        }
    }

    /// Look up the descriptor of a field by name
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Fully-qualified entity type name, `namespace.entityName`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.entity_name)
    }
}

impl Serialize for ModelDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RESERVED_FIELDS.len() + self.fields.len()))?;
        map.serialize_entry("namespace", &self.namespace)?;
        map.serialize_entry("entityName", &self.entity_name)?;
        map.serialize_entry("entitySetName", &self.entity_set_name)?;
        for (name, descriptor) in &self.fields {
            if is_reserved_field(name) {
                continue;
            }
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ModelDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ModelDefinitionVisitor)
    }
}

fn missing_field<E: de::Error>(field: &'static str) -> E {
    E::missing_field(field)
}

/// Reads the definition map entry by entry so document order is kept
struct ModelDefinitionVisitor;

impl<'de> Visitor<'de> for ModelDefinitionVisitor {
    type Value = ModelDefinition;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a model definition object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut namespace: Option<String> = None;
        let mut entity_name: Option<String> = None;
        let mut entity_set_name: Option<String> = None;
        let mut definition = ModelDefinition::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "namespace" => namespace = Some(map.next_value()?),
                "entityName" => entity_name = Some(map.next_value()?),
                "entitySetName" => entity_set_name = Some(map.next_value()?),
                _ => {
                    let descriptor: PropertyDescriptor = map.next_value()?;
                    definition.set_property(key.as_str(), descriptor);
                }
            }
        }

        definition.namespace = namespace.ok_or_else(|| missing_field::<A::Error>("namespace"))?;
        definition.entity_name =
            entity_name.ok_or_else(|| missing_field::<A::Error>("entityName"))?;
        definition.entity_set_name =
            entity_set_name.ok_or_else(|| missing_field::<A::Error>("entitySetName"))?;

        Ok(definition)
    }
}
