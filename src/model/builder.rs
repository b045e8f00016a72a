//! Schema builder
//!
//! Accumulates model definitions and turns them into namespace-scoped EDM
//! schemas plus a trailing container schema listing every entity set.

use tracing::{debug, info};

use super::entity::build_entity_type;
use super::error::BuildError;
use crate::config::EdmConfig;
use crate::error::EdmError;
use crate::export::MetadataExporter;
use crate::models::{
    EntityContainer, EntitySet, EntityType, ModelDefinition, NavigationPropertyBinding, Schema,
};

/// Builds EDM schemas from accumulated model definitions
///
/// Definitions are kept in insertion order, which decides the order of
/// namespaces, entity types, entity sets and properties in every result.
///
/// # Example
///
/// ```rust
/// use edm_metadata_sdk::model::EdmBuilder;
/// use edm_metadata_sdk::models::{ModelDefinition, PropertyDescriptor};
///
/// let mut builder = EdmBuilder::new();
/// builder
///     .add_model(
///         ModelDefinition::new("NS", "Person", "People")
///             .property("Id", PropertyDescriptor::of_type("int32").key(true)),
///     )
///     .add_model(ModelDefinition::new("NS", "Employment", "Employments"));
///
/// let schemas = builder.build().unwrap();
/// assert_eq!(schemas.len(), 2);
/// assert_eq!(schemas[1].namespace, "Default");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdmBuilder {
    models: Vec<ModelDefinition>,
    config: EdmConfig,
}

impl EdmBuilder {
    /// Create an empty builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration
    pub fn with_config(config: EdmConfig) -> Self {
        Self {
            models: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &EdmConfig {
        &self.config
    }

    /// Append a model definition. No validation happens here.
    pub fn add_model(&mut self, model: ModelDefinition) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Append several model definitions in iteration order
    pub fn add_models(&mut self, models: impl IntoIterator<Item = ModelDefinition>) -> &mut Self {
        self.models.extend(models);
        self
    }

    /// Accumulated definitions in insertion order
    pub fn models(&self) -> &[ModelDefinition] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Build the schemas for every accumulated definition.
    ///
    /// Returns one schema per namespace in first-seen order, followed by the
    /// container schema. Fails without a partial result when a navigation
    /// property targets an entity type that no definition registered.
    pub fn build(&self) -> Result<Vec<Schema>, BuildError> {
        // Every set must exist before navigation targets are resolved
        let mut entity_sets: Vec<EntitySet> = self
            .models
            .iter()
            .map(|model| EntitySet::new(model.entity_set_name.clone(), model.full_name()))
            .collect();

        let entity_types: Vec<EntityType> = self.models.iter().map(build_entity_type).collect();

        for (model, entity_type) in self.models.iter().zip(&entity_types) {
            if entity_type.navigation_properties.is_empty() {
                continue;
            }
            Self::bind_navigation_properties(&mut entity_sets, model, entity_type)?;
        }

        let mut schemas: Vec<Schema> = Vec::new();
        for (model, entity_type) in self.models.iter().zip(entity_types) {
            let index = match schemas.iter().position(|s| s.namespace == model.namespace) {
                Some(index) => index,
                None => {
                    schemas.push(Schema::new(model.namespace.clone()));
                    schemas.len() - 1
                }
            };
            schemas[index]
                .entity_types
                .get_or_insert_with(Vec::new)
                .push(entity_type);
        }

        let entity_set_count = entity_sets.len();
        schemas.push(Schema::container(
            self.config.container_namespace.clone(),
            EntityContainer::new(self.config.container_name.clone(), entity_sets),
        ));

        info!(
            "Built {} schemas with {} entity sets from {} model definitions",
            schemas.len(),
            entity_set_count,
            self.models.len()
        );

        Ok(schemas)
    }

    /// Build the schemas and render them as one EDMX document
    pub fn build_metadata(&self) -> Result<String, EdmError> {
        let schemas = self.build()?;
        let result = MetadataExporter::with_config(self.config.clone()).export(&schemas)?;
        Ok(result.content)
    }

    /// Resolve each navigation property of `entity_type` to the set of its
    /// target type and record the binding on the source type's set.
    fn bind_navigation_properties(
        entity_sets: &mut [EntitySet],
        model: &ModelDefinition,
        entity_type: &EntityType,
    ) -> Result<(), BuildError> {
        let source_type = model.full_name();
        let source = entity_sets
            .iter()
            .position(|set| set.entity_type == source_type)
            .ok_or_else(|| BuildError::UnknownEntitySet {
                entity_type: source_type.clone(),
            })?;

        for navigation in &entity_type.navigation_properties {
            let target = entity_sets
                .iter()
                .find(|set| set.entity_type == navigation.ty)
                .map(|set| set.name.clone())
                .ok_or_else(|| BuildError::UnknownEntitySet {
                    entity_type: navigation.ty.clone(),
                })?;

            debug!(
                "Bound {}.{} to entity set {}",
                source_type, navigation.name, target
            );
            entity_sets[source]
                .navigation_property_bindings
                .push(NavigationPropertyBinding::new(navigation.name.clone(), target));
        }

        Ok(())
    }
}
