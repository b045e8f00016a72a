//! Entity type construction from a single model definition

use super::types::to_edm_type;
use crate::models::{
    EntityType, ModelDefinition, NavigationProperty, Property, is_reserved_field,
};

/// Build the entity type described by `model`.
///
/// Fields are visited in declaration order. Navigation fields become
/// navigation properties; every other field becomes a property whose type
/// defaults to `string`, and is added to the keys when flagged as a key.
pub fn build_entity_type(model: &ModelDefinition) -> EntityType {
    let mut entity_type = EntityType::new(model.entity_name.clone());

    for (name, descriptor) in &model.fields {
        if is_reserved_field(name) {
            continue;
        }

        if descriptor.is_navigation() {
            let target = descriptor.ty.clone().unwrap_or_default();
            if target.is_empty() {
                tracing::warn!(
                    "Navigation property {}.{} declares no target type",
                    model.entity_name,
                    name
                );
            }
            entity_type
                .navigation_properties
                .push(NavigationProperty::new(name.clone(), target));
        } else {
            let ty = to_edm_type(descriptor.ty.as_deref().unwrap_or("string"));
            entity_type
                .properties
                .push(Property::new(name.clone(), ty, descriptor.is_nullable()));

            if descriptor.is_key() {
                entity_type.keys.push(name.clone());
            }
        }
    }

    entity_type
}
