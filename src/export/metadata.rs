//! CSDL/EDMX metadata exporter
//!
//! Renders EDM schemas as the XML document an OData service returns from its
//! `$metadata` endpoint. Output is byte-stable: element order, attribute
//! order and indentation are fixed, so documents can be compared literally.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::debug;

use crate::config::EdmConfig;
use crate::export::{ExportError, ExportResult};
use crate::models::{EntityContainer, EntitySet, EntityType, Schema};

/// Content type for serving the rendered document
pub const METADATA_CONTENT_TYPE: &str = "application/xml";

const EDMX_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edmx";
const EDM_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edm";
const ODATA_VERSION: &str = "4.0";

type XmlWriter = Writer<Vec<u8>>;

/// Exporter for CSDL/EDMX XML metadata documents
#[derive(Debug, Clone, Default)]
pub struct MetadataExporter {
    config: EdmConfig,
}

impl MetadataExporter {
    /// Create an exporter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EdmConfig) -> Self {
        Self { config }
    }

    /// Export a single schema carrying both entity types and an entity container.
    ///
    /// # Errors
    ///
    /// `ExportError::InvalidSchema` when either collection is absent. Empty
    /// collections are accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edm_metadata_sdk::export::MetadataExporter;
    /// use edm_metadata_sdk::models::{EntityContainer, Schema};
    ///
    /// let schema = Schema::new("NS").with_container(EntityContainer::new("Container", vec![]));
    /// let xml = MetadataExporter::new().export_schema(&schema).unwrap();
    /// assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
    /// ```
    pub fn export_schema(&self, schema: &Schema) -> Result<String, ExportError> {
        if schema.entity_types.is_none() {
            return Err(ExportError::InvalidSchema(format!(
                "schema {} has no entity types",
                schema.namespace
            )));
        }
        if schema.entity_container.is_none() {
            return Err(ExportError::InvalidSchema(format!(
                "schema {} has no entity sets",
                schema.namespace
            )));
        }

        self.render(std::slice::from_ref(schema))
    }

    /// Export several schemas, typically an [`EdmBuilder`](crate::model::EdmBuilder)
    /// result, as one document with a `<Schema>` element per schema.
    ///
    /// Each schema renders whichever of its entity types and entity container
    /// it carries.
    pub fn export(&self, schemas: &[Schema]) -> Result<ExportResult, ExportError> {
        if schemas.is_empty() {
            return Err(ExportError::InvalidSchema(
                "no schemas to export".to_string(),
            ));
        }
        if let Some(schema) = schemas
            .iter()
            .find(|s| s.entity_types.is_none() && s.entity_container.is_none())
        {
            return Err(ExportError::InvalidSchema(format!(
                "schema {} has neither entity types nor an entity container",
                schema.namespace
            )));
        }

        Ok(ExportResult {
            content: self.render(schemas)?,
            format: "edmx".to_string(),
        })
    }

    fn render(&self, schemas: &[Schema]) -> Result<String, ExportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.config.indent_size);

        write(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;

        let mut edmx = BytesStart::new("edmx:Edmx");
        edmx.push_attribute(("xmlns:edmx", EDMX_NAMESPACE));
        edmx.push_attribute(("Version", ODATA_VERSION));
        write(&mut writer, Event::Start(edmx))?;
        write(&mut writer, Event::Start(BytesStart::new("edmx:DataServices")))?;

        for schema in schemas {
            self.write_schema(&mut writer, schema)?;
        }

        write(&mut writer, Event::End(BytesEnd::new("edmx:DataServices")))?;
        write(&mut writer, Event::End(BytesEnd::new("edmx:Edmx")))?;

        String::from_utf8(writer.into_inner()).map_err(|e| {
            ExportError::SerializationError(format!("Metadata is not valid UTF-8: {}", e))
        })
    }

    fn write_schema(&self, writer: &mut XmlWriter, schema: &Schema) -> Result<(), ExportError> {
        let entity_types = schema.entity_types.as_deref().unwrap_or_default();

        let mut element = BytesStart::new("Schema");
        element.push_attribute(("Namespace", schema.namespace.as_str()));
        element.push_attribute(("xmlns", EDM_NAMESPACE));

        debug!(
            "Rendering schema {} with {} entity types",
            schema.namespace,
            entity_types.len()
        );

        if entity_types.is_empty() && schema.entity_container.is_none() {
            return write(writer, Event::Empty(element));
        }

        write(writer, Event::Start(element))?;
        for entity_type in entity_types {
            self.write_entity_type(writer, entity_type)?;
        }
        if let Some(container) = &schema.entity_container {
            write_container(writer, container)?;
        }
        write(writer, Event::End(BytesEnd::new("Schema")))
    }

    fn write_entity_type(
        &self,
        writer: &mut XmlWriter,
        entity_type: &EntityType,
    ) -> Result<(), ExportError> {
        let navigation_properties = if self.config.emit_navigation_properties {
            entity_type.navigation_properties.as_slice()
        } else {
            &[]
        };

        let mut element = BytesStart::new("EntityType");
        element.push_attribute(("Name", entity_type.name.as_str()));

        if entity_type.properties.is_empty()
            && entity_type.keys.is_empty()
            && navigation_properties.is_empty()
        {
            return write(writer, Event::Empty(element));
        }

        write(writer, Event::Start(element))?;

        for property in &entity_type.properties {
            let mut element = BytesStart::new("Property");
            element.push_attribute(("Name", property.name.as_str()));
            element.push_attribute(("Type", property.ty.as_str()));
            // Nullable="false" is never written
            if property.nullable {
                element.push_attribute(("Nullable", "true"));
            }
            write(writer, Event::Empty(element))?;
        }

        if !entity_type.keys.is_empty() {
            write(writer, Event::Start(BytesStart::new("Key")))?;
            for key in &entity_type.keys {
                let mut element = BytesStart::new("PropertyRef");
                element.push_attribute(("Name", key.as_str()));
                write(writer, Event::Empty(element))?;
            }
            write(writer, Event::End(BytesEnd::new("Key")))?;
        }

        for navigation in navigation_properties {
            let mut element = BytesStart::new("NavigationProperty");
            element.push_attribute(("Name", navigation.name.as_str()));
            element.push_attribute(("Type", navigation.ty.as_str()));
            write(writer, Event::Empty(element))?;
        }

        write(writer, Event::End(BytesEnd::new("EntityType")))
    }
}

fn write_container(writer: &mut XmlWriter, container: &EntityContainer) -> Result<(), ExportError> {
    let mut element = BytesStart::new("EntityContainer");
    element.push_attribute(("Name", container.name.as_str()));

    if container.entity_sets.is_empty() {
        return write(writer, Event::Empty(element));
    }

    write(writer, Event::Start(element))?;
    for entity_set in &container.entity_sets {
        write_entity_set(writer, entity_set)?;
    }
    write(writer, Event::End(BytesEnd::new("EntityContainer")))
}

fn write_entity_set(writer: &mut XmlWriter, entity_set: &EntitySet) -> Result<(), ExportError> {
    let mut element = BytesStart::new("EntitySet");
    element.push_attribute(("Name", entity_set.name.as_str()));
    element.push_attribute(("EntityType", entity_set.entity_type.as_str()));

    if entity_set.navigation_property_bindings.is_empty() {
        return write(writer, Event::Empty(element));
    }

    write(writer, Event::Start(element))?;
    for binding in &entity_set.navigation_property_bindings {
        let mut element = BytesStart::new("NavigationPropertyBinding");
        element.push_attribute(("Path", binding.path.as_str()));
        element.push_attribute(("Target", binding.target.as_str()));
        write(writer, Event::Empty(element))?;
    }
    write(writer, Event::End(BytesEnd::new("EntitySet")))
}

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), ExportError> {
    writer.write_event(event).map_err(|e| {
        ExportError::SerializationError(format!("Failed to write metadata XML: {}", e))
    })
}
