//! Metadata export tests

use edm_metadata_sdk::config::EdmConfig;
use edm_metadata_sdk::export::{ExportError, MetadataExporter};
use edm_metadata_sdk::model::EdmBuilder;
use edm_metadata_sdk::models::{
    EntityContainer, EntitySet, EntityType, ModelDefinition, NavigationProperty,
    NavigationPropertyBinding, Property, PropertyDescriptor, Schema,
};

fn keyed_type(name: &str, properties: &[(&str, &str)]) -> EntityType {
    let mut entity_type = EntityType::new(name);
    entity_type.keys.push("Id".to_string());
    entity_type.properties = properties
        .iter()
        .map(|(name, ty)| Property::new(*name, *ty, false))
        .collect();
    entity_type
}

/// Single-namespace schema carrying both entity types and the container
fn unit_test_schema() -> Schema {
    let mut person = keyed_type(
        "Person",
        &[
            ("Id", "Edm.Int32"),
            ("FirstName", "Edm.String"),
            ("LastName", "Edm.String"),
        ],
    );
    person.navigation_properties.push(NavigationProperty::new(
        "Employment",
        "Tests.UnitTests.Employment",
    ));
    let employment = keyed_type(
        "Employment",
        &[
            ("Id", "Edm.Int32"),
            ("EmployeeId", "Edm.String"),
            ("HireDate", "Edm.DateTime"),
        ],
    );
    let test_entity = keyed_type("TestEntity3", &[("Id", "Edm.Int32"), ("TestColumn", "Edm.String")]);

    let mut people = EntitySet::new("People", "Tests.UnitTests.Person");
    people
        .navigation_property_bindings
        .push(NavigationPropertyBinding::new("Employment", "Employments"));

    let mut schema = Schema::new("Tests.UnitTests");
    schema.entity_types = Some(vec![person, employment, test_entity]);
    schema.with_container(EntityContainer::new(
        "Container",
        vec![
            people,
            EntitySet::new("Employments", "Tests.UnitTests.Employment"),
            EntitySet::new("TestEntities3", "Tests.UnitTests.TestEntity3"),
        ],
    ))
}

mod single_schema_tests {
    use super::*;

    #[test]
    fn test_produces_expected_xml() {
        let xml = MetadataExporter::new()
            .export_schema(&unit_test_schema())
            .unwrap();

        let expected = r#"<?xml version="1.0"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema Namespace="Tests.UnitTests" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityType Name="Person">
        <Property Name="Id" Type="Edm.Int32"/>
        <Property Name="FirstName" Type="Edm.String"/>
        <Property Name="LastName" Type="Edm.String"/>
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
      </EntityType>
      <EntityType Name="Employment">
        <Property Name="Id" Type="Edm.Int32"/>
        <Property Name="EmployeeId" Type="Edm.String"/>
        <Property Name="HireDate" Type="Edm.DateTime"/>
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
      </EntityType>
      <EntityType Name="TestEntity3">
        <Property Name="Id" Type="Edm.Int32"/>
        <Property Name="TestColumn" Type="Edm.String"/>
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
      </EntityType>
      <EntityContainer Name="Container">
        <EntitySet Name="People" EntityType="Tests.UnitTests.Person">
          <NavigationPropertyBinding Path="Employment" Target="Employments"/>
        </EntitySet>
        <EntitySet Name="Employments" EntityType="Tests.UnitTests.Employment"/>
        <EntitySet Name="TestEntities3" EntityType="Tests.UnitTests.TestEntity3"/>
      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

        assert_eq!(xml, expected);
    }

    #[test]
    fn test_nullable_only_written_when_true() {
        let mut entity_type = EntityType::new("Thing");
        entity_type.properties = vec![
            Property::new("Required", "Edm.String", false),
            Property::new("Optional", "Edm.DateTime", true),
        ];
        let mut schema = Schema::new("NS");
        schema.entity_types = Some(vec![entity_type]);
        let schema = schema.with_container(EntityContainer::new("Container", vec![]));

        let xml = MetadataExporter::new().export_schema(&schema).unwrap();

        assert!(xml.contains(r#"<Property Name="Required" Type="Edm.String"/>"#));
        assert!(xml.contains(r#"<Property Name="Optional" Type="Edm.DateTime" Nullable="true"/>"#));
        assert!(!xml.contains("Nullable=\"false\""));
    }

    #[test]
    fn test_keys_omitted_when_empty_and_ordered_otherwise() {
        let mut unkeyed = EntityType::new("Log");
        unkeyed.properties.push(Property::new("Message", "Edm.String", false));
        let mut keyed = EntityType::new("Line");
        keyed.properties = vec![
            Property::new("OrderId", "Edm.Int32", false),
            Property::new("LineNo", "Edm.Int16", false),
        ];
        keyed.keys = vec!["OrderId".to_string(), "LineNo".to_string()];

        let mut schema = Schema::new("NS");
        schema.entity_types = Some(vec![unkeyed, keyed]);
        let schema = schema.with_container(EntityContainer::new("Container", vec![]));

        let xml = MetadataExporter::new().export_schema(&schema).unwrap();

        let expected = r#"      <EntityType Name="Log">
        <Property Name="Message" Type="Edm.String"/>
      </EntityType>
      <EntityType Name="Line">
        <Property Name="OrderId" Type="Edm.Int32"/>
        <Property Name="LineNo" Type="Edm.Int16"/>
        <Key>
          <PropertyRef Name="OrderId"/>
          <PropertyRef Name="LineNo"/>
        </Key>
      </EntityType>
      <EntityContainer Name="Container"/>"#;
        assert!(xml.contains(expected), "{xml}");
        assert_eq!(xml.matches("<Key>").count(), 1);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut schema = Schema::new("NS");
        schema.entity_types = Some(vec![EntityType::new("A&B")]);
        let schema = schema.with_container(EntityContainer::new(
            "Container",
            vec![EntitySet::new("Set<1>", "NS.A&B")],
        ));

        let xml = MetadataExporter::new().export_schema(&schema).unwrap();

        assert!(xml.contains(r#"<EntityType Name="A&amp;B"/>"#));
        assert!(xml.contains(r#"<EntitySet Name="Set&lt;1&gt;" EntityType="NS.A&amp;B"/>"#));
    }

    #[test]
    fn test_missing_entity_types_is_invalid() {
        let schema = Schema::container("Default", EntityContainer::new("Container", vec![]));

        let err = MetadataExporter::new().export_schema(&schema).unwrap_err();

        assert!(matches!(err, ExportError::InvalidSchema(_)));
    }

    #[test]
    fn test_missing_entity_sets_is_invalid() {
        let schema = Schema::new("NS");

        let err = MetadataExporter::new().export_schema(&schema).unwrap_err();

        assert!(matches!(err, ExportError::InvalidSchema(ref msg) if msg.contains("entity sets")));
    }

    #[test]
    fn test_empty_collections_are_valid() {
        let schema = Schema::new("NS").with_container(EntityContainer::new("Container", vec![]));

        let xml = MetadataExporter::new().export_schema(&schema).unwrap();

        assert_eq!(
            xml,
            r#"<?xml version="1.0"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema Namespace="NS" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityContainer Name="Container"/>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#
        );
    }

    #[test]
    fn test_navigation_properties_when_enabled() {
        let config = EdmConfig::builder().emit_navigation_properties(true).build();

        let xml = MetadataExporter::with_config(config)
            .export_schema(&unit_test_schema())
            .unwrap();

        let expected = r#"        <Key>
          <PropertyRef Name="Id"/>
        </Key>
        <NavigationProperty Name="Employment" Type="Tests.UnitTests.Employment"/>
      </EntityType>"#;
        assert!(xml.contains(expected), "{xml}");
        assert_eq!(xml.matches("<NavigationProperty ").count(), 1);
    }

    #[test]
    fn test_custom_indent() {
        let config = EdmConfig::builder().indent_size(4).build();
        let schema = Schema::new("NS").with_container(EntityContainer::new("Container", vec![]));

        let xml = MetadataExporter::with_config(config)
            .export_schema(&schema)
            .unwrap();

        assert!(xml.contains("\n    <edmx:DataServices>\n"));
        assert!(xml.contains("\n            <EntityContainer Name=\"Container\"/>\n"));
    }
}

mod document_tests {
    use super::*;

    fn multi_namespace_builder() -> EdmBuilder {
        let mut builder = EdmBuilder::new();
        builder
            .add_model(
                ModelDefinition::new("Tests.UnitTests", "Person", "People")
                    .property("Id", PropertyDescriptor::of_type("int32").key(true))
                    .property("Name", PropertyDescriptor::of_type("string").nullable(true))
                    .property(
                        "Employment",
                        PropertyDescriptor::navigation_to("Tests.UnitTests.Employment"),
                    ),
            )
            .add_model(
                ModelDefinition::new("Tests.UnitTests", "Employment", "Employments")
                    .property("Id", PropertyDescriptor::of_type("int32").key(true)),
            )
            .add_model(
                ModelDefinition::new("Tests.IntegrationTests", "TestEntity3", "TestEntities3")
                    .property("TestColumn", PropertyDescriptor::of_type("string")),
            );
        builder
    }

    #[test]
    fn test_build_metadata_renders_every_schema() {
        let xml = multi_namespace_builder().build_metadata().unwrap();

        let expected = r#"<?xml version="1.0"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema Namespace="Tests.UnitTests" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityType Name="Person">
        <Property Name="Id" Type="Edm.Int32"/>
        <Property Name="Name" Type="Edm.String" Nullable="true"/>
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
      </EntityType>
      <EntityType Name="Employment">
        <Property Name="Id" Type="Edm.Int32"/>
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
      </EntityType>
    </Schema>
    <Schema Namespace="Tests.IntegrationTests" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityType Name="TestEntity3">
        <Property Name="TestColumn" Type="Edm.String"/>
      </EntityType>
    </Schema>
    <Schema Namespace="Default" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityContainer Name="Container">
        <EntitySet Name="People" EntityType="Tests.UnitTests.Person">
          <NavigationPropertyBinding Path="Employment" Target="Employments"/>
        </EntitySet>
        <EntitySet Name="Employments" EntityType="Tests.UnitTests.Employment"/>
        <EntitySet Name="TestEntities3" EntityType="Tests.IntegrationTests.TestEntity3"/>
      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

        assert_eq!(xml, expected);
    }

    #[test]
    fn test_export_result_format() {
        let schemas = multi_namespace_builder().build().unwrap();

        let result = MetadataExporter::new().export(&schemas).unwrap();

        assert_eq!(result.format, "edmx");
        assert_eq!(result.content.matches("<Schema ").count(), 3);
    }

    #[test]
    fn test_namespace_schema_alone_is_not_a_full_document() {
        let schemas = multi_namespace_builder().build().unwrap();

        assert!(MetadataExporter::new().export_schema(&schemas[0]).is_err());
        assert!(MetadataExporter::new().export_schema(&schemas[2]).is_err());
    }

    #[test]
    fn test_empty_schema_list_is_invalid() {
        let err = MetadataExporter::new().export(&[]).unwrap_err();
        assert!(matches!(err, ExportError::InvalidSchema(_)));
    }

    #[test]
    fn test_schema_with_nothing_is_invalid() {
        let schema = Schema {
            namespace: "Hollow".to_string(),
            entity_types: None,
            entity_container: None,
        };

        let err = MetadataExporter::new().export(&[schema]).unwrap_err();

        assert!(err.to_string().contains("Hollow"));
    }

    #[test]
    fn test_build_error_surfaces_from_build_metadata() {
        let mut builder = EdmBuilder::new();
        builder.add_model(
            ModelDefinition::new("NS", "Person", "People")
                .property("Missing", PropertyDescriptor::navigation_to("NS.Missing")),
        );

        let err = builder.build_metadata().unwrap_err();

        assert_eq!(err.to_string(), "Unknown EntitySet NS.Missing");
    }
}
