//! Configuration for schema building and metadata rendering

use serde::{Deserialize, Serialize};

/// Configuration shared by [`EdmBuilder`](crate::model::EdmBuilder) and
/// [`MetadataExporter`](crate::export::MetadataExporter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdmConfig {
    /// Namespace of the synthetic schema that carries the entity container
    pub container_namespace: String,

    /// Name of the entity container
    pub container_name: String,

    /// Spaces per nesting level in rendered XML
    pub indent_size: usize,

    /// Render `<NavigationProperty>` elements inside each `<EntityType>`
    pub emit_navigation_properties: bool,
}

impl Default for EdmConfig {
    fn default() -> Self {
        Self {
            container_namespace: "Default".to_string(),
            container_name: "Container".to_string(),
            indent_size: 2,
            emit_navigation_properties: false,
        }
    }
}

impl EdmConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> EdmConfigBuilder {
        EdmConfigBuilder::default()
    }

    /// Parse a configuration from a TOML document
    ///
    /// Keys missing from the document keep their default values.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        toml::from_str(content).context("Failed to parse EDM configuration")
    }
}

/// Builder for EdmConfig
#[derive(Debug, Default)]
pub struct EdmConfigBuilder {
    config: EdmConfig,
}

impl EdmConfigBuilder {
    /// Set the namespace of the container schema
    pub fn container_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.container_namespace = namespace.into();
        self
    }

    /// Set the entity container name
    pub fn container_name(mut self, name: impl Into<String>) -> Self {
        self.config.container_name = name.into();
        self
    }

    /// Set the indentation width used when rendering XML
    pub fn indent_size(mut self, size: usize) -> Self {
        self.config.indent_size = size;
        self
    }

    /// Enable or disable `<NavigationProperty>` output
    pub fn emit_navigation_properties(mut self, emit: bool) -> Self {
        self.config.emit_navigation_properties = emit;
        self
    }

    /// Build the configuration
    pub fn build(self) -> EdmConfig {
        self.config
    }
}
