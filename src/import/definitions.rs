//! Model definition importer
//!
//! Reads model definitions from JSON or YAML. A document holds either one
//! definition object or a list of them. Keys are read in document order, so
//! the order fields are written in is the order properties are emitted in.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::import::ImportError;
use crate::models::ModelDefinition;

#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionDocument {
    Many(Vec<ModelDefinition>),
    One(ModelDefinition),
}

impl From<DefinitionDocument> for Vec<ModelDefinition> {
    fn from(document: DefinitionDocument) -> Self {
        match document {
            DefinitionDocument::Many(models) => models,
            DefinitionDocument::One(model) => vec![model],
        }
    }
}

/// Importer for model definition documents
#[derive(Debug, Default)]
pub struct DefinitionImporter;

impl DefinitionImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse model definitions from a JSON document
    ///
    /// # Example
    ///
    /// ```rust
    /// use edm_metadata_sdk::import::DefinitionImporter;
    ///
    /// let json = r#"{
    ///     "namespace": "NS",
    ///     "entityName": "Person",
    ///     "entitySetName": "People",
    ///     "Id": { "type": "int32", "key": true }
    /// }"#;
    /// let models = DefinitionImporter::new().parse_json(json).unwrap();
    /// assert_eq!(models[0].full_name(), "NS.Person");
    /// ```
    pub fn parse_json(&self, content: &str) -> Result<Vec<ModelDefinition>, ImportError> {
        let document: DefinitionDocument = serde_json::from_str(content).map_err(|e| {
            ImportError::ParseError(format!("Invalid model definition JSON: {}", e))
        })?;
        Ok(document.into())
    }

    /// Parse model definitions from a YAML document
    pub fn parse_yaml(&self, content: &str) -> Result<Vec<ModelDefinition>, ImportError> {
        let document: DefinitionDocument = serde_yaml::from_str(content).map_err(|e| {
            ImportError::ParseError(format!("Invalid model definition YAML: {}", e))
        })?;
        Ok(document.into())
    }

    /// Load model definitions from a `.json`, `.yaml` or `.yml` file
    pub fn load_file(&self, path: &Path) -> Result<Vec<ModelDefinition>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = std::fs::read_to_string(path)
            .map_err(|e| ImportError::IoError(e.to_string()))
            .with_context(|| format!("Failed to read model definitions from {}", path.display()))?;

        let models = match extension.as_deref() {
            Some("json") => self.parse_json(&content),
            Some("yaml") | Some("yml") => self.parse_yaml(&content),
            _ => {
                return Err(anyhow::anyhow!(
                    "Unsupported model definition file type: {}",
                    path.display()
                ));
            }
        }
        .with_context(|| format!("Failed to import {}", path.display()))?;

        info!(
            "Imported {} model definitions from {}",
            models.len(),
            path.display()
        );

        Ok(models)
    }
}
