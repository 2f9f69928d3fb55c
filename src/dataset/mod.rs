//! In-memory record collections.
//!
//! A `Dataset` pairs a field registry with the records it describes.
//! It is built once at start-up (from the bundled sample or a JSON
//! file) and handed to the engine; nothing mutates it afterwards.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{FieldDefinition, Record};
use crate::registry::FieldRegistry;

mod sample;

#[derive(Debug, Clone)]
pub struct Dataset {
    registry: FieldRegistry,
    records: Vec<Record>,
}

/// On-disk JSON layout accepted by `Dataset::from_json_file`.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    fields: Vec<FieldDefinition>,
    #[serde(default)]
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(fields: Vec<FieldDefinition>, records: Vec<Record>) -> Self {
        Self {
            registry: FieldRegistry::new(fields),
            records,
        }
    }

    /// The bundled thirty-employee sample collection.
    pub fn sample() -> Self {
        Self::new(sample::field_definitions(), sample::employees())
    }

    /// Load the dataset at `path`, or the bundled sample when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset at {}", path.display()))?;
        let dataset = Self::from_json_str(&contents)
            .with_context(|| format!("failed to parse dataset at {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            fields = dataset.registry.len(),
            records = dataset.records.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse a `{"fields": [...], "records": [...]}` document.
    ///
    /// Values are kept exactly as written; date strings are only parsed
    /// when a date filter evaluates them.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: DatasetFile = serde_json::from_str(contents)?;
        Ok(Self::new(file.fields, file.records))
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
