use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::datatype::DataType;
use crate::error::LineError;

/// One declared sub-section (LXY) within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraint {
    /// Sub-section identifier (e.g. "L11").
    pub key: String,
    /// Expected data type for values in this position.
    pub data_type: DataType,
    /// Maximum accepted value length.
    pub max_length: u32,
}

/// One section (LX) of the standard definition.
///
/// `sub_sections` defaults to empty when the JSON entry omits the key;
/// such sections are rejected lazily, the first time a line references
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    #[serde(default)]
    pub sub_sections: Vec<FieldConstraint>,
}

/// A loaded standard definition with an exact-match section index.
///
/// The index is built once at construction so per-line resolution does
/// not re-scan the section list. The first occurrence wins when a key
/// appears more than once.
#[derive(Debug, Clone, Default)]
pub struct StandardDefinition {
    sections: Vec<Section>,
    index: BTreeMap<String, usize>,
}

impl StandardDefinition {
    pub fn new(sections: Vec<Section>) -> Self {
        let mut index = BTreeMap::new();
        for (position, section) in sections.iter().enumerate() {
            index.entry(section.key.clone()).or_insert(position);
        }
        Self { sections, index }
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up the constraints declared for a section key.
    ///
    /// A known section without sub-sections is treated identically to an
    /// unknown key: neither can produce field records.
    pub fn resolve(&self, key: &str) -> Result<&[FieldConstraint], LineError> {
        let constraints = self
            .index
            .get(key)
            .map(|&position| self.sections[position].sub_sections.as_slice())
            .unwrap_or_default();
        if constraints.is_empty() {
            return Err(LineError::SchemaResolution {
                section_key: key.to_string(),
            });
        }
        Ok(constraints)
    }
}
