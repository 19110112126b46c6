use std::path::{Path, PathBuf};

use stdef_model::{Section, StandardDefinition};

use crate::error::StandardsError;

const STANDARD_ENV_VAR: &str = "STDEF_STANDARD_FILE";
const DEFAULT_STANDARD_FILE: &str = "standard_definition.json";

/// Default location of the standard definition file, overridable via the
/// `STDEF_STANDARD_FILE` environment variable.
pub fn default_standard_path() -> PathBuf {
    if let Ok(path) = std::env::var(STANDARD_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_STANDARD_FILE)
}

/// Parse a standard definition from its JSON text.
pub fn parse_standard_definition(raw: &str) -> serde_json::Result<StandardDefinition> {
    let sections: Vec<Section> = serde_json::from_str(raw)?;
    Ok(StandardDefinition::new(sections))
}

/// Load and index a standard definition file.
pub fn load_standard_definition(path: &Path) -> Result<StandardDefinition, StandardsError> {
    let raw =
        std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    parse_standard_definition(&raw).map_err(|source| StandardsError::Json {
        path: path.to_path_buf(),
        source,
    })
}
