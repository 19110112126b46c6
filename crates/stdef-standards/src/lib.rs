//! Loading of standard definition files.
//!
//! A standard definition is a JSON array of sections, each declaring its
//! ordered sub-section constraints. Loading produces the indexed
//! [`StandardDefinition`](stdef_model::StandardDefinition) the validation
//! engine queries per line.

mod error;
mod loader;

pub use error::StandardsError;
pub use loader::{default_standard_path, load_standard_definition, parse_standard_definition};
