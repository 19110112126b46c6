pub mod codes;
pub mod datatype;
pub mod error;
pub mod record;
pub mod schema;

pub use codes::ErrorCode;
pub use datatype::DataType;
pub use error::{LineError, Result};
pub use record::FieldRecord;
pub use schema::{FieldConstraint, Section, StandardDefinition};
