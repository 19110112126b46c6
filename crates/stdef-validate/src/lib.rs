//! Validation engine for standard-definition delimited lines.
//!
//! A raw line is tokenized into a section key and positional sub-fields,
//! the section is resolved against the loaded standard definition, and
//! every declared constraint is validated in order, producing one
//! [`FieldRecord`](stdef_model::FieldRecord) per constraint.

mod classify;
mod field;
mod line;

pub use classify::classify;
pub use field::FieldProcessor;
pub use line::{CountMismatch, DELIMITER, LineOutcome, LineProcessor};

/// Shared capability contract: a single processing entry point,
/// implemented by both the line-level and field-level processors.
pub trait Process {
    type Output;

    fn process(&self) -> Self::Output;
}
