use stdef_model::{ErrorCode, FieldConstraint, FieldRecord};

use crate::Process;
use crate::classify::classify;

/// Validates one raw positional value against one declared constraint.
///
/// `raw` is `None` when the line supplied no field at this position; a
/// present-but-empty field is classified normally and is not considered
/// missing.
#[derive(Debug)]
pub struct FieldProcessor<'a> {
    section_key: &'a str,
    constraint: &'a FieldConstraint,
    raw: Option<&'a str>,
}

impl<'a> FieldProcessor<'a> {
    pub fn new(
        section_key: &'a str,
        constraint: &'a FieldConstraint,
        raw: Option<&'a str>,
    ) -> Self {
        Self {
            section_key,
            constraint,
            raw,
        }
    }

    /// The normalized value: tokens keep surrounding whitespace from the
    /// raw split, so trim before classification and length checks.
    fn value(&self) -> &'a str {
        self.raw.map(str::trim).unwrap_or_default()
    }

    fn length_valid(&self, value: &str) -> bool {
        !value.is_empty() && value.chars().count() <= self.constraint.max_length as usize
    }

    fn type_valid(&self, value: &str) -> bool {
        classify(value) == self.constraint.data_type
    }
}

impl Process for FieldProcessor<'_> {
    type Output = FieldRecord;

    fn process(&self) -> FieldRecord {
        let value = self.value();
        let missing = self.raw.is_none();
        let code =
            ErrorCode::from_outcome(missing, self.length_valid(value), self.type_valid(value));
        FieldRecord {
            section: self.section_key.to_string(),
            sub_section: self.constraint.key.clone(),
            given_type: classify(value),
            expected_type: self.constraint.data_type,
            given_length: (!value.is_empty()).then(|| value.chars().count()),
            expected_max_length: self.constraint.max_length,
            code,
            message: code.message(self.section_key, self.constraint),
        }
    }
}
