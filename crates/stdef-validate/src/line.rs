use stdef_model::{FieldRecord, LineError, StandardDefinition};
use tracing::debug;

use crate::Process;
use crate::field::FieldProcessor;

/// Delimiter separating the section key from its sub-fields.
pub const DELIMITER: char = '&';

/// Signal emitted when a line supplies more fields than the section
/// declares. Non-fatal: the extra fields are dropped and processing
/// continues. How to surface this is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// Number of constraints the section declares.
    pub declared: usize,
    /// Number of raw fields the line supplied.
    pub supplied: usize,
}

/// Everything produced by processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub section_key: String,
    /// One record per declared constraint, in declaration order.
    pub records: Vec<FieldRecord>,
    pub count_mismatch: Option<CountMismatch>,
}

/// Drives one raw line through tokenization, section resolution, count
/// reconciliation and per-field validation.
///
/// Each stage yields an explicit intermediate value; a failure in the
/// first two stages aborts this line only and propagates to the caller.
#[derive(Debug)]
pub struct LineProcessor<'a> {
    line: &'a str,
    standard: &'a StandardDefinition,
}

impl<'a> LineProcessor<'a> {
    pub fn new(line: &'a str, standard: &'a StandardDefinition) -> Self {
        Self { line, standard }
    }

    /// Split the line into its section key and positional sub-fields.
    ///
    /// A line without any delimiter yields a single token and cannot be
    /// separated into a section and sub-sections.
    fn tokenize(&self) -> Result<(&'a str, Vec<&'a str>), LineError> {
        let mut tokens = self.line.split(DELIMITER);
        let section_key = tokens.next().unwrap_or_default();
        let raw_fields: Vec<&str> = tokens.collect();
        if raw_fields.is_empty() {
            return Err(LineError::Tokenization {
                line: self.line.to_string(),
            });
        }
        Ok((section_key, raw_fields))
    }
}

impl Process for LineProcessor<'_> {
    type Output = stdef_model::Result<LineOutcome>;

    fn process(&self) -> Self::Output {
        let (section_key, mut raw_fields) = self.tokenize()?;
        let constraints = self.standard.resolve(section_key)?;

        let count_mismatch = (raw_fields.len() > constraints.len()).then(|| CountMismatch {
            declared: constraints.len(),
            supplied: raw_fields.len(),
        });
        raw_fields.truncate(constraints.len());

        debug!(
            section = section_key,
            fields = raw_fields.len(),
            constraints = constraints.len(),
            "validating line"
        );

        let records = constraints
            .iter()
            .enumerate()
            .map(|(position, constraint)| {
                FieldProcessor::new(section_key, constraint, raw_fields.get(position).copied())
                    .process()
            })
            .collect();

        Ok(LineOutcome {
            section_key: section_key.to_string(),
            records,
            count_mismatch,
        })
    }
}
