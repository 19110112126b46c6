use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FieldConstraint;

/// The five validation outcomes for a declared field.
///
/// These are first-class results of correct operation, never raised as
/// errors. The message wording is a compatibility surface consumed by the
/// summary artifact; change it only together with its consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    E01,
    E02,
    E03,
    E04,
    E05,
}

impl ErrorCode {
    /// All codes, in taxonomy order.
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::E01,
        ErrorCode::E02,
        ErrorCode::E03,
        ErrorCode::E04,
        ErrorCode::E05,
    ];

    /// Select the code for one field outcome.
    ///
    /// A missing field is E05 regardless of the validity flags; the
    /// remaining four cases form a pure decision table over
    /// `(length_valid, type_valid)`.
    pub fn from_outcome(missing: bool, length_valid: bool, type_valid: bool) -> Self {
        if missing {
            return ErrorCode::E05;
        }
        match (length_valid, type_valid) {
            (true, true) => ErrorCode::E01,
            (true, false) => ErrorCode::E02,
            (false, true) => ErrorCode::E03,
            (false, false) => ErrorCode::E04,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E01 => "E01",
            ErrorCode::E02 => "E02",
            ErrorCode::E03 => "E03",
            ErrorCode::E04 => "E04",
            ErrorCode::E05 => "E05",
        }
    }

    /// Short description used by the run summary table.
    pub fn describe(self) -> &'static str {
        match self {
            ErrorCode::E01 => "Passes all validation criteria",
            ErrorCode::E02 => "Valid length, wrong data type",
            ErrorCode::E03 => "Valid data type, excessive length",
            ErrorCode::E04 => "Fails both validation criteria",
            ErrorCode::E05 => "Declared field missing from line",
        }
    }

    /// Format the summary message for one field outcome.
    pub fn message(self, section_key: &str, constraint: &FieldConstraint) -> String {
        match self {
            ErrorCode::E01 => format!(
                "{} field under segment {} passes all the validation criteria",
                constraint.key, section_key
            ),
            ErrorCode::E02 => format!(
                "{} field under section {} fails the data type (expected: {}) validation, \
                 however it passes the max length ({}) validation",
                constraint.key, section_key, constraint.data_type, constraint.max_length
            ),
            ErrorCode::E03 => format!(
                "{} field under section {} fails the max length (expected: {}) validation, \
                 however it passes the data type ({}) validation",
                constraint.key, section_key, constraint.max_length, constraint.data_type
            ),
            ErrorCode::E04 => format!(
                "{} field under section {} fails all the validation criteria.",
                constraint.key, section_key
            ),
            ErrorCode::E05 => format!(
                "{} field under section {} is missing.",
                constraint.key, section_key
            ),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
