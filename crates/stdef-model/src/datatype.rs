use std::fmt;

use serde::{Deserialize, Serialize};

/// Data types a field value can classify as.
///
/// Standard definitions only ever declare `digits` or `word_characters` as
/// an expected type; `other` and `missing` exist as classification results.
/// `missing` serializes as the empty string, matching the report's
/// empty-cell sentinel for absent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Digits,
    WordCharacters,
    Other,
    #[serde(rename = "")]
    Missing,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Digits => "digits",
            DataType::WordCharacters => "word_characters",
            DataType::Other => "other",
            DataType::Missing => "",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
