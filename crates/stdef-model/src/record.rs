use serde::Serialize;

use crate::codes::ErrorCode;
use crate::datatype::DataType;

/// One validation outcome for one declared field constraint.
///
/// Serialization drives the CSV report directly: the renamed field names
/// are the report's column headers, and `None`/`Missing` render as empty
/// cells. The formatted message is carried for the summary writer only
/// and never appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Sub-Section")]
    pub sub_section: String,
    #[serde(rename = "Given DataType")]
    pub given_type: DataType,
    #[serde(rename = "Expected DataType")]
    pub expected_type: DataType,
    #[serde(rename = "Given Length")]
    pub given_length: Option<usize>,
    #[serde(rename = "Expected MaxLength")]
    pub expected_max_length: u32,
    #[serde(rename = "Error Code")]
    pub code: ErrorCode,
    #[serde(skip)]
    pub message: String,
}
