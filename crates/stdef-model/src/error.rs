use thiserror::Error;

/// Fatal failures while processing one line.
///
/// Both variants abort that line only; whether to skip the line or halt
/// the whole run is the caller's policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line had no delimiter, so it cannot be split into a section
    /// key and sub-section fields.
    #[error("not enough tokens to split line {line:?} into a section and sub-section fields")]
    Tokenization { line: String },

    /// No section with this key exists, or the matching section declares
    /// no sub-sections.
    #[error("no standard definition sub-sections for {section_key}")]
    SchemaResolution { section_key: String },
}

pub type Result<T> = std::result::Result<T, LineError>;
