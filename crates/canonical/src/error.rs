use thiserror::Error;

/// Errors that can occur while parsing a detected upload.
///
/// Syntax errors are terminal and carry the offending filename; they never
/// degrade to a generic document. The only recovered failure in the pipeline
/// is OpenAPI structural validation, which falls through to the next cascade
/// tier instead of erroring.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("{filename}: malformed JSON: {message}")]
    MalformedJson { filename: String, message: String },

    #[error("{filename}: malformed YAML: {message}")]
    MalformedYaml { filename: String, message: String },
}

impl ParseError {
    /// The filename the failure was reported against.
    pub fn filename(&self) -> &str {
        match self {
            ParseError::MalformedJson { filename, .. }
            | ParseError::MalformedYaml { filename, .. } => filename,
        }
    }
}
