//! Error handling for the resume ATS scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Keyword pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAtsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ResumeAtsError::ExtractionFailed("resume.pdf: bad xref".to_string());
        assert_eq!(err.to_string(), "Text extraction failed: resume.pdf: bad xref");

        let err = ResumeAtsError::InvalidInput("empty file".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty file");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ResumeAtsError = io.into();
        assert!(matches!(err, ResumeAtsError::Io(_)));
    }
}
