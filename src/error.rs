use thiserror::Error;

/// Rejected input. The message is meant for the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide matching lists of titles and abstracts (got {titles} titles and {abstracts} abstracts).")]
    LengthMismatch { titles: usize, abstracts: usize },
    #[error("Please provide at least one project.")]
    Empty,
    #[error("No analyzable content: text cleaning resulted in empty content for all projects.")]
    NoAnalyzableContent,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Anything not anticipated by validation. Never carries a partial result.
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl AnalyzeError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalyzeError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
