use thiserror::Error;

/// Everything that can go wrong while importing a bookmark document
///
/// The display text of each variant is what ends up in the error banner.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input text is not valid JSON
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The input is valid JSON but does not have the expected shape
    #[error("Invalid Data Schema")]
    Schema,

    /// The bookmark store rejected a creation request
    #[error("{0}")]
    Create(anyhow::Error),
}

impl ImportError {
    /// Short name of the error kind, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::Parse(_) => "parse",
            ImportError::Schema => "schema",
            ImportError::Create(_) => "create",
        }
    }
}
