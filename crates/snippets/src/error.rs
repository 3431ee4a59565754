use thiserror::Error;

/// Result type for snippet operations
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Errors that can occur while configuring or rendering snippets
#[derive(Error, Debug)]
pub enum SnippetError {
    /// A budget value was neither a non-negative integer nor an unbounded marker
    #[error("Invalid budget value: {value:?} (expected a non-negative integer or \"inf\")")]
    InvalidBudget { value: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SnippetError {
    /// Create an invalid budget error
    pub fn invalid_budget(value: impl Into<String>) -> Self {
        Self::InvalidBudget {
            value: value.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
