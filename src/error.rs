use thiserror::Error;

/// Errors that can occur while talking to the recipe backend or generating suggestions
#[derive(Error, Debug)]
pub enum BoardError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with an `error` field
    #[error("{0}")]
    Backend(String),

    /// A recipe lookup was attempted with an empty ingredient list
    #[error("No ingredients provided")]
    NoIngredients,

    /// The suggester could not produce recipes
    #[error("Suggestion failed: {0}")]
    Suggestion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
