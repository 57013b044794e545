use thiserror::Error;

/// Errors that can occur during recipe lookup operations
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API answered but carried no recipe for the requested id
    #[error("No recipe found for id {0}")]
    RecipeNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Filesystem error while loading or saving liked recipes
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted likes file did not contain valid JSON
    #[error("Malformed likes data: {0}")]
    MalformedLikes(#[from] serde_json::Error),
}
