use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Path of the JSON file liked recipes are persisted to
    #[serde(default = "default_likes_path")]
    pub likes_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout: default_timeout(),
            results_per_page: default_results_per_page(),
            likes_path: default_likes_path(),
        }
    }
}

// Default value functions
fn default_api_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_results_per_page() -> usize {
    10
}

fn default_likes_path() -> String {
    "likes.json".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCOUT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCOUT__API_BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_SCOUT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
