use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::ScoutError;
use crate::model::{RecipeData, RecipePreview};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeScout/0.4)";

/// Client for the recipe search API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: u32,
    // Absent entirely when the query matched nothing
    #[serde(default)]
    recipes: Vec<RecipePreview>,
}

#[derive(Debug, Deserialize)]
struct RecipeEnvelope {
    recipe: Option<RecipeData>,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self, ScoutError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(ApiClient {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search recipes matching a free-text query. A query that matches
    /// nothing is an empty result list, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<RecipePreview>, ScoutError> {
        let response: SearchResponse = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?
            .json()
            .await?;

        debug!("search '{}' matched {} recipes", query, response.count);
        Ok(response.recipes)
    }

    /// Fetch one recipe by its API id
    pub async fn recipe(&self, id: &str) -> Result<RecipeData, ScoutError> {
        let envelope: RecipeEnvelope = self
            .client
            .get(format!("{}/get", self.base_url))
            .query(&[("rId", id)])
            .send()
            .await?
            .json()
            .await?;

        envelope
            .recipe
            .ok_or_else(|| ScoutError::RecipeNotFound(id.to_string()))
    }
}
