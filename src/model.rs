use serde::{Deserialize, Serialize};

/// One entry in a search response, enough to render a result row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePreview {
    pub recipe_id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub social_rank: f64,
}

/// Full recipe payload as served by the API, ingredient lines still raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    pub recipe_id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub social_rank: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}
