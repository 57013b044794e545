pub mod api;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod model;
pub mod recipe;
pub mod scale;
pub mod search;
pub mod state;

use log::debug;

pub use crate::api::ApiClient;
pub use crate::config::AppConfig;
pub use crate::error::ScoutError;
pub use crate::ingredient::{parse_ingredient, ParsedIngredient};
pub use crate::likes::{JsonFileStore, Like, LikeRegistry, LikesStore};
pub use crate::list::{ShoppingItem, ShoppingList};
pub use crate::model::{RecipeData, RecipePreview};
pub use crate::recipe::{Recipe, ServingChange, DEFAULT_SERVINGS};
pub use crate::scale::rescale;
pub use crate::search::SearchResults;
pub use crate::state::AppState;

/// Search the configured recipe API for a free-text query
pub async fn search_recipes(query: &str) -> Result<SearchResults, ScoutError> {
    let config = AppConfig::load()?;
    let client = ApiClient::new(&config)?;

    let results = client.search(query).await?;
    debug!("{} results for '{}'", results.len(), query);
    Ok(SearchResults::new(query, results))
}

/// Fetch a recipe by id and parse its ingredient lines
pub async fn fetch_recipe(id: &str) -> Result<Recipe, ScoutError> {
    let config = AppConfig::load()?;
    let client = ApiClient::new(&config)?;

    let data = client.recipe(id).await?;
    Ok(Recipe::from_data(data))
}
