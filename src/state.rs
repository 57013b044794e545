use log::debug;

use crate::api::ApiClient;
use crate::error::ScoutError;
use crate::likes::{Like, LikeRegistry, LikesStore};
use crate::list::ShoppingList;
use crate::recipe::{Recipe, ServingChange};
use crate::search::SearchResults;

/// Everything the application tracks between user actions.
///
/// Each field has a single writer: the controller function named for it.
#[derive(Default)]
pub struct AppState {
    pub search: Option<SearchResults>,
    pub recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: LikeRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Run a search and store its results. Blank queries are ignored.
pub async fn control_search(
    state: &mut AppState,
    client: &ApiClient,
    query: &str,
) -> Result<(), ScoutError> {
    let query = query.trim();
    if query.is_empty() {
        debug!("ignoring empty search query");
        return Ok(());
    }

    let results = client.search(query).await?;
    debug!("storing {} results for '{}'", results.len(), query);
    state.search = Some(SearchResults::new(query, results));
    Ok(())
}

/// Fetch a recipe by id, parse its ingredients and make it current
pub async fn control_recipe(
    state: &mut AppState,
    client: &ApiClient,
    id: &str,
) -> Result<(), ScoutError> {
    let data = client.recipe(id).await?;
    state.recipe = Some(Recipe::from_data(data));
    Ok(())
}

/// Apply a +1/-1 serving change to the current recipe
pub fn control_servings(state: &mut AppState, change: ServingChange) {
    if let Some(recipe) = state.recipe.as_mut() {
        recipe.update_servings(change);
        debug!("servings now {}", recipe.servings());
    }
}

/// Copy every ingredient of the current recipe onto the shopping list
pub fn control_add_to_list(state: &mut AppState) {
    let Some(recipe) = state.recipe.as_ref() else {
        return;
    };
    for ingredient in recipe.ingredients() {
        state.list.add_ingredient(ingredient);
    }
    debug!("shopping list holds {} items", state.list.len());
}

/// Toggle the like for the current recipe and persist the registry.
/// Returns whether the recipe is liked afterwards.
pub fn control_like(state: &mut AppState, store: &dyn LikesStore) -> Result<bool, ScoutError> {
    let Some(recipe) = state.recipe.as_ref() else {
        return Ok(false);
    };
    let liked = state.likes.toggle(Like::from(recipe));
    store.save(state.likes.likes())?;
    Ok(liked)
}

/// Restore previously liked recipes on startup
pub fn restore_likes(state: &mut AppState, store: &dyn LikesStore) -> Result<(), ScoutError> {
    state.likes = LikeRegistry::from_saved(store.load()?);
    debug!("restored {} liked recipes", state.likes.len());
    Ok(())
}
