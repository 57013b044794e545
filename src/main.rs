use std::env;

use recipe_scout::state::{self, AppState};
use recipe_scout::{ApiClient, AppConfig, JsonFileStore, ParsedIngredient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the query from command-line arguments
    let args: Vec<String> = env::args().collect();
    let query = args
        .get(1)
        .ok_or("Please provide a search query as an argument")?;
    let servings: Option<u32> = args.get(2).map(|arg| arg.parse()).transpose()?;

    let config = AppConfig::load()?;
    let client = ApiClient::new(&config)?;
    let store = JsonFileStore::new(&config.likes_path);

    let mut app = AppState::new();
    state::restore_likes(&mut app, &store)?;

    state::control_search(&mut app, &client, query).await?;

    let first_id = {
        let Some(search) = app.search.as_ref() else {
            return Err("Search produced no state".into());
        };
        if search.is_empty() {
            println!("No recipes found for '{query}'");
            return Ok(());
        }
        println!(
            "Results for '{query}' (page 1 of {}):",
            search.total_pages(config.results_per_page)
        );
        for preview in search.page(1, config.results_per_page) {
            let liked = if app.likes.is_liked(&preview.recipe_id) {
                " *"
            } else {
                ""
            };
            println!(
                "  {}  {} ({}){}",
                preview.recipe_id, preview.title, preview.publisher, liked
            );
        }
        search.results[0].recipe_id.clone()
    };

    state::control_recipe(&mut app, &client, &first_id).await?;
    if let (Some(servings), Some(recipe)) = (servings, app.recipe.as_mut()) {
        recipe.set_servings(servings.max(1));
    }

    if let Some(recipe) = app.recipe.as_ref() {
        println!(
            "\n{} — {} servings, about {} minutes",
            recipe.title,
            recipe.servings(),
            recipe.time
        );
        for ingredient in recipe.ingredients() {
            println!("  {}", render_ingredient(ingredient));
        }
    }

    Ok(())
}

/// One display line per ingredient; counts and units only when present
fn render_ingredient(ingredient: &ParsedIngredient) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(count) = ingredient.count {
        parts.push(render_count(count));
    }
    if !ingredient.unit.is_empty() {
        parts.push(ingredient.unit.clone());
    }
    parts.push(ingredient.ingredient.clone());
    parts.join(" ")
}

fn render_count(count: f64) -> String {
    if (count - count.round()).abs() < 1e-9 {
        format!("{}", count.round() as i64)
    } else {
        format!("{count:.2}")
    }
}
