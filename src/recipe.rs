use crate::ingredient::{parse_ingredient, ParsedIngredient};
use crate::model::RecipeData;
use crate::scale::rescale;

/// Serving count assumed when the API payload does not carry one
pub const DEFAULT_SERVINGS: u32 = 4;

const MINUTES_PER_PERIOD: u32 = 15;
const INGREDIENTS_PER_PERIOD: u32 = 3;

/// Direction of a user-driven serving change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingChange {
    Inc,
    Dec,
}

/// A fetched recipe with its ingredient lines parsed.
///
/// Two ingredient lists are kept: the list as parsed, tied to the serving
/// count captured at parse time, and the displayed list scaled to the current
/// `servings`. Every serving change rebuilds the displayed list from the
/// parsed one, so repeated adjustments cannot accumulate rounding drift.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    pub social_rank: f64,
    /// Estimated cooking time in minutes
    pub time: u32,
    servings: u32,
    base_servings: u32,
    base_ingredients: Vec<ParsedIngredient>,
    ingredients: Vec<ParsedIngredient>,
}

impl Recipe {
    /// Build a recipe from an API payload, parsing every ingredient line
    pub fn from_data(data: RecipeData) -> Self {
        let base_ingredients: Vec<ParsedIngredient> = data
            .ingredients
            .iter()
            .map(|line| parse_ingredient(line))
            .collect();
        let time = estimate_cook_time(base_ingredients.len());

        Recipe {
            id: data.recipe_id,
            title: data.title,
            publisher: data.publisher,
            image_url: data.image_url,
            source_url: data.source_url,
            social_rank: data.social_rank,
            time,
            servings: DEFAULT_SERVINGS,
            base_servings: DEFAULT_SERVINGS,
            ingredients: base_ingredients.clone(),
            base_ingredients,
        }
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Ingredient list scaled to the current serving count
    pub fn ingredients(&self) -> &[ParsedIngredient] {
        &self.ingredients
    }

    /// Step the serving count by one. Decrements stop at a single serving.
    pub fn update_servings(&mut self, change: ServingChange) {
        let new_servings = match change {
            ServingChange::Inc => self.servings + 1,
            ServingChange::Dec => self.servings.saturating_sub(1).max(1),
        };
        self.set_servings(new_servings);
    }

    /// Scale the displayed ingredient list to an arbitrary serving count.
    /// Always recomputed against the list captured at parse time.
    pub fn set_servings(&mut self, new_servings: u32) {
        self.ingredients = rescale(&self.base_ingredients, self.base_servings, new_servings);
        self.servings = new_servings;
    }
}

/// Rough estimate: fifteen minutes per started block of three ingredients
fn estimate_cook_time(ingredient_count: usize) -> u32 {
    let periods = (ingredient_count as u32).div_ceil(INGREDIENTS_PER_PERIOD);
    periods * MINUTES_PER_PERIOD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> RecipeData {
        RecipeData {
            recipe_id: "47746".to_string(),
            title: "Deep Dish Pizza".to_string(),
            publisher: "Closet Cooking".to_string(),
            image_url: "http://example.com/pizza.jpg".to_string(),
            source_url: "http://example.com/pizza".to_string(),
            social_rank: 99.1,
            ingredients: vec![
                "1 1/2 cups plain flour".to_string(),
                "4 cups grated mozzarella cheese".to_string(),
                "Salt and pepper".to_string(),
                "2 onions, chopped".to_string(),
            ],
        }
    }

    #[test]
    fn test_from_data_parses_ingredients() {
        let recipe = Recipe::from_data(sample_data());

        assert_eq!(recipe.servings(), DEFAULT_SERVINGS);
        assert_eq!(recipe.ingredients().len(), 4);
        assert_eq!(recipe.ingredients()[0].count, Some(1.5));
        assert_eq!(recipe.ingredients()[0].unit, "cup");
        assert_eq!(recipe.ingredients()[0].ingredient, "plain flour");
        assert_eq!(recipe.ingredients()[2].count, None);
    }

    #[test]
    fn test_cook_time_estimate() {
        // Four ingredients round up to two blocks of three.
        let recipe = Recipe::from_data(sample_data());
        assert_eq!(recipe.time, 30);

        assert_eq!(estimate_cook_time(0), 0);
        assert_eq!(estimate_cook_time(3), 15);
        assert_eq!(estimate_cook_time(7), 45);
    }

    #[test]
    fn test_increment_scales_up() {
        let mut recipe = Recipe::from_data(sample_data());

        recipe.update_servings(ServingChange::Inc);

        assert_eq!(recipe.servings(), 5);
        assert_eq!(recipe.ingredients()[0].count, Some(1.5 * 5.0 / 4.0));
        assert_eq!(recipe.ingredients()[1].count, Some(5.0));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut recipe = Recipe::from_data(sample_data());

        for _ in 0..10 {
            recipe.update_servings(ServingChange::Dec);
        }

        assert_eq!(recipe.servings(), 1);
        assert_eq!(recipe.ingredients()[1].count, Some(1.0));
    }

    #[test]
    fn test_repeated_stepping_does_not_drift() {
        let mut recipe = Recipe::from_data(sample_data());
        let original: Vec<Option<f64>> =
            recipe.ingredients().iter().map(|i| i.count).collect();

        for _ in 0..1000 {
            recipe.update_servings(ServingChange::Inc);
            recipe.update_servings(ServingChange::Dec);
        }

        assert_eq!(recipe.servings(), DEFAULT_SERVINGS);
        for (now, then) in recipe.ingredients().iter().zip(&original) {
            match (now.count, then) {
                (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                (None, None) => {}
                other => panic!("count shape changed: {other:?}"),
            }
        }
    }

    #[test]
    fn test_null_counts_survive_stepping() {
        let mut recipe = Recipe::from_data(sample_data());

        recipe.update_servings(ServingChange::Inc);
        recipe.update_servings(ServingChange::Inc);

        assert_eq!(recipe.ingredients()[2].count, None);
        assert_eq!(recipe.ingredients()[2].ingredient, "Salt and pepper");
    }
}
