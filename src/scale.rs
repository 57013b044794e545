use crate::ingredient::ParsedIngredient;

/// Proportionally rescale a parsed ingredient list from one serving total to
/// another.
///
/// Ingredients without a quantity pass through untouched, as do the unit and
/// name fields of every entry. Both serving counts are expected to be at
/// least 1; keeping them there is the caller's job, not this function's.
pub fn rescale(
    ingredients: &[ParsedIngredient],
    old_servings: u32,
    new_servings: u32,
) -> Vec<ParsedIngredient> {
    let ratio = f64::from(new_servings) / f64::from(old_servings);
    ingredients
        .iter()
        .map(|ingredient| ParsedIngredient {
            count: ingredient.count.map(|count| count * ratio),
            unit: ingredient.unit.clone(),
            ingredient: ingredient.ingredient.clone(),
        })
        .collect()
}
