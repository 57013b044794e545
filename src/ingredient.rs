use serde::{Deserialize, Serialize};

/// Spelling variants rewritten to their canonical unit token before any other
/// processing. Matching is case-sensitive and whole-token only.
const UNIT_VARIANTS: [(&str, &str); 8] = [
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// Closed vocabulary of unit tokens recognized after normalization
const CANONICAL_UNITS: [&str; 7] = ["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

/// Separators accepted inside a range token like "4-6"
const RANGE_SEPARATORS: [char; 2] = ['-', '\u{2013}'];

/// A single ingredient line after parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Quantity, `None` when the line carried no usable number
    pub count: Option<f64>,
    /// Canonical unit token, empty when none was detected
    pub unit: String,
    /// Remaining descriptive text, qualifiers included
    pub ingredient: String,
}

/// Parse one raw ingredient line into a structured record.
///
/// Total over arbitrary input: a line without a recognizable quantity or unit
/// comes back with `count: None` and an empty unit, and a line consisting of
/// nothing but quantity and unit tokens is returned verbatim as the
/// ingredient text. Parenthetical qualifiers stay inside the name.
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    let trimmed = raw.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().map(canonical_token).collect();

    let (count, consumed) = extract_count(&tokens);

    let (unit, consumed) = match tokens.get(consumed) {
        Some(token) if CANONICAL_UNITS.contains(token) => ((*token).to_string(), consumed + 1),
        _ => (String::new(), consumed),
    };

    let ingredient = tokens[consumed..].join(" ");
    if ingredient.is_empty() {
        // Nothing left to name the ingredient; hand the line back untouched.
        return ParsedIngredient {
            count: None,
            unit: String::new(),
            ingredient: trimmed.to_string(),
        };
    }

    ParsedIngredient {
        count,
        unit,
        ingredient,
    }
}

/// Whole-token variant lookup; "cupcakes" must come through unchanged.
fn canonical_token(token: &str) -> &str {
    UNIT_VARIANTS
        .iter()
        .find(|(variant, _)| *variant == token)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(token)
}

/// Pull a quantity off the front of the token list, returning the value and
/// how many tokens it used. Leading tokens that do not form a valid
/// non-negative number consume nothing.
fn extract_count(tokens: &[&str]) -> (Option<f64>, usize) {
    let Some(&first) = tokens.first() else {
        return (None, 0);
    };

    // Ranges like "4-6" collapse to their lower bound.
    if first.contains(&RANGE_SEPARATORS[..]) {
        let lower = first.split(&RANGE_SEPARATORS[..]).next().unwrap_or("");
        return match parse_number(lower) {
            Some(count) => (Some(count), 1),
            None => (None, 0),
        };
    }

    // Mixed number: an integer followed by a fraction, "1 1/2". A malformed
    // fraction in the second slot poisons the whole quantity.
    if let Some(&second) = tokens.get(1) {
        if second.contains('/') {
            if let Some(whole) = parse_whole(first) {
                return match parse_fraction(second) {
                    Some(fraction) => (Some(whole + fraction), 2),
                    None => (None, 0),
                };
            }
        }
    }

    if first.contains('/') {
        return match parse_fraction(first) {
            Some(fraction) => (Some(fraction), 1),
            None => (None, 0),
        };
    }

    match parse_number(first) {
        Some(count) => (Some(count), 1),
        None => (None, 0),
    }
}

/// Plain decimal or vulgar fraction, non-negative
fn parse_number(token: &str) -> Option<f64> {
    if token.contains('/') {
        return parse_fraction(token);
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
}

/// "a/b" as floating-point division; a zero denominator is malformed
fn parse_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator = numerator
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)?;
    let denominator = denominator
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)?;
    Some(numerator / denominator)
}

/// Integer part of a mixed number
fn parse_whole(token: &str) -> Option<f64> {
    token.parse::<u32>().ok().map(f64::from)
}
