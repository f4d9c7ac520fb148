//! Static goal-to-keyword tables. The upstream API only does single-keyword
//! search, so each goal label expands to the ordered list of keywords the
//! aggregator fans out over.

/// Keyword used when a goal label is not in the table.
pub const FALLBACK_KEYWORD: &str = "healthy";

/// Fitness goal labels offered on the suggestions surface.
pub const FITNESS_GOALS: &[&str] = &["Weight Loss", "Muscle Gain", "Balanced Diet"];

/// Browse categories the home surface offers.
pub const BROWSE_CATEGORIES: &[&str] = &["Breakfast", "Dessert", "Vegetarian", "Vegan"];

/// Expand a fitness goal label into its search keywords. Matching is
/// case-insensitive; anything unrecognized falls back to a single generic
/// keyword.
pub fn expand_goal(label: &str) -> &'static [&'static str] {
    match label.to_lowercase().as_str() {
        "weight loss" => &["salad", "soup", "beans", "tofu", "lentils"],
        "muscle gain" => &["egg", "chicken", "oats", "fish"],
        "balanced diet" => &["rice", "lentils", "chicken", "vegetables", "beans"],
        _ => &[FALLBACK_KEYWORD],
    }
}

/// Expand free search text. Dietary goal names widen into multiple keywords;
/// any other text searches as-is.
pub fn expand_search(query: &str) -> Vec<String> {
    let keywords: &[&str] = match query.to_lowercase().as_str() {
        "keto" => &[
            "chicken", "fish", "eggs", "cheese", "berries", "nuts", "seeds", "avocado",
        ],
        "low carb" => &["zucchini", "avocado", "eggs", "mushroom", "broccoli", "nuts"],
        "high protein" => &[
            "steak", "ham", "bacon", "chicken", "tuna", "salmon", "trout", "crab", "eggs",
        ],
        "vegan" => &["vegan"],
        _ => return vec![query.to_string()],
    };
    keywords.iter().map(|k| k.to_string()).collect()
}
