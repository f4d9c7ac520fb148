use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Envelope every TheMealDB endpoint wraps its results in. A miss is
/// `{"meals": null}`, not an empty array.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsEnvelope {
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(Meal::from)
            .collect()
    }
}

/// Raw wire record. The upstream pads ingredients into positional
/// `strIngredient1..strIngredient20` / `strMeasure1..strMeasure20` fields,
/// blank or null past the last real ingredient; those land in `extra` and are
/// folded into an ordered list on conversion to `Meal`.
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub image_url: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Option<String>>,
}

impl MealRecord {
    /// Walk the positional pairs in order until the first missing index,
    /// keeping entries whose ingredient name is non-blank. Measures may be
    /// blank even for a kept ingredient ("to taste" entries often are).
    fn ingredients(&self) -> Vec<Ingredient> {
        let mut out = Vec::new();
        for i in 1.. {
            let Some(name) = self.extra.get(&format!("strIngredient{i}")) else {
                break;
            };
            let name = name.as_deref().unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            let measure = self
                .extra
                .get(&format!("strMeasure{i}"))
                .and_then(|m| m.as_deref())
                .unwrap_or("")
                .trim();
            out.push(Ingredient {
                name: name.to_string(),
                measure: measure.to_string(),
            });
        }
        out
    }
}

/// A recipe as the rest of the service sees it: immutable, identified solely
/// by `id`, ingredients as an ordered list with no positional cap.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl From<MealRecord> for Meal {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        Self {
            id: record.id,
            name: record.name,
            image_url: record.image_url,
            category: record.category,
            area: record.area,
            instructions: record.instructions,
            ingredients,
        }
    }
}
