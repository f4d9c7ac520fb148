use serde::{Deserialize, Serialize};

use crate::mealdb::{Ingredient, Meal};
use crate::meals::goals;

/// List-view projection: what the browse, search and suggestion lists show.
#[derive(Debug, Serialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl From<Meal> for MealSummary {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            image_url: meal.image_url,
        }
    }
}

/// Detail-view payload with the full ingredient list.
#[derive(Debug, Serialize)]
pub struct MealDetails {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl From<Meal> for MealDetails {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            image_url: meal.image_url,
            category: meal.category,
            area: meal.area,
            instructions: meal.instructions,
            ingredients: meal.ingredients,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    goals::BROWSE_CATEGORIES[0].to_string()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}
