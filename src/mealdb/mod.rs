use async_trait::async_trait;

mod client;
mod model;

pub use client::MealDbClient;
pub use model::{Ingredient, Meal, MealsEnvelope};

/// Read-only view of the external recipe API. `MealDbClient` is the real
/// implementation; tests substitute a stub.
#[async_trait]
pub trait MealApi: Send + Sync {
    /// Keyword search (`search.php?s=`). An unknown keyword yields an empty list.
    async fn search(&self, keyword: &str) -> anyhow::Result<Vec<Meal>>;
    /// Lookup by meal identifier (`lookup.php?i=`).
    async fn lookup(&self, meal_id: &str) -> anyhow::Result<Option<Meal>>;
    /// Browse by category (`filter.php?c=`). Records carry no detail fields.
    async fn filter_by_category(&self, category: &str) -> anyhow::Result<Vec<Meal>>;
}
