use serde::{Deserialize, Serialize};

use crate::meals::MealSummary;

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub goal: String,
}

/// `generation` increases with every suggestion served; a client that fired
/// off several goal changes keeps only the highest tag it has seen and drops
/// the rest, so a slow early response can never overwrite a newer one.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub goal: String,
    pub keywords: Vec<String>,
    pub generation: u64,
    pub meals: Vec<MealSummary>,
}
