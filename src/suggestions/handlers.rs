use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{ApiError, ApiResult},
    meals::{goals, services, MealSummary},
    state::AppState,
};

use super::dto::{SuggestParams, SuggestionsResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suggestions", get(suggest_meals))
        .route("/suggestions/goals", get(list_goals))
}

pub async fn list_goals() -> Json<Vec<&'static str>> {
    Json(goals::FITNESS_GOALS.to_vec())
}

#[instrument(skip(state))]
pub async fn suggest_meals(
    State(state): State<AppState>,
    Query(p): Query<SuggestParams>,
) -> ApiResult<Json<SuggestionsResponse>> {
    let keywords = goals::expand_goal(&p.goal);
    let generation = services::next_generation();

    let meals = services::aggregate(state.mealdb.as_ref(), keywords)
        .await
        .map_err(ApiError::Upstream)?;
    info!(goal = %p.goal, generation, count = meals.len(), "suggestions");

    Ok(Json(SuggestionsResponse {
        goal: p.goal,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        generation,
        meals: meals.into_iter().map(MealSummary::from).collect(),
    }))
}
