use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

use super::dto::{BrowseParams, MealDetails, MealSummary, SearchParams};
use super::{goals, services};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(browse_meals))
        .route("/meals/categories", get(list_categories))
        .route("/meals/search", get(search_meals))
        .route("/meals/:id", get(get_meal))
}

#[instrument(skip(state))]
pub async fn browse_meals(
    State(state): State<AppState>,
    Query(p): Query<BrowseParams>,
) -> ApiResult<Json<Vec<MealSummary>>> {
    let meals = state
        .mealdb
        .filter_by_category(&p.category)
        .await
        .map_err(ApiError::Upstream)?;
    info!(category = %p.category, count = meals.len(), "browse");
    Ok(Json(meals.into_iter().map(MealSummary::from).collect()))
}

pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(goals::BROWSE_CATEGORIES.to_vec())
}

#[instrument(skip(state))]
pub async fn search_meals(
    State(state): State<AppState>,
    Query(p): Query<SearchParams>,
) -> ApiResult<Json<Vec<MealSummary>>> {
    let query = p.q.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Search query must not be blank"));
    }

    let keywords = goals::expand_search(query);
    let meals = services::aggregate(state.mealdb.as_ref(), &keywords)
        .await
        .map_err(ApiError::Upstream)?;
    info!(query, keywords = keywords.len(), count = meals.len(), "search");
    Ok(Json(meals.into_iter().map(MealSummary::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MealDetails>> {
    let meal = state
        .mealdb
        .lookup(&id)
        .await
        .map_err(ApiError::Upstream)?
        .ok_or(ApiError::NotFound("Meal"))?;
    Ok(Json(MealDetails::from(meal)))
}
