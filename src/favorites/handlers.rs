use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

use super::dto::UpsertFavoriteRequest;
use super::repo::{self, Favorite};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites))
        .route(
            "/favorites/:meal_id",
            put(put_favorite).delete(delete_favorite),
        )
}

#[instrument(skip(state))]
pub async fn list_favorites(State(state): State<AppState>) -> ApiResult<Json<Vec<Favorite>>> {
    let favorites = repo::list_all(&state.db).await?;
    Ok(Json(favorites))
}

#[instrument(skip(state, body))]
pub async fn put_favorite(
    State(state): State<AppState>,
    Path(meal_id): Path<String>,
    Json(body): Json<UpsertFavoriteRequest>,
) -> ApiResult<Json<Favorite>> {
    if body.name.trim().is_empty() {
        warn!(%meal_id, "favorite with blank name rejected");
        return Err(ApiError::BadRequest("Favorite name must not be blank"));
    }

    let favorite = repo::upsert(&state.db, &meal_id, &body.name, &body.image_url).await?;
    info!(%meal_id, "favorite saved");
    Ok(Json(favorite))
}

#[instrument(skip(state))]
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(meal_id): Path<String>,
) -> ApiResult<StatusCode> {
    let removed = repo::delete(&state.db, &meal_id).await?;
    info!(%meal_id, removed, "favorite delete");
    Ok(StatusCode::NO_CONTENT)
}
