use serde::Deserialize;

/// Body of `PUT /favorites/:meal_id`. The meal id comes from the path.
#[derive(Debug, Deserialize)]
pub struct UpsertFavoriteRequest {
    pub name: String,
    pub image_url: String,
}
