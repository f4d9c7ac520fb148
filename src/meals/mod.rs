mod dto;
pub mod goals;
pub mod handlers;
pub mod services;

pub use dto::MealSummary;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
