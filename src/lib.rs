pub mod app;
pub mod config;
pub mod error;
pub mod favorites;
pub mod mealdb;
pub mod meals;
pub mod state;
pub mod suggestions;
