use serde::Deserialize;

pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub mealdb_base_url: String,
    pub mealdb_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let mealdb_base_url =
            std::env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_MEALDB_BASE_URL.into());
        let mealdb_timeout_secs = std::env::var("MEALDB_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);
        Ok(Self {
            database_url,
            mealdb_base_url,
            mealdb_timeout_secs,
        })
    }
}
