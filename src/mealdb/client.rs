use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use super::{model::MealsEnvelope, Meal, MealApi};

/// Thin reqwest client for a TheMealDB-style recipe API.
#[derive(Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build recipe API client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, endpoint: &str, param: (&str, &str)) -> anyhow::Result<Vec<Meal>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let envelope: MealsEnvelope = self
            .http
            .get(&url)
            .query(&[param])
            .send()
            .await
            .with_context(|| format!("request {endpoint}"))?
            .error_for_status()
            .with_context(|| format!("{endpoint} returned error status"))?
            .json()
            .await
            .with_context(|| format!("decode {endpoint} response"))?;
        let meals = envelope.into_meals();
        debug!(endpoint, param = param.1, count = meals.len(), "recipe API fetch");
        Ok(meals)
    }
}

#[async_trait]
impl MealApi for MealDbClient {
    async fn search(&self, keyword: &str) -> anyhow::Result<Vec<Meal>> {
        self.fetch("search.php", ("s", keyword)).await
    }

    async fn lookup(&self, meal_id: &str) -> anyhow::Result<Option<Meal>> {
        let meals = self.fetch("lookup.php", ("i", meal_id)).await?;
        Ok(meals.into_iter().next())
    }

    async fn filter_by_category(&self, category: &str) -> anyhow::Result<Vec<Meal>> {
        self.fetch("filter.php", ("c", category)).await
    }
}
