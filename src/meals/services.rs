use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::seq::SliceRandom;
use tracing::debug;

use crate::mealdb::{Meal, MealApi};

/// Fetch every keyword in turn, merge the results, drop duplicate meal ids
/// (first occurrence wins) and shuffle the remainder. Any single fetch
/// failure aborts the whole run; an empty result for a keyword is not an
/// error.
pub async fn aggregate<S: AsRef<str>>(
    api: &dyn MealApi,
    keywords: &[S],
) -> anyhow::Result<Vec<Meal>> {
    let mut merged = Vec::new();
    for keyword in keywords {
        let batch = api.search(keyword.as_ref()).await?;
        debug!(
            keyword = keyword.as_ref(),
            count = batch.len(),
            "keyword search"
        );
        merged.extend(batch);
    }

    let mut seen = HashSet::new();
    let mut unique: Vec<Meal> = merged
        .into_iter()
        .filter(|meal| seen.insert(meal.id.clone()))
        .collect();
    unique.shuffle(&mut rand::thread_rng());
    Ok(unique)
}

/// Monotonic tag attached to each suggestion response so a client can drop
/// responses that arrive after a newer request has already been answered.
pub fn next_generation() -> u64 {
    static GENERATION: AtomicU64 = AtomicU64::new(0);
    GENERATION.fetch_add(1, Ordering::Relaxed) + 1
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;

    struct StubApi {
        by_keyword: HashMap<String, Vec<Meal>>,
    }

    impl StubApi {
        fn new(entries: &[(&str, &[Meal])]) -> Self {
            let by_keyword = entries
                .iter()
                .map(|(k, meals)| (k.to_string(), meals.to_vec()))
                .collect();
            Self { by_keyword }
        }
    }

    #[async_trait]
    impl MealApi for StubApi {
        async fn search(&self, keyword: &str) -> anyhow::Result<Vec<Meal>> {
            match self.by_keyword.get(keyword) {
                Some(meals) => Ok(meals.clone()),
                None => anyhow::bail!("stub: no fixture for keyword {keyword}"),
            }
        }

        async fn lookup(&self, _meal_id: &str) -> anyhow::Result<Option<Meal>> {
            Ok(None)
        }

        async fn filter_by_category(&self, _category: &str) -> anyhow::Result<Vec<Meal>> {
            Ok(Vec::new())
        }
    }

    fn meal(id: &str, name: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: name.to_string(),
            image_url: format!("https://example.test/{id}.jpg"),
            category: None,
            area: None,
            instructions: None,
            ingredients: Vec::new(),
        }
    }

    #[tokio::test]
    async fn merges_and_dedupes_across_keywords() {
        let a = meal("1", "A");
        let b = meal("2", "B");
        let c = meal("3", "C");
        let api = StubApi::new(&[
            ("egg", &[a.clone(), b.clone()]),
            ("chicken", &[b.clone(), c.clone()]),
        ]);

        let result = aggregate(&api, &["egg", "chicken"])
            .await
            .expect("aggregate should succeed");

        let mut ids: Vec<&str> = result.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn first_occurrence_wins_on_duplicate_id() {
        let first = meal("2", "B from egg");
        let second = meal("2", "B from chicken");
        let api = StubApi::new(&[("egg", &[first]), ("chicken", &[second])]);

        let result = aggregate(&api, &["egg", "chicken"])
            .await
            .expect("aggregate should succeed");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B from egg");
    }

    #[tokio::test]
    async fn output_never_contains_duplicate_ids() {
        let api = StubApi::new(&[
            ("salad", &[meal("1", "A"), meal("2", "B"), meal("1", "A")]),
            ("soup", &[meal("2", "B"), meal("3", "C")]),
        ]);

        let result = aggregate(&api, &["salad", "soup"])
            .await
            .expect("aggregate should succeed");

        let ids: HashSet<&str> = result.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), result.len());
    }

    #[tokio::test]
    async fn empty_keyword_result_is_not_an_error() {
        let api = StubApi::new(&[("egg", &[meal("1", "A")]), ("tofu", &[])]);

        let result = aggregate(&api, &["egg", "tofu"])
            .await
            .expect("aggregate should succeed");

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn any_fetch_failure_aborts_the_run() {
        let api = StubApi::new(&[("egg", &[meal("1", "A")])]);

        let err = aggregate(&api, &["egg", "missing"]).await.unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn generations_strictly_increase() {
        let first = next_generation();
        let second = next_generation();
        assert!(second > first);
    }
}
