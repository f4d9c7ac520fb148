use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A saved reference to a meal, keyed by the upstream meal id. The primary
/// key makes the upsert idempotent: saving the same meal twice leaves one row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    pub meal_id: String,
    pub name: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub async fn list_all(db: &PgPool) -> Result<Vec<Favorite>, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(
        r#"
        SELECT meal_id, name, image_url, created_at
        FROM favorites
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn upsert(
    db: &PgPool,
    meal_id: &str,
    name: &str,
    image_url: &str,
) -> Result<Favorite, sqlx::Error> {
    sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (meal_id, name, image_url)
        VALUES ($1, $2, $3)
        ON CONFLICT (meal_id) DO UPDATE
            SET name = EXCLUDED.name, image_url = EXCLUDED.image_url
        RETURNING meal_id, name, image_url, created_at
        "#,
    )
    .bind(meal_id)
    .bind(name)
    .bind(image_url)
    .fetch_one(db)
    .await
}

/// Returns whether a row was actually removed; deleting an absent id is fine.
pub async fn delete(db: &PgPool, meal_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM favorites
        WHERE meal_id = $1
        "#,
    )
    .bind(meal_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
