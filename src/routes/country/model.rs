use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;

#[derive(Debug, Serialize, FromRow)]
pub struct Country {
    pub id: i32,
    pub country_name: String,
    pub iso_code_2: Option<String>,
    pub iso_code_3: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CountryPayload {
    #[serde(default)]
    pub country_name: String,
    pub iso_code_2: Option<String>,
    pub iso_code_3: Option<String>,
}

impl Country {
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, ApiError> {
        let countries = sqlx::query_as::<_, Country>(
            "SELECT id, country_name, iso_code_2, iso_code_3 FROM countries ORDER BY country_name",
        )
        .fetch_all(pool)
        .await?;

        Ok(countries)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, ApiError> {
        let country = sqlx::query_as::<_, Country>(
            "SELECT id, country_name, iso_code_2, iso_code_3 FROM countries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(country)
    }

    pub async fn create(pool: &PgPool, req: CountryPayload) -> Result<Self, ApiError> {
        let country = sqlx::query_as::<_, Country>(
            "INSERT INTO countries (country_name, iso_code_2, iso_code_3)
             VALUES ($1, $2, $3)
             RETURNING id, country_name, iso_code_2, iso_code_3",
        )
        .bind(req.country_name)
        .bind(req.iso_code_2)
        .bind(req.iso_code_3)
        .fetch_one(pool)
        .await?;

        Ok(country)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: CountryPayload,
    ) -> Result<Option<Self>, ApiError> {
        let country = sqlx::query_as::<_, Country>(
            "UPDATE countries SET country_name = $1, iso_code_2 = $2, iso_code_3 = $3
             WHERE id = $4
             RETURNING id, country_name, iso_code_2, iso_code_3",
        )
        .bind(req.country_name)
        .bind(req.iso_code_2)
        .bind(req.iso_code_3)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(country)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
