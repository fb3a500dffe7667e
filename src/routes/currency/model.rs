use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;

/// Currencies are reference data; the dashboard only reads them.
#[derive(Debug, Serialize, FromRow)]
pub struct Currency {
    pub id: i32,
    pub currency_name: String,
    pub currency_symbol: String,
}

impl Currency {
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, ApiError> {
        let currencies = sqlx::query_as::<_, Currency>(
            "SELECT id, currency_name, currency_symbol FROM currencies ORDER BY currency_name",
        )
        .fetch_all(pool)
        .await?;

        Ok(currencies)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, ApiError> {
        let currency = sqlx::query_as::<_, Currency>(
            "SELECT id, currency_name, currency_symbol FROM currencies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(currency)
    }
}
