use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;

#[derive(Debug, Serialize, FromRow)]
pub struct Client {
    pub id: i32,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub country_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ClientPayload {
    pub title: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub country_id: i32,
}

impl Client {
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, ApiError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, title, first_name, last_name, email, phone, mobile, country_id
             FROM clients ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(clients)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, ApiError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, title, first_name, last_name, email, phone, mobile, country_id
             FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(client)
    }

    pub async fn create(pool: &PgPool, req: ClientPayload) -> Result<Self, ApiError> {
        let client = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (title, first_name, last_name, email, phone, mobile, country_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, title, first_name, last_name, email, phone, mobile, country_id",
        )
        .bind(req.title)
        .bind(req.first_name)
        .bind(req.last_name)
        .bind(req.email)
        .bind(req.phone)
        .bind(req.mobile)
        .bind(req.country_id)
        .fetch_one(pool)
        .await?;

        Ok(client)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: ClientPayload,
    ) -> Result<Option<Self>, ApiError> {
        let client = sqlx::query_as::<_, Client>(
            "UPDATE clients
             SET title = $1, first_name = $2, last_name = $3, email = $4,
                 phone = $5, mobile = $6, country_id = $7
             WHERE id = $8
             RETURNING id, title, first_name, last_name, email, phone, mobile, country_id",
        )
        .bind(req.title)
        .bind(req.first_name)
        .bind(req.last_name)
        .bind(req.email)
        .bind(req.phone)
        .bind(req.mobile)
        .bind(req.country_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(client)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
