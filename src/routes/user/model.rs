use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::ApiError;
use crate::utils::hash_password;

#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response keeps the flat `{success, token, user}` shape the
/// dashboard shell stores verbatim as its session record.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: Profile,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

const USER_COLUMNS: &str =
    "id, first_name, last_name, username, email, role, password_hash, created_at, updated_at";

impl User {
    pub async fn create(pool: &PgPool, req: CreateUserRequest) -> Result<Self, ApiError> {
        let password_hash = hash_password(&req.password)?;
        let role = if req.role.is_empty() {
            "staff".to_string()
        } else {
            req.role
        };

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, username, email, role, password_hash)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, first_name, last_name, username, email, role, password_hash, created_at, updated_at",
        )
        .bind(req.first_name)
        .bind(req.last_name)
        .bind(req.username)
        .bind(req.email)
        .bind(role)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, ApiError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<Self>, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn verify_login(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        crate::utils::verify_password(password, &self.password_hash)
    }

    /// Partial update: unset fields keep their stored values. A supplied
    /// password is re-hashed before it reaches the database.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: UpdateUserRequest,
    ) -> Result<Option<Self>, ApiError> {
        let password_hash = match req.password {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET
                first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                username = COALESCE($3, username),
                email = COALESCE($4, email),
                role = COALESCE($5, role),
                password_hash = COALESCE($6, password_hash),
                updated_at = NOW()
             WHERE id = $7
             RETURNING id, first_name, last_name, username, email, role, password_hash, created_at, updated_at",
        )
        .bind(req.first_name)
        .bind(req.last_name)
        .bind(req.username)
        .bind(req.email)
        .bind(req.role)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Profile {
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::utils::{generate_token, verify_token};
    use chrono::Utc;

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            username: "admin".into(),
            email: "admin@example.com".into(),
            role: "admin".into(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/dashboard".into(),
            jwt_secret: "test-secret".into(),
            jwt_expiration_secs: 24 * 3600,
            server_host: "::".into(),
            server_port: 3000,
        }
    }

    // The login success path, minus the lookup: stored hash verifies, the
    // issued token carries the user's claims, and the profile exposes
    // exactly the stored fields.
    #[tokio::test]
    async fn matching_credentials_verify_and_issue_a_token_with_the_profile() {
        let user = stored_user("correct");
        assert!(user.verify_login("correct").await.unwrap());

        let config = test_config();
        let token = generate_token(user.id, &user.username, &user.role, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "admin");

        let profile = Profile::from(user);
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.last_name, "Lovelace");
        assert_eq!(profile.role, "admin");
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        let user = stored_user("correct");
        assert!(!user.verify_login("wrong").await.unwrap());
    }
}
