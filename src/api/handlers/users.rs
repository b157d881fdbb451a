//! User directory: lookup and creation backed by the `users` table.

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use utoipa::ToSchema;

/// Internal user record. Carries the password hash and is therefore never
/// serialized; API responses go through [`UserResponse`].
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserRow {
    #[must_use]
    pub fn into_response(self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

const USER_COLUMNS: &str = r#"
    id, email, password_hash, full_name,
    to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
    to_char(updated_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
"#;

fn row_to_user(row: &sqlx::postgres::PgRow) -> UserRow {
    UserRow {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        full_name: row.get("full_name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Point lookup by unique email, exactly as stored (case-sensitive).
///
/// # Errors
/// Returns the underlying database error.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
    let row = sqlx::query(&query).bind(email).fetch_optional(pool).await?;
    Ok(row.as_ref().map(row_to_user))
}

/// Insert a new user row.
///
/// A duplicate email surfaces as a unique-violation database error; callers
/// map it to Conflict via [`is_unique_violation`].
///
/// # Errors
/// Returns the underlying database error.
pub async fn insert_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    full_name: Option<&str>,
) -> Result<UserRow, sqlx::Error> {
    let query = format!(
        "INSERT INTO users (email, password_hash, full_name) VALUES ($1, $2, $3) \
         RETURNING {USER_COLUMNS}"
    );
    let row = sqlx::query(&query)
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .fetch_one(pool)
        .await?;
    Ok(row_to_user(&row))
}

/// Returns `true` when `err` is a database unique-violation (SQLSTATE `23505`).
#[must_use]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_has_no_password_hash() {
        let row = UserRow {
            id: 1,
            email: "cook@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            full_name: Some("Cook".to_string()),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(row.into_response()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "cook@example.com");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}
