//! SQL storage for recipes, with ownership enforced at this layer.

use sqlx::{PgPool, Row};

use super::types::{RecipeCreate, RecipeResponse, RecipeUpdate};
use crate::api::handlers::ApiError;

const RECIPE_COLUMNS: &str = r#"
    id, title, description, ingredients, steps, owner_id,
    to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
    to_char(updated_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
"#;

fn row_to_recipe(row: &sqlx::postgres::PgRow) -> RecipeResponse {
    RecipeResponse {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        ingredients: row.get("ingredients"),
        steps: row.get("steps"),
        owner_id: row.get("owner_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub(super) async fn insert_recipe(
    pool: &PgPool,
    owner_id: i64,
    payload: &RecipeCreate,
) -> Result<RecipeResponse, ApiError> {
    let query = format!(
        "INSERT INTO recipes (title, description, ingredients, steps, owner_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {RECIPE_COLUMNS}"
    );
    let row = sqlx::query(&query)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.ingredients)
        .bind(&payload.steps)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;
    Ok(row_to_recipe(&row))
}

/// Filtered range query: optional case-insensitive substring match over
/// title OR description OR ingredients, newest first, offset/limit paging.
pub(super) async fn list_recipes(
    pool: &PgPool,
    q: Option<&str>,
    skip: i64,
    limit: i64,
) -> Result<Vec<RecipeResponse>, ApiError> {
    let rows = if let Some(q) = q {
        let pattern = format!("%{q}%");
        let query = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes \
             WHERE title ILIKE $1 OR description ILIKE $1 OR ingredients ILIKE $1 \
             ORDER BY created_at DESC, id DESC OFFSET $2 LIMIT $3"
        );
        sqlx::query(&query)
            .bind(&pattern)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?
    } else {
        let query = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes \
             ORDER BY created_at DESC, id DESC OFFSET $1 LIMIT $2"
        );
        sqlx::query(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?
    };

    Ok(rows.iter().map(row_to_recipe).collect())
}

pub(super) async fn fetch_recipe(
    pool: &PgPool,
    id: i64,
) -> Result<Option<RecipeResponse>, ApiError> {
    let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1");
    let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;
    Ok(row.as_ref().map(row_to_recipe))
}

/// Apply a partial update to an owned recipe.
///
/// Absent fields keep their stored values (COALESCE per column); provided
/// fields overwrite, including empty strings. `updated_at` always advances.
pub(super) async fn update_recipe(
    pool: &PgPool,
    id: i64,
    caller_user_id: i64,
    payload: &RecipeUpdate,
) -> Result<RecipeResponse, ApiError> {
    check_ownership(pool, id, caller_user_id, "Not authorized to modify this recipe").await?;

    let query = format!(
        "UPDATE recipes SET \
             title = COALESCE($2, title), \
             description = COALESCE($3, description), \
             ingredients = COALESCE($4, ingredients), \
             steps = COALESCE($5, steps), \
             updated_at = now() \
         WHERE id = $1 RETURNING {RECIPE_COLUMNS}"
    );
    let row = sqlx::query(&query)
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.ingredients)
        .bind(&payload.steps)
        .fetch_optional(pool)
        .await?;

    // Deleted between the ownership check and the update
    row.as_ref()
        .map(row_to_recipe)
        .ok_or(ApiError::NotFound("Recipe not found"))
}

pub(super) async fn delete_recipe(
    pool: &PgPool,
    id: i64,
    caller_user_id: i64,
) -> Result<(), ApiError> {
    check_ownership(pool, id, caller_user_id, "Not authorized to delete this recipe").await?;

    sqlx::query("DELETE FROM recipes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// NotFound for a missing recipe, Forbidden when the caller is not the
/// owner.
async fn check_ownership(
    pool: &PgPool,
    id: i64,
    caller_user_id: i64,
    forbidden_detail: &'static str,
) -> Result<(), ApiError> {
    let row = sqlx::query("SELECT owner_id FROM recipes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let owner_id: i64 = row
        .ok_or(ApiError::NotFound("Recipe not found"))?
        .get("owner_id");

    if owner_id != caller_user_id {
        return Err(ApiError::Forbidden(forbidden_detail));
    }

    Ok(())
}
