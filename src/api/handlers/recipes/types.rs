//! Request/response types for recipe endpoints.
//!
//! These payloads are shared between handlers and `OpenAPI` generation.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecipeCreate {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
}

/// Partial update. An absent field leaves the stored value untouched; a
/// field provided as an empty string is an explicit overwrite.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Query parameters for recipe listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesQuery {
    /// Case-insensitive substring match over title, description, and
    /// ingredients.
    pub q: Option<String>,
    /// Number of records to skip (default 0).
    pub skip: Option<i64>,
    /// Max number of records to return, 1..=100 (default 20).
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_absent_fields_stay_unset() {
        let update: RecipeUpdate = serde_json::from_str(r#"{"description":"new"}"#).unwrap();
        assert!(update.title.is_none());
        assert_eq!(update.description.as_deref(), Some("new"));
        assert!(update.ingredients.is_none());
        assert!(update.steps.is_none());
    }

    #[test]
    fn test_update_empty_string_is_explicit() {
        let update: RecipeUpdate = serde_json::from_str(r#"{"description":""}"#).unwrap();
        assert_eq!(update.description.as_deref(), Some(""));
    }

    #[test]
    fn test_create_requires_title() {
        let result = serde_json::from_str::<RecipeCreate>(r#"{"description":"no title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_query_defaults_to_none() {
        let query: ListRecipesQuery = serde_json::from_str("{}").unwrap();
        assert!(query.q.is_none());
        assert!(query.skip.is_none());
        assert!(query.limit.is_none());
    }
}
