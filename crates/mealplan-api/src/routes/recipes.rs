//! # Recipes API
//!
//! - `GET /api/recipes` — every recipe, in creation order
//! - `POST /api/recipes` — add a recipe
//!
//! Recipes are append-only: there is no update or delete endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mealplan_core::{NewRecipe, Recipe};

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the recipes router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/recipes", get(list_recipes).post(create_recipe))
}

/// GET /api/recipes — List all recipes.
#[utoipa::path(
    get,
    path = "/api/recipes",
    responses(
        (status = 200, description = "All recipes", body = Vec<Recipe>),
    ),
    tag = "recipes"
)]
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, AppError> {
    Ok(Json(state.load()?.recipes))
}

/// POST /api/recipes — Add a recipe.
///
/// `title` and `url` are required; the rest default. Validation runs before
/// the document is loaded.
#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body = NewRecipe,
    responses(
        (status = 200, description = "Recipe created", body = Recipe),
        (status = 400, description = "title and url required", body = crate::error::ErrorBody),
    ),
    tag = "recipes"
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<Json<Recipe>, AppError> {
    let new = extract_validated_json(body)?;
    let recipe = state.update(|doc| doc.add_recipe(new).map_err(AppError::from))?;
    tracing::info!(id = %recipe.id, title = %recipe.title, "recipe added");
    Ok(Json(recipe))
}
