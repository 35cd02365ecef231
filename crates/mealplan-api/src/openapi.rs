//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented JSON routes into one OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weekly Meal Planner API",
        version = "0.1.0",
        description = "Recipes, the Sun–Thu dinner plan, and the grocery list, persisted as one JSON document."
    ),
    paths(
        crate::routes::recipes::list_recipes,
        crate::routes::recipes::create_recipe,
        crate::routes::plan::get_plan,
        crate::routes::plan::set_plan,
        crate::routes::grocery::get_grocery,
        crate::routes::grocery::set_grocery,
    ),
    components(schemas(
        mealplan_core::Recipe,
        mealplan_core::NewRecipe,
        mealplan_core::RecipeId,
        mealplan_core::Plan,
        mealplan_core::Day,
        mealplan_core::GroceryItem,
        mealplan_core::GroceryItemId,
        crate::error::ErrorBody,
        crate::routes::plan::SetPlanRequest,
        crate::routes::grocery::SetGroceryRequest,
    )),
    tags(
        (name = "recipes", description = "Append-only recipe collection"),
        (name = "plan", description = "Sun–Thu dinner plan"),
        (name = "grocery", description = "Grocery list"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_api_path() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        for expected in ["/api/recipes", "/api/plan", "/api/grocery"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
