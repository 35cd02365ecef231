//! # Grocery API
//!
//! - `GET /api/grocery` — the grocery list (empty if never set)
//! - `POST /api/grocery` — replace the list wholesale, body `{"items": [...]}`
//!
//! Items submitted without an `id` are given one before saving, using the
//! same generator as recipes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mealplan_core::{GroceryItem, GroceryList, ValidationError};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to replace the grocery list.
///
/// `items` is kept as raw JSON so that a non-array value is reported as
/// `items array required` rather than a deserializer message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetGroceryRequest {
    /// The new list, in display order.
    #[serde(default)]
    #[schema(value_type = Vec<GroceryItem>)]
    pub items: serde_json::Value,
}

impl Validate for SetGroceryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.items.is_array() {
            Ok(())
        } else {
            Err(ValidationError::GroceryItemsRequired)
        }
    }
}

/// Build the grocery router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/grocery", get(get_grocery).post(set_grocery))
}

/// GET /api/grocery — Current grocery list.
#[utoipa::path(
    get,
    path = "/api/grocery",
    responses(
        (status = 200, description = "Grocery items in display order", body = Vec<GroceryItem>),
    ),
    tag = "grocery"
)]
pub async fn get_grocery(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroceryItem>>, AppError> {
    Ok(Json(state.load()?.grocery.into_items()))
}

/// POST /api/grocery — Replace the grocery list.
#[utoipa::path(
    post,
    path = "/api/grocery",
    request_body = SetGroceryRequest,
    responses(
        (status = 200, description = "Grocery list stored", body = Vec<GroceryItem>),
        (status = 400, description = "items array required", body = crate::error::ErrorBody),
    ),
    tag = "grocery"
)]
pub async fn set_grocery(
    State(state): State<AppState>,
    body: Result<Json<SetGroceryRequest>, JsonRejection>,
) -> Result<Json<Vec<GroceryItem>>, AppError> {
    let req = extract_validated_json(body)?;
    let mut items: GroceryList = serde_json::from_value(req.items)
        .map_err(|e| AppError::BadRequest(format!("invalid grocery item: {e}")))?;
    items.normalize_ids();

    let stored = state.update(|doc| {
        doc.grocery = items;
        Ok::<_, AppError>(doc.grocery.clone())
    })?;
    tracing::debug!(collection = "grocery", count = stored.len(), "document saved");
    Ok(Json(stored.into_items()))
}
