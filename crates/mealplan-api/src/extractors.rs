//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request DTOs and helpers that turn
//! JSON and form rejections into [`AppError::BadRequest`].

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::{Form, Json};
use mealplan_core::{NewRecipe, ValidationError};

use crate::error::AppError;

/// Request types with rules beyond what serde deserialization checks.
pub trait Validate {
    /// Check the rules, before anything touches the store.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for NewRecipe {
    fn validate(&self) -> Result<(), ValidationError> {
        NewRecipe::validate(self)
    }
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers take the extractor result directly:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate()?;
    Ok(value)
}

/// Extract an urlencoded form body.
pub fn extract_form<T>(result: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    result
        .map(|Form(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
