//! # Form UI
//!
//! Server-rendered HTML for the planner. Each card posts an urlencoded form
//! back to the service, which applies the same document edits as the JSON
//! API and redirects to `/` (Post/Redirect/Get).
//!
//! ## Routes
//!
//! - `GET /` — the planner page
//! - `POST /ui/recipes` — add a recipe from the entry form
//! - `POST /ui/plan` — set or clear one day
//! - `POST /ui/grocery` — add/remove rows in the working copy, or save it
//!
//! Failures never leave the user with a blank response: the page is
//! re-rendered with an error banner and the matching status code.

pub mod forms;
pub mod render;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use mealplan_core::{Day, Document, GroceryList, RecipeId};

use crate::error::AppError;
use crate::extractors::extract_form;
use crate::state::AppState;

use self::forms::{GroceryAction, GroceryEdit, PlanForm, RecipeForm};
use self::render::PageView;

/// Build the UI router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/ui/recipes", post(add_recipe))
        .route("/ui/plan", post(set_day))
        .route("/ui/grocery", post(edit_grocery))
}

/// Overrides applied when re-rendering after a failed or partial action.
#[derive(Default)]
struct Rerender {
    recipe_form: Option<RecipeForm>,
    grocery: Option<GroceryList>,
    error: Option<AppError>,
}

/// Render the page from the current document plus `overrides`.
fn render_page(state: &AppState, overrides: Rerender) -> Response {
    let (document, load_error) = match state.load() {
        Ok(doc) => (doc, None),
        Err(err) => (Document::default(), Some(AppError::from(err))),
    };
    let error = overrides.error.or(load_error);

    let status = error
        .as_ref()
        .map(AppError::status)
        .unwrap_or(StatusCode::OK);
    if let Some(AppError::Internal(detail)) = &error {
        tracing::error!(error = %detail, "ui request failed");
    }
    let banner = error.as_ref().map(AppError::public_message);

    let recipe_form = overrides.recipe_form.unwrap_or_else(RecipeForm::fresh);
    let grocery = overrides
        .grocery
        .unwrap_or_else(|| document.grocery.clone());

    let html = render::page(&PageView {
        document: &document,
        grocery: &grocery,
        recipe_form: &recipe_form,
        banner: banner.as_deref(),
    });
    (status, Html(html)).into_response()
}

fn failed(state: &AppState, error: AppError) -> Response {
    render_page(
        state,
        Rerender {
            error: Some(error),
            ..Rerender::default()
        },
    )
}

async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, Rerender::default())
}

async fn add_recipe(
    State(state): State<AppState>,
    body: Result<Form<RecipeForm>, FormRejection>,
) -> Response {
    let form = match extract_form(body) {
        Ok(form) => form,
        Err(err) => return failed(&state, err),
    };
    let new = form.to_new_recipe();
    if let Err(err) = new.validate() {
        return render_page(
            &state,
            Rerender {
                recipe_form: Some(form),
                error: Some(err.into()),
                ..Rerender::default()
            },
        );
    }

    match state.update(|doc| doc.add_recipe(new).map_err(AppError::from)) {
        Ok(recipe) => {
            tracing::info!(id = %recipe.id, title = %recipe.title, "recipe added from form");
            Redirect::to("/").into_response()
        }
        Err(err) => render_page(
            &state,
            Rerender {
                recipe_form: Some(form),
                error: Some(err),
                ..Rerender::default()
            },
        ),
    }
}

async fn set_day(
    State(state): State<AppState>,
    body: Result<Form<PlanForm>, FormRejection>,
) -> Response {
    let result = extract_form(body).and_then(|form| {
        let day: Day = form.day.parse()?;
        let recipe = Some(form.recipe.trim())
            .filter(|r| !r.is_empty())
            .map(RecipeId::new);
        state.update(|doc| {
            doc.plan.set_day(day, recipe);
            Ok::<_, AppError>(())
        })?;
        tracing::debug!(collection = "plan", %day, "document saved");
        Ok(())
    });
    match result {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => failed(&state, err),
    }
}

async fn edit_grocery(
    State(state): State<AppState>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let edit = match extract_form(body).and_then(GroceryEdit::from_pairs) {
        Ok(edit) => edit,
        Err(err) => return failed(&state, err),
    };
    let mut items = edit.items;

    match edit.action {
        GroceryAction::Add => {
            items.push_blank();
            render_page(
                &state,
                Rerender {
                    grocery: Some(items),
                    ..Rerender::default()
                },
            )
        }
        GroceryAction::Remove(index) => {
            let error = match items.remove_at(index) {
                Some(_) => None,
                None => Some(AppError::BadRequest(format!("no grocery row {index}"))),
            };
            render_page(
                &state,
                Rerender {
                    grocery: Some(items),
                    error,
                    ..Rerender::default()
                },
            )
        }
        GroceryAction::Save => {
            let count = items.len();
            let saved = state.update(|doc| {
                let mut list = items.clone();
                list.adopt_extras(&doc.grocery);
                doc.grocery = list;
                Ok::<_, AppError>(())
            });
            match saved {
                Ok(()) => {
                    tracing::debug!(collection = "grocery", count, "document saved");
                    Redirect::to("/").into_response()
                }
                Err(err) => render_page(
                    &state,
                    Rerender {
                        grocery: Some(items),
                        error: Some(err),
                        ..Rerender::default()
                    },
                ),
            }
        }
    }
}
