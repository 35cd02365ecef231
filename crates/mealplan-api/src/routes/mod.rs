//! # API Route Modules
//!
//! One module per collection of the persisted document:
//!
//! - `recipes` — list and append recipes.
//! - `plan` — read and replace the Sun–Thu plan.
//! - `grocery` — read and replace the grocery list.
//! - `health` — liveness and readiness probes.
//!
//! Every write handler validates first, then runs one load-modify-save
//! cycle through [`AppState::update`](crate::state::AppState::update).

pub mod grocery;
pub mod health;
pub mod plan;
pub mod recipes;
