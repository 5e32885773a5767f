//! The budget list and budget creation routes.
//!
//! Handlers stay thin: they parse the request, call the
//! [budget service](crate::services::budget) and let the response mapping on
//! [Error] pick the status code.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    AppState, Error,
    services::budget::{BudgetListResponse, CreatedBudgetResult, create_budget, get_budget_list},
    stores::{BudgetStore, CategoryStore},
    validation::validate_create_budget_request,
};

/// The response payload for a successful budget creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetResponse {
    /// Always "success".
    pub status: String,

    /// The created budget entry.
    pub budget: CreatedBudgetResult,
}

/// A route handler for listing budget entries, newest first.
pub async fn get_budgets<C, B>(
    State(state): State<AppState<C, B>>,
) -> Result<Json<BudgetListResponse>, Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    get_budget_list(&state.budget_store).map(Json)
}

/// A route handler for creating a budget entry.
///
/// The body is taken as raw JSON so the validator can produce field-scoped
/// error messages instead of axum's deserialization rejections.
pub async fn create_budget_endpoint<C, B>(
    State(mut state): State<AppState<C, B>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreateBudgetResponse>), Error>
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    let input = validate_create_budget_request(&body)?;
    let created = create_budget(input, &state.category_store, &mut state.budget_store)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBudgetResponse {
            status: "success".to_string(),
            budget: created,
        }),
    ))
}
