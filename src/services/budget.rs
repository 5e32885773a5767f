//! The budget domain service.
//!
//! Owns the business rules for listing and creating budget entries: the
//! non-zero amount invariant, the category existence check, the atomic
//! two-row write and response shaping. The HTTP layer above stays a thin
//! adapter and the stores below stay free of business logic.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    Error,
    models::{BudgetType, Category, DatabaseID, UserID},
    stores::{BudgetRecord, BudgetStore, CategoryStore, NewBudget},
    validation::CreateBudgetInput,
};

/// The owner recorded on new budget entries until user accounts are
/// implemented.
pub const PLACEHOLDER_USER_ID: UserID = 0;

/// The response payload for the budget list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetListResponse {
    /// Budget entries ordered by date descending, then id descending.
    pub budgets: Vec<BudgetListItem>,
}

/// One budget entry in the budget list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetListItem {
    /// The id of the budget row.
    pub id: DatabaseID,

    /// The date the entry applies to.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,

    /// The category the entry is recorded against.
    pub category: Category,

    /// The amount of money earned (positive) or spent (negative).
    pub amount: i64,

    /// The note attached to the entry.
    pub memo: String,
}

/// The response payload for a newly created budget entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBudgetResult {
    /// The id of the budget row.
    pub id: DatabaseID,

    /// Whether the entry is income or an expense, derived from the sign of
    /// `amount`.
    #[serde(rename = "type")]
    pub budget_type: BudgetType,

    /// The date the entry applies to.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,

    /// The amount of money earned (positive) or spent (negative).
    pub amount: i64,

    /// The note attached to the entry.
    pub memo: String,

    /// The category the entry is recorded against.
    pub category_id: DatabaseID,

    /// The id of the budget base row backing this entry.
    pub budget_base_id: DatabaseID,

    /// The owner of the entry.
    pub user_id: UserID,

    /// When the entry was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// When the entry was last modified.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Map budget records into the budget list response.
///
/// A pure mapping: the store's ordering is preserved and no fields are
/// recomputed.
pub fn to_budget_list_response(records: Vec<BudgetRecord>) -> BudgetListResponse {
    BudgetListResponse {
        budgets: records
            .into_iter()
            .map(|record| BudgetListItem {
                id: record.id,
                date: record.date,
                category: record.category,
                amount: record.amount,
                memo: record.memo,
            })
            .collect(),
    }
}

/// Retrieve every budget entry, newest first.
///
/// # Errors
/// Store errors propagate unchanged.
pub fn get_budget_list(budget_store: &impl BudgetStore) -> Result<BudgetListResponse, Error> {
    let records = budget_store.get_all()?;

    Ok(to_budget_list_response(records))
}

/// Create a budget entry.
///
/// The non-zero amount invariant is checked here as well as in the
/// validator: this function is also callable without going through the HTTP
/// layer, and must not trust that every caller did.
///
/// # Errors
/// Returns [Error::Validation] if `input.amount` is zero and
/// [Error::CategoryNotFound] if `input.category_id` does not refer to an
/// existing category; both checks run before anything is written. Store
/// errors propagate unchanged.
pub fn create_budget(
    input: CreateBudgetInput,
    category_store: &impl CategoryStore,
    budget_store: &mut impl BudgetStore,
) -> Result<CreatedBudgetResult, Error> {
    if input.amount == 0 {
        return Err(Error::Validation(
            "`budget.amount` must be a non-zero integer".to_string(),
        ));
    }

    let Some(category) = category_store.get(input.category_id)? else {
        return Err(Error::CategoryNotFound);
    };

    let created = budget_store.create(NewBudget {
        category_id: category.id,
        amount: input.amount,
        memo: input.memo,
        date: input.date,
        user_id: PLACEHOLDER_USER_ID,
    })?;

    Ok(CreatedBudgetResult {
        id: created.budget.id,
        budget_type: BudgetType::from_amount(created.budget_base.amount),
        date: created.budget.date,
        amount: created.budget_base.amount,
        memo: created.budget_base.memo,
        category_id: created.budget_base.category_id,
        budget_base_id: created.budget_base.id,
        user_id: created.budget.user_id,
        created_at: created.budget.created_at,
        updated_at: created.budget.updated_at,
    })
}
