//! Parses untrusted request bodies into typed creation requests.

use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Error, models::DatabaseID};

/// A budget creation request that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBudgetInput {
    /// The date the entry applies to.
    pub date: OffsetDateTime,

    /// The amount of money earned (positive) or spent (negative).
    pub amount: i64,

    /// The note attached to the entry.
    pub memo: String,

    /// The category the entry is recorded against.
    pub category_id: DatabaseID,
}

/// Validate a `POST /budgets` request body.
///
/// Checks run in a fixed order: the body shape first, then each field of
/// `budget` in declared order (date, amount, memo, categoryId). The first
/// failing check produces the returned message; later fields are not
/// examined.
///
/// # Errors
/// Returns an [Error::Validation] naming the first field that failed.
pub fn validate_create_budget_request(body: &Value) -> Result<CreateBudgetInput, Error> {
    let Some(body) = body.as_object() else {
        return Err(Error::Validation(
            "Request body must be an object".to_string(),
        ));
    };

    let Some(budget) = body.get("budget").and_then(Value::as_object) else {
        return Err(Error::Validation("`budget` is required".to_string()));
    };

    let date = match budget.get("date") {
        Some(Value::String(text)) => OffsetDateTime::parse(text, &Rfc3339).map_err(|_| {
            Error::Validation("`budget.date` must be a valid date string".to_string())
        })?,
        _ => {
            return Err(Error::Validation(
                "`budget.date` must be a string".to_string(),
            ));
        }
    };

    // A missing amount, a non-integer amount and a zero amount all produce
    // the same message.
    let amount = budget
        .get("amount")
        .and_then(Value::as_i64)
        .filter(|&amount| amount != 0)
        .ok_or_else(|| {
            Error::Validation("`budget.amount` must be a non-zero integer".to_string())
        })?;

    let memo = match budget.get("memo") {
        Some(Value::String(text)) => text.clone(),
        _ => {
            return Err(Error::Validation(
                "`budget.memo` must be a string".to_string(),
            ));
        }
    };

    let category_id = budget
        .get("categoryId")
        .and_then(Value::as_i64)
        .filter(|&category_id| category_id > 0)
        .ok_or_else(|| {
            Error::Validation("`budget.categoryId` must be a positive integer".to_string())
        })?;

    Ok(CreateBudgetInput {
        date,
        amount,
        memo,
        category_id,
    })
}
