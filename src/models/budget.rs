//! Defines the types that make up one budget entry.
//!
//! A budget entry is split across two records: [BudgetBase] holds what was
//! earned or spent (amount, memo, category) and [Budget] holds when and by
//! whom (date, owner, audit timestamps). Many budget base rows may share a
//! category.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::{DatabaseID, UserID};

/// The monetary fact of a budget entry.
///
/// Created once alongside a [Budget] row, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBase {
    /// The id of the budget base row.
    pub id: DatabaseID,

    /// The category the entry is recorded against.
    pub category_id: DatabaseID,

    /// The amount of money earned (positive) or spent (negative). Never
    /// zero.
    pub amount: i64,

    /// A free-form note attached to the entry.
    pub memo: String,
}

/// The calendar placement and ownership of a budget entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The id of the budget row.
    pub id: DatabaseID,

    /// The budget base row holding the entry's amount, memo and category.
    pub budget_base_id: DatabaseID,

    /// The owner of the entry.
    pub user_id: UserID,

    /// The date the entry applies to.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,

    /// When the entry was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// When the entry was last modified.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Whether a budget entry records money coming in or going out.
///
/// Never persisted: derived from the sign of [BudgetBase::amount] when
/// shaping a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetType {
    /// Money coming in (positive amount).
    Income,
    /// Money going out (negative amount).
    Expense,
}

impl BudgetType {
    /// Derive the entry type from a signed amount.
    ///
    /// Zero amounts are rejected before an entry is persisted, so no type is
    /// ever derived from one.
    pub fn from_amount(amount: i64) -> Self {
        if amount > 0 {
            BudgetType::Income
        } else {
            BudgetType::Expense
        }
    }
}

#[cfg(test)]
mod budget_type_tests {
    use super::BudgetType;

    #[test]
    fn positive_amount_is_income() {
        assert_eq!(BudgetType::from_amount(12000), BudgetType::Income);
    }

    #[test]
    fn negative_amount_is_expense() {
        assert_eq!(BudgetType::from_amount(-3000), BudgetType::Expense);
    }

    #[test]
    fn serializes_as_upper_case() {
        assert_eq!(
            serde_json::to_string(&BudgetType::Income).unwrap(),
            "\"INCOME\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetType::Expense).unwrap(),
            "\"EXPENSE\""
        );
    }
}
