//! Defines the budget store trait and the records it exchanges.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{Budget, BudgetBase, Category, DatabaseID, UserID},
};

/// Handles the creation and retrieval of budget entries.
pub trait BudgetStore {
    /// Retrieve every budget entry joined with its amount, memo and
    /// category, ordered by date descending then id descending.
    fn get_all(&self) -> Result<Vec<BudgetRecord>, Error>;

    /// Create the two rows that make up a budget entry.
    ///
    /// Implementers must insert the budget base and budget rows as a single
    /// atomic unit: if the second insert fails, the first must not persist.
    fn create(&mut self, new_budget: NewBudget) -> Result<CreatedBudget, Error>;
}

/// One row of the budget list: a budget entry joined with its category.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRecord {
    /// The id of the budget row.
    pub id: DatabaseID,

    /// The date the entry applies to.
    pub date: OffsetDateTime,

    /// The amount of money earned (positive) or spent (negative).
    pub amount: i64,

    /// The note attached to the entry.
    pub memo: String,

    /// The category the entry is recorded against.
    pub category: Category,
}

/// The data needed to create a budget entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    /// The category the entry is recorded against.
    pub category_id: DatabaseID,

    /// The amount of money earned (positive) or spent (negative).
    pub amount: i64,

    /// The note attached to the entry.
    pub memo: String,

    /// The date the entry applies to.
    pub date: OffsetDateTime,

    /// The owner of the entry.
    pub user_id: UserID,
}

/// The pair of rows created for one budget entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedBudget {
    /// The row holding the entry's amount, memo and category.
    pub budget_base: BudgetBase,

    /// The row holding the entry's date, owner and audit timestamps.
    pub budget: Budget,
}
