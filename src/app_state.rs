//! Implements a struct that holds the state of the REST server.

use crate::stores::{BudgetStore, CategoryStore};

/// The state of the REST server.
///
/// Cloned into each request handler. Store implementations share their
/// underlying connection, so clones observe the same data.
#[derive(Debug, Clone)]
pub struct AppState<C, B>
where
    C: CategoryStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    /// The store for looking up [categories](crate::models::Category).
    pub category_store: C,

    /// The store for managing [budget entries](crate::models::Budget).
    pub budget_store: B,
}

impl<C, B> AppState<C, B>
where
    C: CategoryStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    /// Create a new [AppState] from explicitly constructed stores.
    pub fn new(category_store: C, budget_store: B) -> Self {
        Self {
            category_store,
            budget_store,
        }
    }
}
