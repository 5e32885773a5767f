//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

mod budget;
mod category;

pub use budget::SQLiteBudgetStore;
pub use category::SQLiteCategoryStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteCategoryStore, SQLiteBudgetStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the
/// domain models to the database. The connection is opened once here and
/// shared by both stores for the lifetime of the process.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let category_store = SQLiteCategoryStore::new(connection.clone());
    let budget_store = SQLiteBudgetStore::new(connection.clone());

    Ok(AppState::new(category_store, budget_store))
}
