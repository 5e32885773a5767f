//! Defines the `Category` type.

use serde::{Deserialize, Serialize};

use crate::models::DatabaseID;

/// A label that budget entries are recorded against, e.g., 'Groceries',
/// 'Rent', 'Wages'.
///
/// Categories are maintained outside this application: budget entries
/// reference them, but the API never creates or edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The id of the category.
    pub id: DatabaseID,

    /// The name of the category.
    pub name: String,
}
