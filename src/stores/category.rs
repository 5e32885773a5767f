//! Defines the category store trait.

use crate::{
    Error,
    models::{Category, DatabaseID},
};

/// Looks up the categories that budget entries are recorded against.
///
/// Categories are maintained outside this application, so the store only
/// reads them.
pub trait CategoryStore {
    /// Get a category by its ID, or `None` if no category has that ID.
    fn get(&self, category_id: DatabaseID) -> Result<Option<Category>, Error>;
}
