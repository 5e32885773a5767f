//! Implements a SQLite backed budget store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::{OffsetDateTime, UtcOffset};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Budget, BudgetBase},
    stores::{BudgetRecord, BudgetStore, CreatedBudget, NewBudget, sqlite::SQLiteCategoryStore},
};

/// Stores budget entries in a SQLite database.
///
/// Note that because a budget entry references the
/// [Category](crate::models::Category) model, the category table must be set
/// up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteBudgetStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBudgetStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl BudgetStore for SQLiteBudgetStore {
    /// Retrieve every budget entry with its amount, memo and category.
    ///
    /// Rows come back ordered by date descending, then id descending, so
    /// entries on the same date have a deterministic order.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn get_all(&self) -> Result<Vec<BudgetRecord>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT b.id, b.date, bb.amount, bb.memo, c.id, c.name
                 FROM budget b
                 INNER JOIN budget_base bb ON b.budget_base_id = bb.id
                 INNER JOIN category c ON bb.category_id = c.id
                 ORDER BY b.date DESC, b.id DESC;",
            )?
            .query_map([], |row| {
                Ok(BudgetRecord {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    amount: row.get(2)?,
                    memo: row.get(3)?,
                    category: SQLiteCategoryStore::map_row_with_offset(row, 4)?,
                })
            })?
            .map(|maybe_record| maybe_record.map_err(|error| error.into()))
            .collect()
    }

    /// Create the budget base and budget rows for one entry.
    ///
    /// Both inserts run in a single SQL transaction: if either fails,
    /// neither row persists. Dates are normalized to UTC before they are
    /// stored so the date column sorts chronologically.
    ///
    /// # Errors
    /// This function will return an error if `new_budget.category_id` does
    /// not refer to a valid category, or if there is some other SQL error.
    fn create(&mut self, new_budget: NewBudget) -> Result<CreatedBudget, Error> {
        let connection = self.connection.lock().unwrap();
        let tx = connection.unchecked_transaction()?;

        let date = new_budget.date.to_offset(UtcOffset::UTC);
        let now = OffsetDateTime::now_utc();

        let budget_base = tx
            .prepare(
                "INSERT INTO budget_base (category_id, amount, memo)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, category_id, amount, memo",
            )?
            .query_row(
                (new_budget.category_id, new_budget.amount, &new_budget.memo),
                BudgetBase::map_row,
            )?;

        let budget = tx
            .prepare(
                "INSERT INTO budget (budget_base_id, user_id, date, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, budget_base_id, user_id, date, created_at, updated_at",
            )?
            .query_row(
                (budget_base.id, new_budget.user_id, date, now, now),
                Budget::map_row,
            )?;

        tx.commit()?;

        Ok(CreatedBudget {
            budget_base,
            budget,
        })
    }
}

impl CreateTable for SQLiteBudgetStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS budget_base (
                id INTEGER PRIMARY KEY,
                category_id INTEGER NOT NULL,
                amount INTEGER NOT NULL CHECK (amount <> 0),
                memo TEXT NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id)
            );",
            (),
        )?;

        connection.execute(
            "CREATE TABLE IF NOT EXISTS budget (
                id INTEGER PRIMARY KEY,
                budget_base_id INTEGER NOT NULL,
                user_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(budget_base_id) REFERENCES budget_base(id)
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for BudgetBase {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(BudgetBase {
            id: row.get(offset)?,
            category_id: row.get(offset + 1)?,
            amount: row.get(offset + 2)?,
            memo: row.get(offset + 3)?,
        })
    }
}

impl MapRow for Budget {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Budget {
            id: row.get(offset)?,
            budget_base_id: row.get(offset + 1)?,
            user_id: row.get(offset + 2)?,
            date: row.get(offset + 3)?,
            created_at: row.get(offset + 4)?,
            updated_at: row.get(offset + 5)?,
        })
    }
}

#[cfg(test)]
mod budget_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        Error,
        db::initialize,
        stores::{BudgetStore, NewBudget},
    };

    use super::SQLiteBudgetStore;

    fn get_test_store() -> (SQLiteBudgetStore, Arc<Mutex<Connection>>) {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
            .execute("INSERT INTO category (name) VALUES ('Salary');", ())
            .expect("Could not create test category");
        let connection = Arc::new(Mutex::new(connection));

        (SQLiteBudgetStore::new(connection.clone()), connection)
    }

    fn new_budget(amount: i64, date: time::OffsetDateTime) -> NewBudget {
        NewBudget {
            category_id: 1,
            amount,
            memo: "salary".to_string(),
            date,
            user_id: 0,
        }
    }

    #[test]
    fn create_inserts_both_rows() {
        let (mut store, connection) = get_test_store();
        let date = datetime!(2026-02-20 0:00 UTC);

        let created = store
            .create(new_budget(5000, date))
            .expect("Could not create budget entry");

        assert_eq!(created.budget_base.category_id, 1);
        assert_eq!(created.budget_base.amount, 5000);
        assert_eq!(created.budget_base.memo, "salary");
        assert_eq!(created.budget.budget_base_id, created.budget_base.id);
        assert_eq!(created.budget.user_id, 0);
        assert_eq!(created.budget.date, date);
        assert_eq!(created.budget.created_at, created.budget.updated_at);

        let connection = connection.lock().unwrap();
        let base_count: i64 = connection
            .query_row("SELECT COUNT(*) FROM budget_base;", [], |row| row.get(0))
            .unwrap();
        let budget_count: i64 = connection
            .query_row("SELECT COUNT(*) FROM budget;", [], |row| row.get(0))
            .unwrap();
        assert_eq!((base_count, budget_count), (1, 1));
    }

    #[test]
    fn create_with_invalid_category_persists_nothing() {
        let (mut store, connection) = get_test_store();

        let result = store.create(NewBudget {
            category_id: 999,
            amount: 5000,
            memo: "salary".to_string(),
            date: datetime!(2026-02-20 0:00 UTC),
            user_id: 0,
        });

        assert!(matches!(result, Err(Error::SqlError(_))));

        let connection = connection.lock().unwrap();
        let base_count: i64 = connection
            .query_row("SELECT COUNT(*) FROM budget_base;", [], |row| row.get(0))
            .unwrap();
        let budget_count: i64 = connection
            .query_row("SELECT COUNT(*) FROM budget;", [], |row| row.get(0))
            .unwrap();
        assert_eq!((base_count, budget_count), (0, 0));
    }

    #[test]
    fn get_all_returns_empty_list_for_empty_store() {
        let (store, _connection) = get_test_store();

        let records = store.get_all().expect("Could not get budget entries");

        assert!(records.is_empty());
    }

    #[test]
    fn get_all_joins_entry_with_category() {
        let (mut store, _connection) = get_test_store();
        let date = datetime!(2026-02-10 0:00 UTC);
        let created = store.create(new_budget(12000, date)).unwrap();

        let records = store.get_all().expect("Could not get budget entries");

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, created.budget.id);
        assert_eq!(record.date, date);
        assert_eq!(record.amount, 12000);
        assert_eq!(record.memo, "salary");
        assert_eq!(record.category.id, 1);
        assert_eq!(record.category.name, "Salary");
    }

    #[test]
    fn get_all_orders_by_date_then_id_descending() {
        let (mut store, _connection) = get_test_store();

        let oldest = store
            .create(new_budget(-500, datetime!(2026-02-10 0:00 UTC)))
            .unwrap();
        let newest = store
            .create(new_budget(1000, datetime!(2026-02-20 0:00 UTC)))
            .unwrap();
        let same_date_as_oldest = store
            .create(new_budget(-800, datetime!(2026-02-10 0:00 UTC)))
            .unwrap();

        let records = store.get_all().expect("Could not get budget entries");

        let ids: Vec<_> = records.iter().map(|record| record.id).collect();
        assert_eq!(
            ids,
            vec![newest.budget.id, same_date_as_oldest.budget.id, oldest.budget.id]
        );
    }
}
