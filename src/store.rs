// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

use crate::db;
use crate::error::{Error, Result};
use crate::models::{
    Budget, BudgetPatch, Category, CategoryPatch, Kind, NewBudget, NewCategory, NewTransaction,
    Period, Transaction, TransactionPatch, check_amount,
};
use crate::query::{self, TransactionFilter};

/// The application's single handle to the local database. Constructing
/// a `Ledger` runs the schema migration, so a value of this type is
/// always ready to query; an open or upgrade failure means no handle
/// exists at all.
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        db::migrate(&conn)?;
        Ok(Self { conn })
    }

    /// Open the per-user database at the platform data dir.
    pub fn open_default() -> anyhow::Result<Self> {
        let path = db::db_path()?;
        Ok(Self::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        db::migrate(&conn)?;
        Ok(Self { conn })
    }

    // --- transactions ---

    pub fn add_transaction(&self, tx: NewTransaction) -> Result<i64> {
        check_amount(tx.amount, tx.kind)?;
        self.conn.execute(
            "INSERT INTO transactions(description, amount, category, date, kind)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                tx.description,
                tx.amount.to_string(),
                tx.category,
                tx.date,
                tx.kind.as_str()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn transaction(&self, id: i64) -> Result<Transaction> {
        let found = self
            .conn
            .prepare("SELECT id, description, amount, category, date, kind FROM transactions WHERE id=?1")?
            .query_row(params![id], map_transaction_raw)
            .optional()?;
        match found {
            Some(raw) => raw.build(),
            None => Err(Error::NotFound {
                kind: "transaction",
                id,
            }),
        }
    }

    /// Every transaction in insertion order, narrowed by `filter` in
    /// memory. The secondary indexes are not consulted; a full scan is
    /// fine at the few-thousand-record scale this tool targets.
    pub fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, amount, category, date, kind FROM transactions ORDER BY id",
        )?;
        let rows = stmt.query_map([], map_transaction_raw)?;
        let mut all = Vec::new();
        for row in rows {
            all.push(row?.build()?);
        }
        Ok(query::apply(filter, &all))
    }

    /// Merge `patch` over the stored record and write the result back.
    /// Fails with `NotFound` if the id does not exist; the merged
    /// record is re-validated before the write.
    pub fn update_transaction(&self, id: i64, patch: TransactionPatch) -> Result<()> {
        let current = self.transaction(id)?;
        let merged = Transaction {
            id,
            description: patch.description.unwrap_or(current.description),
            amount: patch.amount.unwrap_or(current.amount),
            category: patch.category.unwrap_or(current.category),
            date: patch.date.unwrap_or(current.date),
            kind: patch.kind.unwrap_or(current.kind),
        };
        check_amount(merged.amount, merged.kind)?;
        self.conn.execute(
            "UPDATE transactions SET description=?1, amount=?2, category=?3, date=?4, kind=?5 WHERE id=?6",
            params![
                merged.description,
                merged.amount.to_string(),
                merged.category,
                merged.date,
                merged.kind.as_str(),
                id
            ],
        )?;
        Ok(())
    }

    /// Idempotent: removing an id that is already gone succeeds.
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(())
    }

    // --- categories ---

    pub fn add_category(&self, category: NewCategory) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO categories(name, kind, color) VALUES (?1, ?2, ?3)",
            params![category.name, category.kind.as_str(), category.color],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, kind, color FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, name, kind, color) = row?;
            out.push(Category {
                id,
                name,
                kind: Kind::parse(&kind)?,
                color,
            });
        }
        Ok(out)
    }

    pub fn category_by_name(&self, name: &str) -> Result<Option<Category>> {
        Ok(self.categories()?.into_iter().find(|c| c.name == name))
    }

    pub fn update_category(&self, id: i64, patch: CategoryPatch) -> Result<()> {
        let current = self
            .categories()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(Error::NotFound { kind: "category", id })?;
        let merged = Category {
            id,
            name: patch.name.unwrap_or(current.name),
            kind: patch.kind.unwrap_or(current.kind),
            color: patch.color.unwrap_or(current.color),
        };
        self.conn.execute(
            "UPDATE categories SET name=?1, kind=?2, color=?3 WHERE id=?4",
            params![merged.name, merged.kind.as_str(), merged.color, id],
        )?;
        Ok(())
    }

    /// Idempotent. Transactions referencing the category keep their
    /// name string; dangling references are accepted.
    pub fn delete_category(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM categories WHERE id=?1", params![id])?;
        Ok(())
    }

    // --- budgets ---

    pub fn add_budget(&self, budget: NewBudget) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO budgets(category, amount, period) VALUES (?1, ?2, ?3)",
            params![
                budget.category,
                budget.amount.to_string(),
                budget.period.as_str()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn budgets(&self) -> Result<Vec<Budget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, amount, period FROM budgets ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, category, amount, period) = row?;
            out.push(Budget {
                id,
                category,
                amount: parse_stored_decimal(&amount)?,
                period: Period::parse(&period)?,
            });
        }
        Ok(out)
    }

    pub fn budget_for_category(&self, category: &str) -> Result<Option<Budget>> {
        Ok(self
            .budgets()?
            .into_iter()
            .find(|b| b.category == category))
    }

    pub fn update_budget(&self, id: i64, patch: BudgetPatch) -> Result<()> {
        let current = self
            .budgets()?
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(Error::NotFound { kind: "budget", id })?;
        let merged = Budget {
            id,
            category: patch.category.unwrap_or(current.category),
            amount: patch.amount.unwrap_or(current.amount),
            period: patch.period.unwrap_or(current.period),
        };
        self.conn.execute(
            "UPDATE budgets SET category=?1, amount=?2, period=?3 WHERE id=?4",
            params![merged.category, merged.amount.to_string(), merged.period.as_str(), id],
        )?;
        Ok(())
    }

    pub fn delete_budget(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM budgets WHERE id=?1", params![id])?;
        Ok(())
    }
}

struct RawTransaction {
    id: i64,
    description: String,
    amount: String,
    category: String,
    date: NaiveDate,
    kind: String,
}

impl RawTransaction {
    fn build(self) -> Result<Transaction> {
        Ok(Transaction {
            id: self.id,
            description: self.description,
            amount: parse_stored_decimal(&self.amount)?,
            category: self.category,
            date: self.date,
            kind: Kind::parse(&self.kind)?,
        })
    }
}

fn map_transaction_raw(r: &Row<'_>) -> rusqlite::Result<RawTransaction> {
    Ok(RawTransaction {
        id: r.get(0)?,
        description: r.get(1)?,
        amount: r.get(2)?,
        category: r.get(3)?,
        date: r.get(4)?,
        kind: r.get(5)?,
    })
}

fn parse_stored_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .map_err(|_| Error::InvalidDecimal(s.to_string()))
}
