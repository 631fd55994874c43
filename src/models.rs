// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether a record represents money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Outcome,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Outcome => "outcome",
        }
    }

    pub fn parse(s: &str) -> Result<Kind> {
        match s {
            "income" => Ok(Kind::Income),
            "outcome" => Ok(Kind::Outcome),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget period. Monthly limits are the common case; yearly exists for
/// irregular spend like insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Monthly,
    Yearly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Result<Period> {
        match s {
            "monthly" => Ok(Period::Monthly),
            "yearly" => Ok(Period::Yearly),
            other => Err(Error::InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense record. Amounts are signed: positive for
/// income, negative for outcome, and the sign must agree with `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub kind: Kind,
}

impl Transaction {
    /// Magnitude of the amount, regardless of direction.
    pub fn magnitude(&self) -> Decimal {
        self.amount.abs()
    }
}

/// Transaction fields as supplied by the user; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub kind: Kind,
}

/// Partial update for a transaction. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub kind: Option<Kind>,
}

/// A user-defined label classifying transactions and budgets. The color
/// is a display hint only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: Kind,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub kind: Kind,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub kind: Option<Kind>,
    pub color: Option<String>,
}

/// A spending limit for a category over a period. The category is a
/// name reference, not an enforced foreign key; a budget can outlive
/// the category it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub amount: Decimal,
    pub period: Period,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
    pub period: Period,
}

#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub period: Option<Period>,
}

/// Check the amount/kind invariant: non-zero, income positive, outcome
/// negative.
pub fn check_amount(amount: Decimal, kind: Kind) -> Result<()> {
    if amount.is_zero() {
        return Err(Error::ZeroAmount);
    }
    let agrees = match kind {
        Kind::Income => amount > Decimal::ZERO,
        Kind::Outcome => amount < Decimal::ZERO,
    };
    if agrees {
        Ok(())
    } else {
        Err(Error::AmountKindMismatch { amount, kind })
    }
}
