// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Budget, Kind, Transaction};

/// Income total, outcome total (as a magnitude), and their difference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub outcome: Decimal,
    pub total: Decimal,
}

/// Partition by kind and sum each side. `total` is exactly
/// `income - outcome`; Decimal arithmetic keeps it drift-free.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut outcome = Decimal::ZERO;
    for tx in transactions {
        match tx.kind {
            Kind::Income => income += tx.amount,
            Kind::Outcome => outcome += tx.magnitude(),
        }
    }
    Summary {
        income,
        outcome,
        total: income - outcome,
    }
}

/// Outcome spend grouped by category name, absolute amounts, sorted by
/// spend descending. Feeds both the category breakdown and budget
/// utilization.
pub fn spend_by_category(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for tx in transactions {
        if tx.kind == Kind::Outcome {
            *agg.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.magnitude();
        }
    }
    let mut items: Vec<_> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

/// Per-month income and outcome totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// Zero-padded `YYYY-MM`, so lexicographic order is chronological.
    pub month: String,
    pub income: Decimal,
    pub outcome: Decimal,
}

pub fn monthly_rollup(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let key = tx.date.format("%Y-%m").to_string();
        let entry = map.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            Kind::Income => entry.0 += tx.amount,
            Kind::Outcome => entry.1 += tx.magnitude(),
        }
    }
    map.into_iter()
        .map(|(month, (income, outcome))| MonthlyTotal {
            month,
            income,
            outcome,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    Ok,
    Warning,
    OverBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BudgetStatus::Ok => "ok",
            BudgetStatus::Warning => "warning",
            BudgetStatus::OverBudget => "over-budget",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utilization {
    pub spent: Decimal,
    /// Unclamped: can exceed 100. Clamping is a display concern only.
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

/// Spend against a budget's limit. A zero or negative limit reports 0%
/// rather than dividing by it.
pub fn utilization(budget: &Budget, transactions: &[Transaction]) -> Utilization {
    let spent: Decimal = transactions
        .iter()
        .filter(|tx| tx.kind == Kind::Outcome && tx.category == budget.category)
        .map(|tx| tx.magnitude())
        .sum();
    let percentage = if budget.amount > Decimal::ZERO {
        spent / budget.amount * Decimal::from(100)
    } else {
        Decimal::ZERO
    };
    let status = if percentage >= Decimal::from(100) {
        BudgetStatus::OverBudget
    } else if percentage >= Decimal::from(80) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    };
    Utilization {
        spent,
        percentage,
        status,
    }
}
