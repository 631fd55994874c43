// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{Kind, NewBudget, NewCategory, NewTransaction, Period};
use crate::store::Ledger;

const DEFAULT_CATEGORIES: &[(&str, Kind, &str)] = &[
    ("Salário", Kind::Income, "#00B37E"),
    ("Venda", Kind::Income, "#00875F"),
    ("Alimentação", Kind::Outcome, "#F75A68"),
    ("Transporte", Kind::Outcome, "#FF6B6B"),
    ("Casa", Kind::Outcome, "#4ECDC4"),
    ("Lazer", Kind::Outcome, "#45B7D1"),
    ("Saúde", Kind::Outcome, "#96CEB4"),
    ("Educação", Kind::Outcome, "#FFEAA7"),
    ("Itens", Kind::Outcome, "#DDA0DD"),
];

// (description, amount, category, days before today, kind)
const DEMO_TRANSACTIONS: &[(&str, i64, &str, i64, Kind)] = &[
    ("Salário Mensal", 5000, "Salário", 5, Kind::Income),
    ("Freelance - Desenvolvimento Web", 1500, "Venda", 45, Kind::Income),
    ("Bônus", 800, "Salário", 60, Kind::Income),
    ("Consultoria", 2000, "Venda", 20, Kind::Income),
    ("Supermercado", -450, "Alimentação", 10, Kind::Outcome),
    ("Restaurante", -120, "Alimentação", 5, Kind::Outcome),
    ("Padaria", -80, "Alimentação", 3, Kind::Outcome),
    ("iFood", -65, "Alimentação", 2, Kind::Outcome),
    ("Combustível", -200, "Transporte", 7, Kind::Outcome),
    ("Uber", -45, "Transporte", 4, Kind::Outcome),
    ("Manutenção do carro", -350, "Transporte", 25, Kind::Outcome),
    ("Aluguel", -1200, "Casa", 5, Kind::Outcome),
    ("Conta de Luz", -150, "Casa", 15, Kind::Outcome),
    ("Conta de Água", -80, "Casa", 20, Kind::Outcome),
    ("Internet", -100, "Casa", 12, Kind::Outcome),
    ("Cinema", -60, "Lazer", 8, Kind::Outcome),
    ("Streaming (Netflix)", -35, "Lazer", 5, Kind::Outcome),
    ("Academia", -90, "Saúde", 10, Kind::Outcome),
    ("Plano de Saúde", -280, "Saúde", 5, Kind::Outcome),
    ("Farmácia", -120, "Saúde", 15, Kind::Outcome),
    ("Curso Online", -200, "Educação", 30, Kind::Outcome),
    ("Livros", -85, "Educação", 20, Kind::Outcome),
    ("Roupa", -250, "Itens", 40, Kind::Outcome),
    ("Eletrônicos", -800, "Itens", 50, Kind::Outcome),
];

const DEMO_BUDGETS: &[(&str, i64)] = &[
    ("Alimentação", 800),
    ("Transporte", 600),
    ("Casa", 1600),
    ("Lazer", 300),
    ("Saúde", 500),
    ("Educação", 400),
];

/// Insert the default category set on first run. A non-empty category
/// table means the user already has data and nothing is touched.
/// Returns whether seeding happened.
pub fn ensure_default_categories(ledger: &Ledger) -> Result<bool> {
    if !ledger.categories()?.is_empty() {
        return Ok(false);
    }
    for (name, kind, color) in DEFAULT_CATEGORIES {
        ledger.add_category(NewCategory {
            name: (*name).to_string(),
            kind: *kind,
            color: (*color).to_string(),
        })?;
    }
    Ok(true)
}

/// Populate a sample dataset so summaries and reports render without
/// manual data entry. Dates are offsets from today, mirroring the kind
/// of recent history a real ledger would hold. Only an empty ledger is
/// populated; re-running against existing transactions or budgets
/// returns `None` instead of stacking duplicates.
pub fn populate_demo_data(ledger: &Ledger) -> Result<Option<(usize, usize)>> {
    if !ledger
        .transactions(&crate::query::TransactionFilter::default())?
        .is_empty()
        || !ledger.budgets()?.is_empty()
    {
        return Ok(None);
    }
    let today = Utc::now().date_naive();
    for (description, amount, category, days_ago, kind) in DEMO_TRANSACTIONS {
        ledger.add_transaction(NewTransaction {
            description: (*description).to_string(),
            amount: Decimal::from(*amount),
            category: (*category).to_string(),
            date: today - Duration::days(*days_ago),
            kind: *kind,
        })?;
    }
    for (category, amount) in DEMO_BUDGETS {
        ledger.add_budget(NewBudget {
            category: (*category).to_string(),
            amount: Decimal::from(*amount),
            period: Period::Monthly,
        })?;
    }
    Ok(Some((DEMO_TRANSACTIONS.len(), DEMO_BUDGETS.len())))
}
