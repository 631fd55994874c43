// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BudgetPatch, NewBudget, Period};
use crate::query::TransactionFilter;
use crate::report::{self, BudgetStatus};
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("report", sub)) => budget_report(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// One budget per category: setting again replaces the amount and
/// period rather than stacking a second limit.
fn set(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().clone();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let period = Period::parse(sub.get_one::<String>("period").unwrap())?;
    if amount <= Decimal::ZERO {
        bail!("Budget amount must be positive, got {}", amount);
    }

    match ledger.budget_for_category(&category)? {
        Some(existing) => {
            ledger.update_budget(
                existing.id,
                BudgetPatch {
                    amount: Some(amount),
                    period: Some(period),
                    ..Default::default()
                },
            )?;
        }
        None => {
            ledger.add_budget(NewBudget {
                category: category.clone(),
                amount,
                period,
            })?;
        }
    }
    println!("Budget set for {} = {} ({})", category, amount, period);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = ledger.budgets()?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| {
                vec![
                    b.category.clone(),
                    fmt_money(&b.amount),
                    b.period.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Limit", "Period"], rows));
    }
    Ok(())
}

fn rm(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap();
    match ledger.budget_for_category(category)? {
        Some(budget) => {
            ledger.delete_budget(budget.id)?;
            println!("Removed budget for '{}'", category);
        }
        None => println!("No budget for '{}'", category),
    }
    Ok(())
}

#[derive(Serialize)]
struct BudgetReportRow {
    category: String,
    limit: Decimal,
    spent: Decimal,
    percentage: Decimal,
    status: BudgetStatus,
}

fn budget_report(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = ledger.transactions(&TransactionFilter::default())?;

    let mut data = Vec::new();
    for budget in ledger.budgets()? {
        let util = report::utilization(&budget, &transactions);
        data.push(BudgetReportRow {
            category: budget.category,
            limit: budget.amount,
            spent: util.spent,
            percentage: util.percentage,
            status: util.status,
        });
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    fmt_money(&r.limit),
                    fmt_money(&r.spent),
                    format!("{:.1}%", r.percentage),
                    r.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Limit", "Spent", "Used", "Status"], rows)
        );
    }
    Ok(())
}
