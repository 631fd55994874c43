// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::query::TransactionFilter;
use crate::report;
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("cashflow", sub)) => cashflow(ledger, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = ledger.transactions(&TransactionFilter::default())?;
    let s = report::summarize(&transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            fmt_money(&s.income),
            fmt_money(&s.outcome),
            fmt_money(&s.total),
        ]];
        println!("{}", pretty_table(&["Income", "Outcome", "Total"], rows));
    }
    Ok(())
}

fn cashflow(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = ledger.transactions(&TransactionFilter::default())?;
    let mut months = report::monthly_rollup(&transactions);
    if let Some(limit) = sub.get_one::<usize>("months") {
        let skip = months.len().saturating_sub(*limit);
        months.drain(..skip);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &months)? {
        let rows: Vec<Vec<String>> = months
            .iter()
            .map(|m| {
                vec![
                    m.month.clone(),
                    fmt_money(&m.income),
                    fmt_money(&m.outcome),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Outcome"], rows));
    }
    Ok(())
}

fn spend_by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let transactions = ledger.transactions(&TransactionFilter::default())?;
    let data = report::spend_by_category(&transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|(cat, spent)| vec![cat.clone(), fmt_money(spent)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
