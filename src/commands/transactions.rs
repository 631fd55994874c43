// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Kind, NewTransaction, TransactionPatch};
use crate::query::{self, TransactionFilter};
use crate::store::Ledger;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().clone();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    let kind = Kind::parse(sub.get_one::<String>("type").unwrap())?;

    let id = ledger.add_transaction(NewTransaction {
        description: description.clone(),
        amount,
        category,
        date,
        kind,
    })?;
    println!("Recorded '{}' ({}) on {} as #{}", description, amount, date, id);
    Ok(())
}

/// Build the in-memory filter from CLI flags. `all` for category or
/// type means no constraint, matching the UI's sentinel dropdowns.
pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    let mut filter = TransactionFilter::default();
    if let Some(q) = sub.get_one::<String>("query") {
        filter.query = Some(q.clone());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        if cat != "all" {
            filter.category = Some(cat.clone());
        }
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        if kind != "all" {
            filter.kind = Some(Kind::parse(kind)?);
        }
    }
    if let Some(from) = sub.get_one::<String>("from") {
        filter.date_from = Some(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.date_to = Some(parse_date(to)?);
    }
    Ok(filter)
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_matches(sub)?;
    let all = ledger.transactions(&filter)?;
    let page = sub.get_one::<usize>("page").copied();
    let shown = match page {
        Some(p) => query::paginate(&all, p),
        None => &all[..],
    };
    if !maybe_print_json(json_flag, jsonl_flag, &shown)? {
        let rows: Vec<Vec<String>> = shown
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    t.kind.to_string(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Description", "Category", "Type", "Amount"], rows)
        );
        if let Some(p) = page {
            println!("Page {} of {}", p.max(1), query::page_count(all.len()).max(1));
        }
    }
    Ok(())
}

fn edit(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = TransactionPatch::default();
    if let Some(d) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(d)?);
    }
    if let Some(d) = sub.get_one::<String>("description") {
        patch.description = Some(d.clone());
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_decimal(a)?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        patch.category = Some(c.clone());
    }
    if let Some(k) = sub.get_one::<String>("type") {
        patch.kind = Some(Kind::parse(k)?);
    }
    ledger.update_transaction(id, patch)?;
    println!("Updated transaction #{}", id);
    Ok(())
}

fn rm(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    ledger.delete_transaction(id)?;
    println!("Removed transaction #{}", id);
    Ok(())
}
