// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::models::{CategoryPatch, Kind, NewCategory};
use crate::store::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

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
    let name = sub.get_one::<String>("name").unwrap().clone();
    let kind = Kind::parse(sub.get_one::<String>("type").unwrap())?;
    let color = sub.get_one::<String>("color").unwrap().clone();

    // Uniqueness is a CLI courtesy; the store itself does not enforce it.
    if ledger.category_by_name(&name)?.is_some() {
        bail!("Category '{}' already exists", name);
    }
    ledger.add_category(NewCategory { name: name.clone(), kind, color })?;
    println!("Added category '{}'", name);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = ledger.categories()?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| vec![c.name.clone(), c.kind.to_string(), c.color.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Type", "Color"], rows));
    }
    Ok(())
}

fn edit(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let Some(current) = ledger.category_by_name(name)? else {
        bail!("No category named '{}'", name);
    };
    let mut patch = CategoryPatch::default();
    if let Some(n) = sub.get_one::<String>("new-name") {
        patch.name = Some(n.clone());
    }
    if let Some(k) = sub.get_one::<String>("type") {
        patch.kind = Some(Kind::parse(k)?);
    }
    if let Some(c) = sub.get_one::<String>("color") {
        patch.color = Some(c.clone());
    }
    ledger.update_category(current.id, patch)?;
    println!("Updated category '{}'", name);
    Ok(())
}

fn rm(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    match ledger.category_by_name(name)? {
        Some(cat) => {
            ledger.delete_category(cat.id)?;
            println!("Removed category '{}'", name);
        }
        None => println!("No category named '{}'", name),
    }
    Ok(())
}
