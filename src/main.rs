// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use dtmoney::{Ledger, cli, commands, db, seed};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let ledger = Ledger::open_default()?;
    if seed::ensure_default_categories(&ledger)? {
        eprintln!("Seeded default categories");
    }

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(&ledger, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("rate", sub)) => commands::rates::handle(sub)?,
        Some(("demo", _)) => match seed::populate_demo_data(&ledger)? {
            Some((txs, budgets)) => {
                println!("Added {} sample transactions and {} budgets", txs, budgets);
            }
            None => println!("Ledger already has data; demo left it untouched"),
        },
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
