// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::rates::{self, Quote};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("fetch", sub)) => fetch(sub)?,
        Some(("watch", _)) => watch()?,
        _ => {}
    }
    Ok(())
}

fn print_quote(quote: &Quote) {
    let rows = vec![vec![
        format!("{}/{}", quote.code, quote.codein),
        quote.bid.clone(),
        quote.ask.clone(),
        quote.high.clone(),
        quote.low.clone(),
        quote.pct_change.clone(),
        quote.create_date.clone(),
    ]];
    println!(
        "{}",
        pretty_table(&["Pair", "Bid", "Ask", "High", "Low", "Change %", "As of"], rows)
    );
}

fn fetch(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let client = rates::http_client()?;
    let quote = rates::fetch_quote(&client)?;
    if !maybe_print_json(json_flag, jsonl_flag, &quote)? {
        print_quote(&quote);
    }
    Ok(())
}

/// Poll forever. A failed fetch is reported and retried on the next
/// tick; the quote is display-only and never blocks anything else.
fn watch() -> Result<()> {
    let client = rates::http_client()?;
    loop {
        match rates::fetch_quote(&client) {
            Ok(quote) => print_quote(&quote),
            Err(err) => eprintln!("Quote fetch failed: {err:#}"),
        }
        std::thread::sleep(rates::POLL_INTERVAL);
    }
}
