// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use dtmoney::commands::transactions;
use dtmoney::models::Kind;
use dtmoney::cli;

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["dtmoney", "tx", "list"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_flags_build_the_filter() {
    let m = list_matches(&[
        "--query",
        "mercado",
        "--type",
        "outcome",
        "--from",
        "2024-01-01",
        "--to",
        "2024-01-31",
    ]);
    let filter = transactions::filter_from_matches(&m).unwrap();
    assert_eq!(filter.query.as_deref(), Some("mercado"));
    assert_eq!(filter.kind, Some(Kind::Outcome));
    assert_eq!(
        filter.date_from,
        Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    );
    assert_eq!(
        filter.date_to,
        Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
    );
    assert!(filter.category.is_none());
}

#[test]
fn all_sentinel_imposes_no_constraint() {
    let m = list_matches(&["--category", "all", "--type", "all"]);
    let filter = transactions::filter_from_matches(&m).unwrap();
    assert!(filter.is_empty());
}

#[test]
fn bad_type_is_rejected() {
    let m = list_matches(&["--type", "expense"]);
    assert!(transactions::filter_from_matches(&m).is_err());
}

#[test]
fn bad_date_is_rejected() {
    let m = list_matches(&["--from", "01/02/2024"]);
    assert!(transactions::filter_from_matches(&m).is_err());
}
