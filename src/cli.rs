// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("dtmoney")
        .about("DT Money: local-first personal finance tracking")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create or migrate the local database"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Signed: positive income, negative outcome"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income | outcome"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions in insertion order")
                        .arg(
                            Arg::new("query")
                                .long("query")
                                .help("Substring match on description, case-insensitive"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Exact category name, or 'all'"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .help("income | outcome | all"),
                        )
                        .arg(Arg::new("from").long("from").help("Inclusive start date"))
                        .arg(Arg::new("to").long("to").help("Inclusive end date"))
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .value_parser(value_parser!(usize))
                                .help("1-based page of 10 rows; omit for all rows"),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Change fields of an existing transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("type").long("type")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction; deleting a missing id is a no-op")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income | outcome"),
                        )
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .default_value("#00B37E")
                                .help("Display hint, e.g. #F75A68"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List categories")))
                .subcommand(
                    Command::new("edit")
                        .about("Rename or recolor a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("new-name").long("new-name"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("color").long("color")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category; existing transactions keep the name")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage spending limits")
                .subcommand(
                    Command::new("set")
                        .about("Create or replace the budget for a category")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive limit"),
                        )
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .default_value("monthly")
                                .help("monthly | yearly"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List budgets")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove the budget for a category")
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("report").about("Spend, utilization and status per budget"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the transaction list")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, outcome and net total"),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Monthly income/outcome rollup, chronological")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .help("Most recent N months only"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category").about("Outcome totals per category"),
                )),
        )
        .subcommand(
            Command::new("rate")
                .about("USD-BRL exchange rate widget")
                .subcommand(json_flags(Command::new("fetch").about("Print the current quote")))
                .subcommand(
                    Command::new("watch").about("Poll the quote every 5 minutes until interrupted"),
                ),
        )
        .subcommand(Command::new("demo").about("Populate the sample dataset into an empty ledger"))
}
