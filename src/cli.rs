// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub const USER_ENV: &str = "LEDGERLENS_USER";
pub const DEFAULT_USER: &str = "me";

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn months_arg() -> Arg {
    Arg::new("months")
        .long("months")
        .value_parser(value_parser!(u32).range(1..=120))
        .default_value("6")
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
}

pub fn build_cli() -> Command {
    Command::new("ledgerlens")
        .about("Personal finance dashboard analytics, salary envelopes, and monthly recaps")
        .version(clap::crate_version!())
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .env(USER_ENV)
                .default_value(DEFAULT_USER)
                .help("Profile whose transactions are used"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .help("Reference date YYYY-MM-DD (defaults to the local date)"),
        )
        .subcommand(Command::new("init").about("Create the database and default user"))
        .subcommand(
            Command::new("user")
                .about("Manage profiles")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(type_arg())
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("method").long("method").default_value("other"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("salary")
                        .about("Record a salary income")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month"))
                        .arg(type_arg())
                        .arg(Arg::new("limit").long("limit").value_parser(value_parser!(usize))),
                ))
                .subcommand(json_flags(
                    Command::new("recent").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .default_value("12"),
                    ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Dashboard reports")
                .subcommand(json_flags(Command::new("monthly").arg(months_arg())))
                .subcommand(json_flags(Command::new("statements")))
                .subcommand(json_flags(
                    Command::new("categories").arg(type_arg().default_value("expense")),
                ))
                .subcommand(json_flags(Command::new("stacked")))
                .subcommand(json_flags(Command::new("methods")))
                .subcommand(json_flags(Command::new("week")))
                .subcommand(json_flags(Command::new("trends")))
                .subcommand(json_flags(Command::new("totals"))),
        )
        .subcommand(
            Command::new("envelope")
                .about("Salary envelopes for the current month")
                .subcommand(json_flags(Command::new("status"))),
        )
        .subcommand(
            Command::new("plan")
                .about("Salary plan and settings")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("label").long("label"))
                        .arg(
                            Arg::new("pct")
                                .long("pct")
                                .required(true)
                                .help("Share of salary as a fraction, e.g. 0.2"),
                        )
                        .arg(Arg::new("color").long("color")),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true)))
                .subcommand(Command::new("reset"))
                .subcommand(
                    Command::new("bucket")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("envelope").long("envelope").required(true)),
                )
                .subcommand(
                    Command::new("currency").arg(Arg::new("code").long("code").required(true)),
                )
                .subcommand(
                    Command::new("suggest").arg(
                        Arg::new("enabled")
                            .long("enabled")
                            .required(true)
                            .value_parser(value_parser!(bool)),
                    ),
                ),
        )
        .subcommand(json_flags(
            Command::new("recap").about("Narrative summary of each month with data"),
        ))
        .subcommand(
            Command::new("outlook")
                .about("Projections and insights")
                .subcommand(json_flags(Command::new("projection")))
                .subcommand(json_flags(Command::new("insights"))),
        )
        .subcommand(
            Command::new("note")
                .about("Planned future incomes and expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(type_arg().required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true))),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("statement")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        ),
                ),
        )
        .subcommand(Command::new("doctor").about("Check settings and data for problems"))
}
