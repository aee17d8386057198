// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

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
    Command::new("tallybook")
        .about("Personal-finance ledger: record, import, categorize and report")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the data dir and seed default accounts"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("checking, savings or credit"),
                        )
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0")
                                .allow_hyphen_values(true)
                                .help("Opening balance"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List accounts with reconciled balances"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account with no transactions")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Signed amount: positive income, negative expense"),
                        )
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category label; keyword rules apply when omitted"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit fields of a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(u64)),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(u64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("import").about("Import external data").subcommand(
                Command::new("transactions")
                    .about("Import a CSV or JSON transaction file into one account")
                    .arg(Arg::new("path").long("path").required(true))
                    .arg(Arg::new("account").long("account").required(true))
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(
                        Arg::new("delimiter")
                            .long("delimiter")
                            .default_value(",")
                            .help("Field delimiter for csv input"),
                    ),
            ),
        )
        .subcommand(
            Command::new("report")
                .about("Reports")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Income, expenses and spend by category for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("YYYY-MM"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("balances").about("Reconciled balance per account"),
                )),
        )
}
