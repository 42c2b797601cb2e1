// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn type_arg(help: &'static str) -> Arg {
    Arg::new("type").long("type").value_name("TYPE").help(help)
}

fn transaction_fields(cmd: Command) -> Command {
    cmd.arg(type_arg("expense or revenue").required(true))
        .arg(arg!(--amount <AMOUNT> "Non-negative amount").required(true))
        .arg(arg!(--description <TEXT>).required(true))
        .arg(arg!(--category <NAME>).required(true))
        .arg(arg!(--date <DATE> "YYYY-MM-DD, defaults to today").required(false))
        .arg(arg!(--subcategory <NAME>).required(false))
        .arg(arg!(--tags <TAGS> "Comma separated").required(false))
        .arg(
            Arg::new("payment_method")
                .long("payment-method")
                .value_name("METHOD")
                .required(false),
        )
        .arg(arg!(--notes <TEXT>).required(false))
        .arg(arg!(--recurring <FREQUENCY> "daily|weekly|monthly|yearly").required(false))
}

fn output_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print pretty JSON"))
        .arg(arg!(--jsonl "Print one JSON object per line"))
}

pub fn build_cli() -> Command {
    Command::new("tally")
        .version(clap::crate_version!())
        .about("Personal expense and revenue tracker")
        .arg(
            Arg::new("data_dir")
                .long("data-dir")
                .value_name("DIR")
                .global(true)
                .help("Directory holding tally.json"),
        )
        .arg(
            arg!(-v --verbose "Debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("init").about("Create the data file"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(transaction_fields(Command::new("add").about("Record a transaction")))
                .subcommand(transaction_fields(
                    Command::new("edit")
                        .about("Replace a transaction")
                        .arg(arg!(--id <ID>).required(true)),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(arg!(--id <ID>).required(true)),
                )
                .subcommand(output_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(type_arg("expense, revenue or all").required(false))
                        .arg(arg!(--category <NAME>).required(false))
                        .arg(arg!(--from <DATE>).required(false))
                        .arg(arg!(--to <DATE>).required(false))
                        .arg(arg!(--min <AMOUNT>).required(false))
                        .arg(arg!(--max <AMOUNT>).required(false))
                        .arg(arg!(--search <TEXT>).required(false))
                        .arg(
                            arg!(--tag <TAG> "Repeat to match any of several tags")
                                .required(false)
                                .action(ArgAction::Append),
                        )
                        .arg(
                            arg!(--sort <KEY> "date|amount|description")
                                .required(false)
                                .default_value("date"),
                        )
                        .arg(
                            arg!(--order <ORDER> "asc|desc")
                                .required(false)
                                .default_value("desc"),
                        )
                        .arg(
                            arg!(--limit <N>)
                                .required(false)
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(type_arg("expense or revenue").required(true))
                        .arg(arg!(--color <HEX>).required(false).default_value("#6b7280"))
                        .arg(arg!(--icon <ICON>).required(false).default_value("📝"))
                        .arg(
                            arg!(--sub <SUBCATEGORY>)
                                .required(false)
                                .action(ArgAction::Append),
                        ),
                )
                .subcommand(Command::new("list").arg(type_arg("expense or revenue").required(false)))
                .subcommand(
                    Command::new("rm")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(type_arg("expense or revenue").required(false)),
                ),
        )
        .subcommand(
            Command::new("report").about("Analytics").subcommand(output_flags(
                Command::new("summary")
                    .about("Totals, averages, top categories and 12-month trend"),
            )),
        )
        .subcommand(
            Command::new("export")
                .about("Export transactions")
                .subcommand(
                    Command::new("csv").arg(
                        arg!(--out <PATH> "Defaults to expense-tracker-<today>.csv")
                            .required(false),
                    ),
                )
                .subcommand(Command::new("json").arg(arg!(--out <PATH>).required(true))),
        )
        .subcommand(
            Command::new("import")
                .about("Import transactions from .csv or .json")
                .arg(arg!(--path <PATH>).required(true))
                .arg(arg!(--"dry-run" "Only report how many rows would be imported")),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete all transactions and restore default categories")
                .arg(arg!(--yes "Confirm").required(true)),
        )
}
