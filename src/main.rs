// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tally::{cli, commands, db};

fn init_logging(verbose: bool) {
    let default = if verbose { "tally=debug" } else { "tally=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    init_logging(matches.get_flag("verbose"));

    let data_dir = matches.get_one::<String>("data_dir").map(PathBuf::from);
    let (mut store, path) = db::open_or_init(data_dir.as_deref())?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data file initialized at {}", path.display());
        }
        Some(("tx", sub)) => {
            commands::transactions::handle(&mut store, sub)?;
            db::save(&store, &path)?;
        }
        Some(("category", sub)) => {
            commands::categories::handle(&mut store, sub)?;
            db::save(&store, &path)?;
        }
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => {
            commands::importer::handle(&mut store, sub)?;
            db::save(&store, &path)?;
        }
        Some(("reset", _)) => {
            store.clear();
            db::save(&store, &path)?;
            println!("All data cleared");
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
