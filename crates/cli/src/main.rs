/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use clap::Parser;
use store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::modules::cli::{Cli, Commands};

pub mod modules;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let store = SqliteStore::open(&args.database).unwrap_or_else(|err| {
        eprintln!("Failed to open database: {}.", err);
        std::process::exit(1);
    });

    let result = match args.command {
        Commands::Domain(command) => command.exec(&store),
        Commands::User(command) => command.exec(&store),
        Commands::Alias(command) => command.exec(&store),
    };

    if let Err(err) = result {
        eprintln!("Error: {}.", err);
        std::process::exit(1);
    }
}
