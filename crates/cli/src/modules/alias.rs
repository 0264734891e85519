/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{manage::ManageAliases, AliasEntry};
use prettytable::{Attr, Cell, Row, Table};
use store::SqliteStore;

use super::cli::AliasCommands;

impl AliasCommands {
    pub fn exec(self, store: &SqliteStore) -> directory::Result<()> {
        match self {
            AliasCommands::Show { scope } => {
                print_aliases(&store.list_aliases(scope.into())?);
            }
            AliasCommands::Search { pattern } => {
                print_aliases(&store.search_aliases(&pattern)?);
            }
            AliasCommands::Add {
                source,
                destination,
                description,
            } => {
                store.create_alias(&source, &destination, description.as_deref())?;
                eprintln!("Successfully created alias {source:?} -> {destination:?}.");
            }
            AliasCommands::Enable { source } => {
                store.enable_alias(&source)?;
                eprintln!("Successfully enabled alias {source:?}.");
            }
            AliasCommands::Disable { source } => {
                store.disable_alias(&source)?;
                eprintln!("Successfully disabled alias {source:?}.");
            }
            AliasCommands::Delete { source } => {
                store.delete_alias(&source)?;
                eprintln!("Successfully deleted alias {source:?}.");
            }
        }

        Ok(())
    }
}

fn print_aliases(entries: &[AliasEntry]) {
    if !entries.is_empty() {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Source").with_style(Attr::Bold),
            Cell::new("Destinations").with_style(Attr::Bold),
        ]));

        for entry in entries {
            table.add_row(Row::new(vec![
                Cell::new(&entry.source),
                Cell::new(&entry.destinations.join(", ")),
            ]));
        }

        eprintln!();
        table.printstd();
    }

    eprintln!(
        "\n{} alias{} found.",
        entries.len(),
        if entries.len() == 1 { "" } else { "es" }
    );
}
