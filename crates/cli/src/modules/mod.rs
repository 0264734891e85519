/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::io::BufRead;

use console::style;
use directory::{CascadePreview, ConfirmationGate};
use prettytable::{Attr, Cell, Row, Table};

pub mod alias;
pub mod cli;
pub mod domain;
pub mod user;

/// Prompts the operator on the terminal; only the literal value "YES"
/// confirms the removal.
pub struct StdinGate;

impl ConfirmationGate for StdinGate {
    fn confirm(&self, prompt: &str, cascade: &CascadePreview) -> bool {
        if !cascade.users.is_empty() {
            eprintln!("\nThe following users will be removed:");
            for user in &cascade.users {
                eprintln!("  {user}");
            }
        }
        if !cascade.aliases.is_empty() {
            eprintln!("\nThe following aliases will be removed:");
            for alias in &cascade.aliases {
                eprintln!("  {alias}");
            }
        }
        eprint!("\n{}? Type {} to confirm: ", prompt, style("YES").bold());

        matches!(
            std::io::stdin().lock().lines().next(),
            Some(Ok(line)) if line == "YES"
        )
    }
}

pub fn print_list(header: &str, items: &[String], noun: &str) {
    if !items.is_empty() {
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new(header).with_style(Attr::Bold)]));

        for item in items {
            table.add_row(Row::new(vec![Cell::new(item)]));
        }

        eprintln!();
        table.printstd();
    }

    eprintln!(
        "\n{} {}{} found.",
        items.len(),
        noun,
        if items.len() == 1 { "" } else { "s" }
    );
}
