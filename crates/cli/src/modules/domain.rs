/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::manage::ManageDomains;
use store::SqliteStore;

use super::{cli::DomainCommands, print_list, StdinGate};

impl DomainCommands {
    pub fn exec(self, store: &SqliteStore) -> directory::Result<()> {
        match self {
            DomainCommands::Show => {
                print_list("Domain Name", &store.list_domains()?, "domain");
            }
            DomainCommands::Add { name } => {
                store.create_domain(&name)?;
                eprintln!("Successfully created domain {name:?}.");
            }
            DomainCommands::Delete { name } => {
                if store.delete_domain(&name, &StdinGate)? {
                    eprintln!("Successfully deleted domain {name:?}.");
                } else {
                    eprintln!("Removal of domain {name:?} aborted.");
                }
            }
        }

        Ok(())
    }
}
