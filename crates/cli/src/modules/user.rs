/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use directory::{core::secret::Sha512CryptHasher, manage::ManageUsers};
use store::SqliteStore;

use super::{cli::UserCommands, print_list, StdinGate};

impl UserCommands {
    pub fn exec(self, store: &SqliteStore) -> directory::Result<()> {
        match self {
            UserCommands::Show => {
                print_list("Email", &store.list_users()?, "user");
            }
            UserCommands::Add { email } => {
                let password = store.create_user(&email, Some(&Sha512CryptHasher))?;
                eprintln!("Successfully created user {email:?} with password:");
                println!("{password}");
            }
            UserCommands::Delete { email } => {
                if store.delete_user(&email, &StdinGate)? {
                    eprintln!("Successfully deleted user {email:?}.");
                } else {
                    eprintln!("Removal of user {email:?} aborted.");
                }
            }
        }

        Ok(())
    }
}
