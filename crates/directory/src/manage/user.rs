/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use store::{Rows, SqliteStore};

use crate::{core::password, CascadePreview, ConfirmationGate, CredentialHasher, DirectoryError};

use super::{alias_previews, domain_id, domain_part};

pub trait ManageUsers {
    fn list_users(&self) -> crate::Result<Vec<String>>;
    fn create_user(
        &self,
        email: &str,
        hasher: Option<&dyn CredentialHasher>,
    ) -> crate::Result<String>;
    fn delete_user(&self, email: &str, gate: &dyn ConfirmationGate) -> crate::Result<bool>;
}

impl ManageUsers for SqliteStore {
    fn list_users(&self) -> crate::Result<Vec<String>> {
        self.query::<Rows>("SELECT email FROM virtual_users", &[])
            .map(Into::into)
            .map_err(Into::into)
    }

    /// Creates a mailbox user with a generated password and returns the
    /// plaintext exactly once; only the hash is persisted.
    fn create_user(
        &self,
        email: &str,
        hasher: Option<&dyn CredentialHasher>,
    ) -> crate::Result<String> {
        let Some(hasher) = hasher else {
            return Err(DirectoryError::Unavailable("password hashing"));
        };

        let domain = domain_part(email)?;
        if self.query::<bool>(
            "SELECT 1 FROM virtual_users WHERE email = ?",
            &[email.into()],
        )? {
            return Err(DirectoryError::Conflict(format!("user {email:?}")));
        }
        let domain_id = domain_id(self, domain)?
            .ok_or_else(|| DirectoryError::NotFound(format!("domain {domain:?}")))?;

        let plaintext = password::generate();
        let hash = hasher.hash(&plaintext)?;

        self.query::<usize>(
            "INSERT INTO virtual_users (domain_id, email, password) VALUES (?, ?, ?)",
            &[domain_id.into(), email.into(), hash.into()],
        )?;

        tracing::debug!(
            context = "directory",
            event = "create",
            user = email,
            "Created user"
        );

        Ok(plaintext)
    }

    /// Deletes a user together with the aliases that forward to it. Returns
    /// `false` when the operator declines.
    fn delete_user(&self, email: &str, gate: &dyn ConfirmationGate) -> crate::Result<bool> {
        if !self.query::<bool>(
            "SELECT 1 FROM virtual_users WHERE email = ?",
            &[email.into()],
        )? {
            return Err(DirectoryError::NotFound(format!("user {email:?}")));
        }

        let cascade = CascadePreview {
            users: Vec::new(),
            aliases: alias_previews(self.query::<Rows>(
                "SELECT source, destination FROM virtual_aliases WHERE destination = ?",
                &[email.into()],
            )?),
        };

        if !cascade.aliases.is_empty()
            && !gate.confirm(&format!("remove user {email:?} and its aliases"), &cascade)
        {
            tracing::debug!(
                context = "directory",
                event = "abort",
                user = email,
                "User removal declined"
            );

            return Ok(false);
        }

        self.transaction(|trx| {
            if !cascade.aliases.is_empty()
                && trx.exec(
                    "DELETE FROM virtual_aliases WHERE destination = ?",
                    &[email.into()],
                )? == 0
            {
                return Err(store::Error::Internal(format!(
                    "cascade deleted no alias rows for user {email:?}"
                )));
            }
            if trx.exec("DELETE FROM virtual_users WHERE email = ?", &[email.into()])? == 0 {
                return Err(store::Error::Internal(format!(
                    "user row for {email:?} was not deleted"
                )));
            }

            Ok(())
        })?;

        tracing::debug!(
            context = "directory",
            event = "delete",
            user = email,
            aliases = cascade.aliases.len(),
            "Deleted user"
        );

        Ok(true)
    }
}
