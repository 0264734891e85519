/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use store::{Rows, SqliteStore};

use crate::{CascadePreview, ConfirmationGate, DirectoryError};

use super::{alias_previews, domain_id};

pub trait ManageDomains {
    fn list_domains(&self) -> crate::Result<Vec<String>>;
    fn create_domain(&self, name: &str) -> crate::Result<()>;
    fn delete_domain(&self, name: &str, gate: &dyn ConfirmationGate) -> crate::Result<bool>;
}

impl ManageDomains for SqliteStore {
    fn list_domains(&self) -> crate::Result<Vec<String>> {
        self.query::<Rows>("SELECT name FROM virtual_domains", &[])
            .map(Into::into)
            .map_err(Into::into)
    }

    fn create_domain(&self, name: &str) -> crate::Result<()> {
        if name.is_empty() {
            return Err(DirectoryError::Malformed(name.to_string()));
        }
        if self.query::<bool>(
            "SELECT 1 FROM virtual_domains WHERE name = ?",
            &[name.into()],
        )? {
            return Err(DirectoryError::Conflict(format!("domain {name:?}")));
        }

        self.query::<usize>(
            "INSERT INTO virtual_domains (name) VALUES (?)",
            &[name.into()],
        )?;

        tracing::debug!(
            context = "directory",
            event = "create",
            domain = name,
            "Created domain"
        );

        Ok(())
    }

    /// Deletes a domain together with its users and aliases. Returns `false`
    /// when the operator declines, leaving the directory untouched.
    fn delete_domain(&self, name: &str, gate: &dyn ConfirmationGate) -> crate::Result<bool> {
        let domain_id = domain_id(self, name)?
            .ok_or_else(|| DirectoryError::NotFound(format!("domain {name:?}")))?;

        let cascade = CascadePreview {
            users: self
                .query::<Rows>(
                    "SELECT email FROM virtual_users WHERE domain_id = ?",
                    &[domain_id.into()],
                )?
                .into(),
            aliases: alias_previews(self.query::<Rows>(
                "SELECT source, destination FROM virtual_aliases WHERE domain_id = ?",
                &[domain_id.into()],
            )?),
        };

        if !gate.confirm(
            &format!("remove domain {name:?} including all aliases and users"),
            &cascade,
        ) {
            tracing::debug!(
                context = "directory",
                event = "abort",
                domain = name,
                "Domain removal declined"
            );

            return Ok(false);
        }

        // Aliases first, then users, then the domain row; a step that
        // affects no rows aborts and rolls the cascade back.
        self.transaction(|trx| {
            if !cascade.aliases.is_empty()
                && trx.exec(
                    "DELETE FROM virtual_aliases WHERE domain_id = ?",
                    &[domain_id.into()],
                )? == 0
            {
                return Err(store::Error::Internal(format!(
                    "cascade deleted no alias rows for domain {name:?}"
                )));
            }
            if !cascade.users.is_empty()
                && trx.exec(
                    "DELETE FROM virtual_users WHERE domain_id = ?",
                    &[domain_id.into()],
                )? == 0
            {
                return Err(store::Error::Internal(format!(
                    "cascade deleted no user rows for domain {name:?}"
                )));
            }
            if trx.exec(
                "DELETE FROM virtual_domains WHERE id = ?",
                &[domain_id.into()],
            )? == 0
            {
                return Err(store::Error::Internal(format!(
                    "domain row for {name:?} was not deleted"
                )));
            }

            Ok(())
        })?;

        tracing::debug!(
            context = "directory",
            event = "delete",
            domain = name,
            users = cascade.users.len(),
            aliases = cascade.aliases.len(),
            "Deleted domain"
        );

        Ok(true)
    }
}
