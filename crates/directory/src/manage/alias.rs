/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use store::{Rows, SqliteStore};

use crate::{AliasEntry, AliasScope, DirectoryError};

use super::{domain_id, domain_part};

pub trait ManageAliases {
    fn list_aliases(&self, scope: AliasScope) -> crate::Result<Vec<AliasEntry>>;
    fn search_aliases(&self, needle: &str) -> crate::Result<Vec<AliasEntry>>;
    fn create_alias(
        &self,
        source: &str,
        destination: &str,
        description: Option<&str>,
    ) -> crate::Result<()>;
    fn enable_alias(&self, source: &str) -> crate::Result<usize>;
    fn disable_alias(&self, source: &str) -> crate::Result<usize>;
    fn delete_alias(&self, source: &str) -> crate::Result<usize>;
}

impl ManageAliases for SqliteStore {
    fn list_aliases(&self, scope: AliasScope) -> crate::Result<Vec<AliasEntry>> {
        self.query::<Rows>(
            match scope {
                AliasScope::All => {
                    "SELECT source, destination FROM virtual_aliases ORDER BY source, id"
                }
                AliasScope::Enabled => {
                    "SELECT source, destination FROM virtual_aliases WHERE enabled ORDER BY source, id"
                }
                AliasScope::Disabled => {
                    "SELECT source, destination FROM virtual_aliases WHERE NOT enabled ORDER BY source, id"
                }
            },
            &[],
        )
        .map(aggregate)
        .map_err(Into::into)
    }

    fn search_aliases(&self, needle: &str) -> crate::Result<Vec<AliasEntry>> {
        // instr() instead of LIKE: the match is case-sensitive and the
        // needle needs no wildcard escaping.
        self.query::<Rows>(
            concat!(
                "SELECT source, destination FROM virtual_aliases ",
                "WHERE instr(source, ?) > 0 ORDER BY source, id"
            ),
            &[needle.into()],
        )
        .map(aggregate)
        .map_err(Into::into)
    }

    fn create_alias(
        &self,
        source: &str,
        destination: &str,
        description: Option<&str>,
    ) -> crate::Result<()> {
        let domain = domain_part(source)?;
        if self.query::<bool>(
            "SELECT 1 FROM virtual_aliases WHERE source = ? AND destination = ?",
            &[source.into(), destination.into()],
        )? {
            return Err(DirectoryError::Conflict(format!(
                "alias {source:?} -> {destination:?}"
            )));
        }
        if !self.query::<bool>(
            "SELECT 1 FROM virtual_users WHERE email = ?",
            &[destination.into()],
        )? {
            return Err(DirectoryError::NotFound(format!("user {destination:?}")));
        }
        let domain_id = domain_id(self, domain)?
            .ok_or_else(|| DirectoryError::NotFound(format!("domain {domain:?}")))?;

        self.query::<usize>(
            concat!(
                "INSERT INTO virtual_aliases ",
                "(domain_id, source, destination, description, enabled, created) ",
                "VALUES (?, ?, ?, ?, TRUE, datetime('now'))"
            ),
            &[
                domain_id.into(),
                source.into(),
                destination.into(),
                description.unwrap_or_default().into(),
            ],
        )?;

        tracing::debug!(
            context = "directory",
            event = "create",
            source = source,
            destination = destination,
            "Created alias"
        );

        Ok(())
    }

    /// Enables every mapping of `source`; at least one mapping must
    /// currently be disabled.
    fn enable_alias(&self, source: &str) -> crate::Result<usize> {
        let affected = self.query::<usize>(
            "UPDATE virtual_aliases SET enabled = TRUE WHERE source = ? AND NOT enabled",
            &[source.into()],
        )?;
        if affected == 0 {
            return Err(DirectoryError::NotFound(format!(
                "disabled alias {source:?}"
            )));
        }

        tracing::debug!(
            context = "directory",
            event = "enable",
            source = source,
            mappings = affected,
            "Enabled alias"
        );

        Ok(affected)
    }

    /// Disables every mapping of `source`; at least one mapping must
    /// currently be enabled.
    fn disable_alias(&self, source: &str) -> crate::Result<usize> {
        let affected = self.query::<usize>(
            "UPDATE virtual_aliases SET enabled = FALSE WHERE source = ? AND enabled",
            &[source.into()],
        )?;
        if affected == 0 {
            return Err(DirectoryError::NotFound(format!("enabled alias {source:?}")));
        }

        tracing::debug!(
            context = "directory",
            event = "disable",
            source = source,
            mappings = affected,
            "Disabled alias"
        );

        Ok(affected)
    }

    /// Deletes every mapping of `source` at once.
    fn delete_alias(&self, source: &str) -> crate::Result<usize> {
        let affected = self.query::<usize>(
            "DELETE FROM virtual_aliases WHERE source = ?",
            &[source.into()],
        )?;
        if affected == 0 {
            return Err(DirectoryError::NotFound(format!("alias {source:?}")));
        }

        tracing::debug!(
            context = "directory",
            event = "delete",
            source = source,
            mappings = affected,
            "Deleted alias"
        );

        Ok(affected)
    }
}

/// Merges `(source, destination)` rows ordered by source into one entry per
/// source address.
fn aggregate(rows: Rows) -> Vec<AliasEntry> {
    let mut entries: Vec<AliasEntry> = Vec::new();

    for row in rows.rows {
        let mut values = row.values.into_iter();
        let (Some(source), Some(destination)) = (values.next(), values.next()) else {
            continue;
        };
        let source = source.to_str().into_owned();
        let destination = destination.to_str().into_owned();

        match entries.last_mut() {
            Some(entry) if entry.source == source => entry.destinations.push(destination),
            _ => entries.push(AliasEntry {
                source,
                destinations: vec![destination],
            }),
        }
    }

    entries
}
